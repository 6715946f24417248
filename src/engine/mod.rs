pub mod canon;
pub mod group;
pub mod nested;
pub mod path;
pub mod record;
pub mod report;
pub mod summary;
