pub mod change;
pub mod config;
pub mod entry;
pub mod error;
pub mod path;
pub mod report;
