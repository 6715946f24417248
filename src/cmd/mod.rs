pub mod diff;
pub mod entry;
pub mod options;
pub mod path;
