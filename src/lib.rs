pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;
pub mod logging;
pub mod util;
