pub mod app;
pub mod repl;

pub use app::{Cli, LogLevel};
