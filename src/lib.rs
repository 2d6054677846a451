pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;

pub use error::{Result, TeamBuilderError};
