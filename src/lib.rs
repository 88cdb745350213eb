pub mod cli;
pub mod commands;
pub mod error;
pub mod header;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod runner;
pub mod scanner;

pub use error::{HeaderGuardError, Result, TargetError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
