pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod report;
pub mod scanner;

pub use error::{RepoDoctorError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_VIOLATIONS: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
