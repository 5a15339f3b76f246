pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod target;
pub mod ui;
pub mod versioning;

pub use error::{NextVersionError, Result};
