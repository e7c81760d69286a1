pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exit_codes;
pub mod registry;
pub mod ui;

pub use error::{HarborTagError, Result};
