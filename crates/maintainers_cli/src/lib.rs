//! Maintainers generator CLI library exports for integration testing.
//!
//! This module exposes the command implementation behind the
//! `generate-maintainers` binary.

pub mod errors;
pub mod generate;

pub use errors::Error;
pub use generate::{execute, write_output, GenerateArgs};
