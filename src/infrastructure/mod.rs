//! Infrastructure layer module
//!
//! Everything that touches the outside world:
//! - Account inputs from environment variables
//! - Settings loading (figment)
//! - Logging setup
//! - Atomic output file writes

pub mod config;
pub mod env;
pub mod logging;
pub mod writer;

pub use env::AccountInputs;
pub use writer::write_atomically;
