//! Domain layer for the config builder
//!
//! Account types, the bulk payload decoder, the output document and the
//! fatal error taxonomy. Nothing here touches the environment or the disk.

pub mod errors;
pub mod models;

pub use errors::{BuildError, BuildResult, FAILURE_EXIT_CODE};
