//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON, pretty and compact formatting on stderr
//! - Token redaction for log fields

pub mod config;
pub mod logger;
pub mod redaction;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use redaction::mask_token;
