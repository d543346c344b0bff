//! Source API
//!
//! Configuration for the upstream feeds: URLs, which global provider to use,
//! cache lifetime and request timeout.

pub mod config;

pub use config::{GlobalProvider, SourceConfig, SourceConfigBuilder};
