//! Error types for the upstream boundary

mod source_error;

pub use source_error::{Result, SourceError};
