//! Core value types for the timing pipeline.

mod encoding;
mod time_span;

pub use encoding::TimeEncoding;
pub use time_span::TimeSpan;
