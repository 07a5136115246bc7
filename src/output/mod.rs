//! Console output formatting

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
