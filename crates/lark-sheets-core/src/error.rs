//! Error types for lark-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lark-sheets-core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cell format index referenced but not present in the style sheet
    #[error("Cell format index {0} out of range (count: {1})")]
    FormatIndexOutOfRange(u32, usize),

    /// Named-style format reference (xfId) does not resolve to a record
    #[error("Named style xfId {0} does not resolve to a format record (count: {1})")]
    DanglingNamedStyle(u32, usize),
}
