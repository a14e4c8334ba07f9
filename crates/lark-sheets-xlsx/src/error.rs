//! XLSX codec error types

use thiserror::Error;

/// Result type for XLSX codec operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while decoding or encoding SpreadsheetML parts
#[derive(Debug, Error)]
pub enum XlsxError {
    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A boolean marker element carried an unrecognized `val` attribute
    #[error("\"{0}\" is not a valid boolean value")]
    InvalidBooleanLiteral(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] lark_sheets_core::Error),
}
