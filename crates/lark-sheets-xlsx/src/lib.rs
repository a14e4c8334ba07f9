//! SpreadsheetML part codecs for the lark-sheets formatting model.
//!
//! Reads and writes the shared-string table (sharedStrings.xml), the style
//! sheet (styles.xml), and the theme color scheme (theme1.xml), preserving
//! the consuming application's markup quirks: significant-whitespace
//! handling on text, presence-based boolean markers, and fixed element
//! ordering.

mod codec;
pub mod error;
pub mod shared_strings;
pub mod styles;
pub mod theme;

pub use error::{XlsxError, XlsxResult};
pub use shared_strings::{read_shared_strings_xml, write_shared_strings_xml};
pub use styles::{read_styles_xml, write_styles_xml};
pub use theme::read_theme_xml;
