//! Minimal XLSX (Office Open XML spreadsheet) writer.
//!
//! Only what the roster export needs: string cells, a bold header row and
//! per-column widths.

pub mod worksheet;
pub mod writer;
pub mod xml;

pub use worksheet::Worksheet;
pub use xml::is_xml_char;
pub use writer::{validate_sheet_name, WorkbookWriter, INVALID_SHEET_NAME_CHARS, MAX_SHEET_NAME_LEN};
