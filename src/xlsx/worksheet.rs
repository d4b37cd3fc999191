//! A single worksheet held in memory until it is written into the package.

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use super::xml::{column_letter, escape_xml, HEADER_STYLE, MAIN_NS, XML_DECLARATION};

/// Worksheet of string cells with an optional bold header row.
///
/// Column widths can be set at any point before the sheet is handed to
/// [`WorkbookWriter::write_worksheet`](super::WorkbookWriter::write_worksheet);
/// they are emitted ahead of the cell data, as the format requires.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    column_widths: BTreeMap<u32, f64>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the header row (row 1).
    pub fn write_header<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(cells.into_iter().map(Into::into).collect());
    }

    /// Append a data row below the header.
    pub fn write_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Set the width of a zero-based column, in character units.
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    /// Serialize to `xl/worksheets/sheetN.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.rows.len() * 256);
        xml.push_str(XML_DECLARATION);
        let _ = write!(xml, r#"<worksheet xmlns="{MAIN_NS}">"#);

        if !self.column_widths.is_empty() {
            xml.push_str("<cols>");
            for (&col, &width) in &self.column_widths {
                // 1-based min/max
                let _ = write!(
                    xml,
                    r#"<col min="{}" max="{}" width="{}" customWidth="1"/>"#,
                    col + 1,
                    col + 1,
                    width
                );
            }
            xml.push_str("</cols>");
        }

        xml.push_str("<sheetData>");
        let mut row_num = 1u32;
        if let Some(header) = &self.header {
            write_row_xml(&mut xml, row_num, header, Some(HEADER_STYLE));
            row_num += 1;
        }
        for row in &self.rows {
            write_row_xml(&mut xml, row_num, row, None);
            row_num += 1;
        }
        xml.push_str("</sheetData></worksheet>");
        xml
    }
}

fn write_row_xml(xml: &mut String, row_num: u32, cells: &[String], style: Option<u32>) {
    let _ = write!(xml, r#"<row r="{row_num}">"#);
    for (col, value) in cells.iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        let _ = write!(xml, r#"<c r="{}{}" t="inlineStr""#, column_letter(col as u32), row_num);
        if let Some(s) = style {
            let _ = write!(xml, r#" s="{s}""#);
        }
        let space = if value.trim() != value {
            r#" xml:space="preserve""#
        } else {
            ""
        };
        let _ = write!(xml, "><is><t{}>{}</t></is></c>", space, escape_xml(value));
    }
    xml.push_str("</row>");
}
