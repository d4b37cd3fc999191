//! Streaming XLSX package writer.
//!
//! Worksheets are deflated into the ZIP container as soon as they are
//! written; the workbook-level parts are added by [`WorkbookWriter::finish`],
//! which is the only way to get the underlying buffer back.

use std::collections::HashSet;
use std::io::{Cursor, Seek, Write};

use tracing::debug;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use super::worksheet::Worksheet;
use super::xml::{
    content_types_xml, is_xml_char, root_rels_xml, styles_xml, workbook_rels_xml, workbook_xml,
};
use crate::{EspnError, Result};

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel rejects in sheet names.
pub const INVALID_SHEET_NAME_CHARS: [char; 7] = ['\\', '/', '*', '?', ':', '[', ']'];

pub struct WorkbookWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    sheet_names: Vec<String>,
    used_names: HashSet<String>,
}

impl WorkbookWriter<Cursor<Vec<u8>>> {
    /// Writer backed by an in-memory buffer.
    pub fn in_memory() -> Self {
        Self::new(Cursor::new(Vec::new()))
    }

    /// Finalize the package and return its bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        Ok(self.finish()?.into_inner())
    }
}

impl<W: Write + Seek> WorkbookWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            sheet_names: Vec::new(),
            used_names: HashSet::new(),
        }
    }

    /// Names of the sheets written so far, in order.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Serialize `worksheet` into the package as the next sheet.
    ///
    /// The name must be a legal, not-yet-used sheet name (compared
    /// case-insensitively, as Excel does).
    pub fn write_worksheet(&mut self, worksheet: &Worksheet) -> Result<()> {
        let name = worksheet.name();
        validate_sheet_name(name)?;
        if !self.used_names.insert(name.to_lowercase()) {
            return Err(EspnError::InvalidSheetName {
                name: name.to_string(),
                reason: "already used in this workbook".to_string(),
            });
        }

        let index = self.sheet_names.len() + 1;
        let path = format!("xl/worksheets/sheet{index}.xml");
        self.write_part(&path, &worksheet.to_xml())?;
        self.sheet_names.push(name.to_string());
        debug!(sheet = name, rows = worksheet.rows().len(), "worksheet written");
        Ok(())
    }

    /// Write the workbook-level parts and close the ZIP container.
    pub fn finish(mut self) -> Result<W> {
        if self.sheet_names.is_empty() {
            return Err(EspnError::EmptyWorkbook);
        }
        let count = self.sheet_names.len();
        self.write_part("[Content_Types].xml", &content_types_xml(count))?;
        self.write_part("_rels/.rels", &root_rels_xml())?;
        self.write_part("xl/workbook.xml", &workbook_xml(&self.sheet_names))?;
        self.write_part("xl/_rels/workbook.xml.rels", &workbook_rels_xml(count))?;
        self.write_part("xl/styles.xml", &styles_xml())?;
        Ok(self.zip.finish()?)
    }

    fn write_part(&mut self, path: &str, contents: &str) -> Result<()> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(contents.as_bytes())?;
        Ok(())
    }
}

/// Check a sheet name against Excel's rules.
pub fn validate_sheet_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty".to_string())
    } else if name.chars().count() > MAX_SHEET_NAME_LEN {
        Some(format!("longer than {MAX_SHEET_NAME_LEN} characters"))
    } else if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        Some(format!("contains '{c}'"))
    } else if let Some(c) = name.chars().find(|c| !is_xml_char(*c)) {
        Some(format!("contains control character U+{:04X}", c as u32))
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("begins or ends with an apostrophe".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EspnError::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
