//! Column auto-fit.

use super::{record::RECORD_HEADERS, sheet::Sheet};
use crate::xlsx::Worksheet;

/// Padding added to the widest value, in character units.
pub const COLUMN_PADDING: usize = 2;

/// Width for one column: the longer of the header and the widest cell,
/// plus padding. Lengths are in characters.
pub fn fit_column_width<'a, I>(header: &str, cells: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let longest_cell = cells
        .into_iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);
    (longest_cell.max(header.chars().count()) + COLUMN_PADDING) as f64
}

/// Widths for every column of `sheet`, in header order.
pub fn column_widths(sheet: &Sheet) -> Vec<f64> {
    RECORD_HEADERS
        .iter()
        .enumerate()
        .map(|(col, header)| fit_column_width(header, sheet.records.iter().map(|r| r.cells()[col])))
        .collect()
}

/// Apply [`column_widths`] to the worksheet holding `sheet`'s data.
///
/// Call once all rows are written.
pub fn auto_adjust_column_width(worksheet: &mut Worksheet, sheet: &Sheet) {
    for (col, width) in column_widths(sheet).into_iter().enumerate() {
        worksheet.set_column_width(col as u32, width);
    }
}
