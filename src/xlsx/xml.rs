//! XML fragments for the OOXML spreadsheet package.

/// Whether `c` may appear in an XML 1.0 document.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || ('\u{20}'..='\u{D7FF}').contains(&c)
        || ('\u{E000}'..='\u{FFFD}').contains(&c)
        || c >= '\u{10000}'
}

/// Escape XML special characters, dropping characters XML 1.0 forbids.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Column letter for a zero-based column index (0 -> A, 25 -> Z, 26 -> AA).
pub fn column_letter(col: u32) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// `[Content_Types].xml` for a workbook with `sheet_count` worksheets.
pub fn content_types_xml(sheet_count: usize) -> String {
    let mut xml = String::with_capacity(1024 + sheet_count * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#);
    for n in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    xml.push_str(r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#);
    xml.push_str("</Types>");
    xml
}

/// Root `_rels/.rels`.
pub fn root_rels_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

/// `xl/workbook.xml`. Sheet `n` (1-based) is bound to relationship `rId{n}`.
pub fn workbook_xml(sheet_names: &[String]) -> String {
    let mut xml = String::with_capacity(512 + sheet_names.len() * 64);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<workbook xmlns="{MAIN_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#
    ));
    xml.push_str("<sheets>");
    for (idx, name) in sheet_names.iter().enumerate() {
        let n = idx + 1;
        xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{n}" r:id="rId{n}"/>"#,
            escape_xml(name)
        ));
    }
    xml.push_str("</sheets></workbook>");
    xml
}

/// `xl/_rels/workbook.xml.rels`. Styles take the id after the last sheet.
pub fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut xml = String::with_capacity(512 + sheet_count * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    for n in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{n}.xml"/>"#
        ));
    }
    xml.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
        sheet_count + 1
    ));
    xml.push_str("</Relationships>");
    xml
}

/// Style index of the bold header cell format in [`styles_xml`].
pub const HEADER_STYLE: u32 = 1;

/// `xl/styles.xml`: the default format plus a bold one for header rows.
pub fn styles_xml() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<styleSheet xmlns="{MAIN_NS}">"#));
    xml.push_str(r#"<fonts count="2"><font><sz val="11"/><name val="Calibri"/></font><font><b/><sz val="11"/><name val="Calibri"/></font></fonts>"#);
    xml.push_str(r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#);
    xml.push_str(r#"<borders count="1"><border/></borders>"#);
    xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);
    xml.push_str(r#"<cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/></cellXfs>"#);
    xml.push_str("</styleSheet>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry's <"Team">"#),
            "Tom &amp; Jerry&apos;s &lt;&quot;Team&quot;&gt;"
        );
    }

    #[test]
    fn test_escape_xml_drops_forbidden_characters() {
        assert_eq!(escape_xml("Al\u{8}ice\u{1}"), "Alice");
        assert_eq!(escape_xml("a\u{0}b\u{1F}c\u{FFFE}d\u{FFFF}"), "abcd");
        assert_eq!(escape_xml("tab\tline\ncr\r"), "tab\tline\ncr\r");
        assert_eq!(escape_xml("⚾ 𝔸"), "⚾ 𝔸");
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(4), "E");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_workbook_xml_lists_sheets_in_order() {
        let xml = workbook_xml(&["A & B".to_string(), "Free Agents".to_string()]);
        let first = xml.find(r#"name="A &amp; B" sheetId="1" r:id="rId1""#).unwrap();
        let second = xml.find(r#"name="Free Agents" sheetId="2" r:id="rId2""#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_workbook_rels_styles_follow_sheets() {
        let xml = workbook_rels_xml(2);
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains(r#"Target="worksheets/sheet2.xml""#));
        assert!(xml.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles""#));
    }

    #[test]
    fn test_content_types_has_one_override_per_sheet() {
        let xml = content_types_xml(3);
        assert_eq!(xml.matches("/xl/worksheets/sheet").count(), 3);
        assert!(xml.contains("/xl/styles.xml"));
    }
}
