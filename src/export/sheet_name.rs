//! Sheet naming: sanitizing team names and keeping names distinct.

use std::collections::HashSet;

use crate::xlsx::{is_xml_char, INVALID_SHEET_NAME_CHARS, MAX_SHEET_NAME_LEN};

/// Strip characters Excel rejects and cut to the first 31 characters.
///
/// Apostrophes are dropped too: Excel refuses them at either end of a
/// name, and removing them everywhere keeps `Bob's` and `Bobs` equal.
/// Control characters and anything else XML 1.0 cannot carry are dropped
/// as well.
///
/// Two different team names can sanitize to the same string; see
/// [`SheetNameRegistry`] for keeping emitted names distinct.
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'' && is_xml_char(*c) && !INVALID_SHEET_NAME_CHARS.contains(c))
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Names already handed out in one workbook.
///
/// Comparison is case-insensitive because Excel treats `Aces` and `ACES`
/// as the same sheet.
#[derive(Debug, Default)]
pub struct SheetNameRegistry {
    used: HashSet<String>,
}

impl SheetNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, or the first free `name (n)` variant (n >= 2) cut to
    /// fit in 31 characters.
    pub fn claim(&mut self, name: &str) -> String {
        if self.used.insert(name.to_lowercase()) {
            return name.to_string();
        }

        let mut n = 2u32;
        loop {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let base: String = name.chars().take(keep).collect();
            let candidate = format!("{}{}", base.trim_end(), suffix);
            if self.used.insert(candidate.to_lowercase()) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(&name.to_lowercase())
    }
}
