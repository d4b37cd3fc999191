//! ESPN baseball lookup tables: lineup slot ids and pro team ids.

use std::borrow::Cow;

/// Display tag for an ESPN baseball lineup slot id.
///
/// Returns `None` for ids ESPN has not been observed to send.
pub fn slot_tag(slot_id: u16) -> Option<&'static str> {
    let tag = match slot_id {
        0 => "C",
        1 => "1B",
        2 => "2B",
        3 => "3B",
        4 => "SS",
        5 => "OF",
        6 => "2B/SS",
        7 => "1B/3B",
        8 => "LF",
        9 => "CF",
        10 => "RF",
        11 => "DH",
        12 => "UTIL",
        13 => "P",
        14 => "SP",
        15 => "RP",
        16 => "BE",
        17 => "IL",
        19 => "IF",
        _ => return None,
    };
    Some(tag)
}

/// Tag for a slot id, falling back to the raw number for unknown slots.
pub fn slot_tag_or_id(slot_id: u16) -> Cow<'static, str> {
    match slot_tag(slot_id) {
        Some(tag) => Cow::Borrowed(tag),
        None => {
            tracing::warn!(slot_id, "unknown ESPN lineup slot id");
            Cow::Owned(slot_id.to_string())
        }
    }
}

/// Abbreviation for an ESPN MLB pro team id.
pub fn pro_team_abbrev(pro_team_id: i32) -> &'static str {
    match pro_team_id {
        0 => "FA",
        1 => "Bal",
        2 => "Bos",
        3 => "LAA",
        4 => "ChW",
        5 => "Cle",
        6 => "Det",
        7 => "KC",
        8 => "Mil",
        9 => "Min",
        10 => "NYY",
        11 => "Oak",
        12 => "Sea",
        13 => "Tex",
        14 => "Tor",
        15 => "Atl",
        16 => "ChC",
        17 => "Cin",
        18 => "Hou",
        19 => "LAD",
        20 => "Wsh",
        21 => "NYM",
        22 => "Phi",
        23 => "Pit",
        24 => "StL",
        25 => "SD",
        26 => "SF",
        27 => "Col",
        28 => "Mia",
        29 => "Ari",
        30 => "TB",
        _ => "None",
    }
}
