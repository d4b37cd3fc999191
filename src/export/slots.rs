//! Eligible-slot filtering for display.

/// Lineup slots that say nothing about a player's real position: utility,
/// bench, injured list, generic infield, the individual outfield spots and
/// the pitcher roles.
pub const EXCLUDED_SLOTS: [&str; 9] = ["UTIL", "BE", "IL", "IF", "LF", "CF", "RF", "SP", "RP"];

/// Drop excluded slot tags, keeping the rest in their original order.
pub fn filter_slots<S: AsRef<str>>(slots: &[S]) -> Vec<&str> {
    slots
        .iter()
        .map(AsRef::as_ref)
        .filter(|slot| !EXCLUDED_SLOTS.contains(slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_slots_basic() {
        assert_eq!(filter_slots(&["1B", "UTIL", "BE"]), vec!["1B"]);
    }

    #[test]
    fn test_filter_slots_preserves_order() {
        let slots = ["SS", "BE", "2B", "2B/SS", "IF", "3B", "IL"];
        assert_eq!(filter_slots(&slots), vec!["SS", "2B", "2B/SS", "3B"]);
    }

    #[test]
    fn test_filter_slots_empty() {
        let empty: [&str; 0] = [];
        assert!(filter_slots(&empty).is_empty());
    }

    #[test]
    fn test_filter_slots_all_excluded() {
        assert!(filter_slots(&EXCLUDED_SLOTS).is_empty());
    }

    #[test]
    fn test_filter_slots_is_subset_without_excluded() {
        let inputs: Vec<Vec<String>> = vec![
            vec!["C".into(), "1B".into(), "UTIL".into()],
            vec!["SP".into(), "P".into(), "RP".into(), "BE".into()],
            vec!["OF".into(), "LF".into(), "CF".into(), "RF".into(), "DH".into()],
        ];
        for input in &inputs {
            let output = filter_slots(input);
            assert!(output.iter().all(|s| input.iter().any(|i| i.as_str() == *s)));
            assert!(output.iter().all(|s| !EXCLUDED_SLOTS.contains(s)));
            let positions: Vec<usize> = output
                .iter()
                .map(|s| input.iter().position(|i| i.as_str() == *s).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_filter_slots_works_on_owned_strings() {
        let owned = vec!["P".to_string(), "SP".to_string()];
        assert_eq!(filter_slots(&owned), vec!["P"]);
    }
}
