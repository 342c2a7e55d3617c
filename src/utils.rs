//! Small string helpers shared by the rules.

use std::cmp::Ordering;

/// Whether an optional string is missing, empty, or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

/// Locale-style string ordering: case-insensitive primary weight, with
/// lowercase sorting before uppercase as a tiebreak. Approximates how
/// editorial tooling collates English identifiers, so `assignedTo` orders
/// before `AssignedTo` and both before `createdBy`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    match a_lower.cmp(&b_lower) {
        Ordering::Equal => {}
        other => return other,
    }

    // Same letters; break the tie per-character, lowercase first
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        let a_is_lower = ca.is_lowercase();
        let b_is_lower = cb.is_lowercase();
        if a_is_lower != b_is_lower {
            return if a_is_lower {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        return ca.cmp(&cb);
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Naive English pluralization, sufficient for resource-type names.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        format!("{word}es")
    } else if lower.ends_with('y') {
        let stem_end = word.len() - 1;
        let before = word[..stem_end].chars().last();
        match before {
            Some(c) if !"aeiou".contains(c.to_ascii_lowercase()) => {
                format!("{}ies", &word[..stem_end])
            }
            _ => format!("{word}s"),
        }
    } else {
        format!("{word}s")
    }
}

/// Character-based column for a byte offset into a line. Locations report
/// character offsets, not byte offsets.
pub fn char_column(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count()
}

/// Character length of a matched token.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
