//! Multi-key record comparison
//!
//! Each pass compares exactly one character per record: the character at the
//! pass's position within the pass's field. Characters beyond that position
//! never influence the pass. This matches the historical behavior of the
//! tool and is kept for compatibility, even though whole-field comparison
//! would usually be what a user expects.

use crate::config::{Direction, SortPass};
use std::cmp::Ordering;

/// One textual record: a line decomposed into separator-delimited fields
pub type Record = Vec<String>;

/// Resolve a pass's field for one record. An out-of-range index falls back
/// to field 0 for that record only.
fn key_field(record: &[String], index: usize) -> &str {
    record
        .get(index)
        .or_else(|| record.first())
        .map(String::as_str)
        .unwrap_or("")
}

/// Resolve a pass's character within a field. An out-of-range position falls
/// back to position 0 for that record only; an empty field has no key
/// character at all.
fn key_char(field: &str, position: usize) -> Option<char> {
    field
        .chars()
        .nth(position)
        .or_else(|| field.chars().next())
}

/// Compare two records by applying the passes in order as successive
/// tie-break levels. A record without a key character orders before one
/// with a key character on that pass (ascending).
///
/// Returns a full three-way ordering so the caller's sort sees a total
/// order; a stable sort then leaves fully tied records in input order.
pub fn compare_records(a: &[String], b: &[String], passes: &[SortPass]) -> Ordering {
    for pass in passes {
        let ca = key_char(key_field(a, pass.field), pass.position);
        let cb = key_char(key_field(b, pass.field), pass.position);
        match ca.cmp(&cb) {
            Ordering::Equal => continue,
            ord => {
                return match pass.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            }
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> Record {
        fields.iter().map(|s| s.to_string()).collect()
    }

    fn pass(field: usize, position: usize, direction: Direction) -> SortPass {
        SortPass {
            field,
            position,
            direction,
        }
    }

    #[test]
    fn test_default_pass_orders_by_first_char() {
        let a = record(&["a", "1"]);
        let b = record(&["b", "2"]);
        let passes = [SortPass::default()];
        assert_eq!(compare_records(&a, &b, &passes), Ordering::Less);
        assert_eq!(compare_records(&b, &a, &passes), Ordering::Greater);
        assert_eq!(compare_records(&a, &a, &passes), Ordering::Equal);
    }

    #[test]
    fn test_descending_pass_reverses() {
        let a = record(&["a"]);
        let b = record(&["b"]);
        let passes = [pass(0, 0, Direction::Descending)];
        assert_eq!(compare_records(&a, &b, &passes), Ordering::Greater);
        assert_eq!(compare_records(&b, &a, &passes), Ordering::Less);
    }

    #[test]
    fn test_pass_order_is_tie_break_precedence() {
        // Both records share field 0 char 0; the second, descending pass on
        // field 1 decides.
        let x = record(&["ab", "x"]);
        let y = record(&["ab", "y"]);
        let passes = [
            pass(0, 0, Direction::Ascending),
            pass(1, 0, Direction::Descending),
        ];
        assert_eq!(compare_records(&y, &x, &passes), Ordering::Less);
        assert_eq!(compare_records(&x, &y, &passes), Ordering::Greater);
    }

    #[test]
    fn test_characters_beyond_position_are_invisible() {
        // Fields differ only after position 0, so the pass cannot tell them
        // apart.
        let a = record(&["az"]);
        let b = record(&["ab"]);
        let passes = [pass(0, 0, Direction::Ascending)];
        assert_eq!(compare_records(&a, &b, &passes), Ordering::Equal);
    }

    #[test]
    fn test_out_of_range_field_falls_back_per_record() {
        // Field 2 exists only for `long`; `short` falls back to its field 0.
        let long = record(&["m", "n", "c"]);
        let short = record(&["a"]);
        let passes = [pass(2, 0, Direction::Ascending)];
        // 'a' (short's fallback field 0) vs 'c' (long's field 2)
        assert_eq!(compare_records(&short, &long, &passes), Ordering::Less);
        assert_eq!(compare_records(&long, &short, &passes), Ordering::Greater);
    }

    #[test]
    fn test_out_of_range_position_falls_back_per_record() {
        // Position 3 is valid only inside `wide`'s field; `slim` uses
        // position 0.
        let wide = record(&["abcd"]);
        let slim = record(&["z"]);
        let passes = [pass(0, 3, Direction::Ascending)];
        // 'z' (slim position 0) vs 'd' (wide position 3)
        assert_eq!(compare_records(&slim, &wide, &passes), Ordering::Greater);
    }

    #[test]
    fn test_empty_field_orders_first() {
        let empty = record(&[""]);
        let plain = record(&["a"]);
        let passes = [SortPass::default()];
        assert_eq!(compare_records(&empty, &plain, &passes), Ordering::Less);
        assert_eq!(compare_records(&empty, &empty, &passes), Ordering::Equal);
    }
}
