//! Resource id allocation.
//!
//! Ids are decimal strings. A new id is one past the largest numeric id
//! currently in the collection; ids that are not plain digit strings (e.g.
//! `"abc"` or `"+7"` from seed data) never participate. Arithmetic is done on
//! the digit strings themselves, so there is no upper bound.

use std::cmp::Ordering;

/// Next unused id for a collection holding `ids`.
pub fn next_id<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .filter(|id| is_decimal(id))
        .map(strip_leading_zeros)
        .max_by(|a, b| compare_decimal(a, b))
        .map_or_else(|| "1".to_string(), increment)
}

fn is_decimal(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

fn strip_leading_zeros(id: &str) -> &str {
    match id.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    }
}

/// Numeric order of two canonical digit strings
fn compare_decimal(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn increment(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for c in out.iter_mut().rev() {
        if *c == '9' {
            *c = '0';
        } else {
            *c = char::from(*c as u8 + 1);
            return out.into_iter().collect();
        }
    }
    // all nines: carry into a new leading digit
    std::iter::once('1').chain(out).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_starts_at_one() {
        assert_eq!(next_id(std::iter::empty()), "1");
    }

    #[test]
    fn test_one_past_max_regardless_of_order() {
        assert_eq!(next_id(["3", "10", "7"]), "11");
        assert_eq!(next_id(["99", "100", "9"]), "101");
    }

    #[test]
    fn test_gaps_are_not_reused() {
        // "2" was deleted; max still drives allocation
        assert_eq!(next_id(["1", "3"]), "4");
    }

    #[test]
    fn test_non_numeric_ids_ignored() {
        assert_eq!(next_id(["abc", "f3a9", "2"]), "3");
        assert_eq!(next_id(["abc"]), "1");
    }

    #[test]
    fn test_signed_ids_ignored() {
        assert_eq!(next_id(["+7", "2"]), "3");
        assert_eq!(next_id(["-7"]), "1");
    }

    #[test]
    fn test_leading_zeros_compare_numerically() {
        assert_eq!(next_id(["007", "12"]), "13");
        assert_eq!(next_id(["0009"]), "10");
        assert_eq!(next_id(["000"]), "1");
    }

    #[test]
    fn test_no_overflow_past_u64_max() {
        assert_eq!(
            next_id(["18446744073709551615"]),
            "18446744073709551616"
        );
        assert_eq!(next_id(["5", "99999999999999999999999"]), "100000000000000000000000");
    }
}
