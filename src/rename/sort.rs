//! Ordering the gathered, filtered file set before renaming (spec.md §4.F).

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").unwrap());

/// Compares two sort keys: both numeric-looking (`^-?\d+$`) keys compare as
/// `i64`, otherwise the comparison falls back to plain string order.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (NUMERIC_KEY.is_match(a), NUMERIC_KEY.is_match(b)) {
        (true, true) => {
            let a: i64 = a.parse().expect("validated by NUMERIC_KEY");
            let b: i64 = b.parse().expect("validated by NUMERIC_KEY");
            a.cmp(&b)
        },
        _ => a.cmp(b),
    }
}

/// Sorts `items` by the string `key_fn` produces for each, stably, then
/// reverses the whole ordering if `invert` is set.
pub fn sort_by_key<T>(items: &mut [T], mut key_fn: impl FnMut(&T) -> String, invert: bool) {
    items.sort_by(|a, b| compare_keys(&key_fn(a), &key_fn(b)));
    if invert {
        items.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_keys_compare_as_integers() {
        let mut items = vec!["10", "2", "1"];
        sort_by_key(&mut items, |s| s.to_string(), false);
        assert_eq!(items, vec!["1", "2", "10"]);
    }

    #[test]
    fn non_numeric_keys_compare_as_strings() {
        let mut items = vec!["banana", "apple", "cherry"];
        sort_by_key(&mut items, |s| s.to_string(), false);
        assert_eq!(items, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn invert_reverses_final_order() {
        let mut items = vec!["1", "2", "3"];
        sort_by_key(&mut items, |s| s.to_string(), true);
        assert_eq!(items, vec!["3", "2", "1"]);
    }

    #[test]
    fn negative_numbers_compare_numerically() {
        assert_eq!(compare_keys("-5", "3"), Ordering::Less);
        assert_eq!(compare_keys("-5", "-10"), Ordering::Greater);
    }
}
