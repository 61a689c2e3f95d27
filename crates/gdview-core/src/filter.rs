//! Substring filter over a bucket listing.

/// Return every key containing `term` as a literal, case-sensitive substring,
/// preserving the listing order. An empty term matches every key.
pub fn filter_contains(keys: &[String], term: &str) -> Vec<String> {
    keys.iter()
        .filter(|key| key.contains(term))
        .cloned()
        .collect()
}
