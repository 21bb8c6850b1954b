//! Comma-joined list encoding for single text columns.
//!
//! # Responsibility
//! - Turn an ordered list of strings into one text value and back.
//!
//! # Invariants
//! - No escaping is performed. Lists whose elements contain [`SEPARATOR`]
//!   do not survive a round trip.
//! - [`decode_list`] maps `""` to an empty list; [`split_raw`] maps `""`
//!   to `[""]`. Both behaviors are relied on by different read paths.

/// Separator placed between encoded elements.
pub const SEPARATOR: char = ',';

/// Joins `items` with [`SEPARATOR`].
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut encoded = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            encoded.push(SEPARATOR);
        }
        encoded.push_str(item.as_ref());
    }
    encoded
}

/// Splits an encoded value; an empty value decodes to an empty list.
pub fn decode_list(encoded: &str) -> Vec<String> {
    if encoded.is_empty() {
        return Vec::new();
    }
    split_raw(encoded)
}

/// Splits an encoded value on [`SEPARATOR`] with no special cases.
pub fn split_raw(encoded: &str) -> Vec<String> {
    encoded.split(SEPARATOR).map(str::to_string).collect()
}

/// Splits `(query, image_link)` pairs into two parallel lists.
pub fn split_pairs(pairs: &[(String, String)]) -> (Vec<String>, Vec<String>) {
    pairs.iter().cloned().unzip()
}
