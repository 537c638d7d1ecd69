//! Name ordering for folders and files.

use std::cmp::Ordering;

/// Compare two display names the way a UI locale collator would.
///
/// Names compare case-insensitively first; names that differ only in case
/// put the lowercase form first, so the order is total and deterministic.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}
