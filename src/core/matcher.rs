/// Search predicate for pruning visible unit options as the user types.
///
/// Case-insensitive substring containment: both strings are lowercase-folded,
/// then `label` must contain `input` contiguously. Empty `input` matches
/// every label. This is the sole filtering rule; there is no tokenization,
/// fuzzy matching, or rank scoring.
#[must_use]
pub fn matches_label(input: &str, label: &str) -> bool {
    if input.is_empty() {
        return true;
    }
    label.to_lowercase().contains(&input.to_lowercase())
}
