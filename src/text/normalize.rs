/// Canonical comparison form of a label: lowercase ASCII letters, digits and
/// single spaces only.
///
/// Anything outside `[a-z0-9 ]` after lowercasing is dropped (not replaced),
/// so `"Title of the Paper:"` and `"title-of the paper"` differ only where
/// punctuation stood between words. Tabs and newlines count as whitespace.
pub fn normalize_label(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    let kept: String = lowered
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    // Collapse whitespace
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the label normalizes to nothing usable for matching.
pub fn is_blank_label(raw: &str) -> bool {
    normalize_label(raw).is_empty()
}
