//! Option-key normalization.
//!
//! Keys are compared trimmed and case-insensitively. A selection may also
//! arrive as a display label such as `"A) Paracetamol"`, in which case the
//! key is everything before the first `)`.

/// Normalize a stored or typed option key for comparison.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Recover the normalized option key from a bare key or a `key) text` label.
pub fn key_from_selection(selection: &str) -> String {
    let key = match selection.split_once(')') {
        Some((key, _label)) => key,
        None => selection,
    };
    normalize_key(key)
}

/// Returns `true` when both keys name the same option.
pub fn keys_match(selected: &str, correct: &str) -> bool {
    key_from_selection(selected) == normalize_key(correct)
}

/// Canonical form of a key for display (`" b "` becomes `"B"`).
pub fn display_key(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Format an option as it is presented to the user.
pub fn option_label(key: &str, text: &str) -> String {
    format!("{}) {}", key.trim(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_label_matches_padded_key() {
        assert!(keys_match("A) Paracetamol", " a "));
        assert!(keys_match("b", "B"));
        assert!(keys_match("  c  ", "c"));
        assert!(!keys_match("a", "b"));
    }

    #[test]
    fn split_on_first_paren_only() {
        assert_eq!(key_from_selection("d) Vitamin (K) deficiency"), "d");
        assert_eq!(key_from_selection("E"), "e");
        assert_eq!(key_from_selection(")"), "");
    }

    #[test]
    fn display_forms() {
        assert_eq!(display_key(" b "), "B");
        assert_eq!(option_label("a", "Aspirin"), "a) Aspirin");
        assert!(keys_match(&option_label("a", "Aspirin"), "A"));
    }
}
