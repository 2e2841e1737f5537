use unicode_normalization::UnicodeNormalization;

/// Clean a search word typed or copied by the user.
///
/// Returns `None` when nothing is left to search for.
pub fn clean_query(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // NFKC folds full-width latin and half-width kana
    let text: String = text.nfkc().collect();
    let text = text.replace(['\n', '\r'], "").trim().to_string();

    if text.is_empty() { None } else { Some(text) }
}
