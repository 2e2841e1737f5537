/// Synonyms tried, in order, when a logical field has no exact match.
///
/// Synonyms are compared against normalized field names, so entries that
/// contain `_` never match on their own.
pub const FIELD_VARIATIONS: &[(&str, &[&str])] = &[
    ("japanese", &["japanese", "word", "kanji", "japanese_word"]),
    (
        "reading",
        &["reading", "kana", "hiragana", "pronunciation", "furigana"],
    ),
    (
        "meaning",
        &["meaning", "definition", "english", "translation", "definitions"],
    ),
    ("jlpt", &["jlpt", "jlpt_level", "level", "jlptlevel"]),
    (
        "partofspeech",
        &["partofspeech", "pos", "grammar", "type", "part_of_speech"],
    ),
    ("common", &["common", "frequency", "popular", "commonness"]),
];

/// Lowercase with `_` and spaces removed
pub fn normalize_field_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| *c != '_' && *c != ' ')
        .collect()
}

/// Synonym list for a logical field name, if it has one
pub fn variations(logical_name: &str) -> Option<&'static [&'static str]> {
    let key = normalize_field_name(logical_name);
    FIELD_VARIATIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, synonyms)| *synonyms)
}

/// Pick the note field that should receive `logical_name`.
///
/// Case-insensitive exact match first, then the first synonym (in table
/// order) contained in a normalized field name (in field order).
pub fn find_matching_field<'a, S>(
    logical_name: &str,
    available_fields: &'a [S],
) -> Option<&'a str>
where
    S: AsRef<str>,
{
    let wanted = logical_name.to_lowercase();
    if let Some(exact) = available_fields
        .iter()
        .map(|field| field.as_ref())
        .find(|field| field.to_lowercase() == wanted)
    {
        return Some(exact);
    }

    let synonyms = variations(logical_name)?;
    let normalized: Vec<String> = available_fields
        .iter()
        .map(|field| normalize_field_name(field.as_ref()))
        .collect();

    synonyms.iter().find_map(|synonym| {
        normalized
            .iter()
            .position(|field| field.contains(synonym))
            .map(|idx| {
                tracing::debug!(
                    "Field '{}' matched '{}' via synonym '{}'",
                    logical_name,
                    available_fields[idx].as_ref(),
                    synonym
                );
                available_fields[idx].as_ref()
            })
    })
}
