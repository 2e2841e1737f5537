use crate::matcher::find_matching_field;
use crate::note::NoteStorage;
use crate::types::{FieldMapping, ParsedRecord, RecordKey};

/// Logical field used to find the headword when no mapping targets `kanji`
pub const DEFAULT_HEADWORD_FIELD: &str = "Japanese";

/// Write `record` into `note` following `mappings` in order.
///
/// Empty values and unmatched fields are skipped. Returns the mapping names
/// that were written; the note is committed once if that list is non-empty.
pub fn fill_note(
    note: &mut dyn NoteStorage,
    record: &ParsedRecord,
    mappings: &[FieldMapping],
) -> anyhow::Result<Vec<String>> {
    let field_names = note.field_names();
    let mut imported = Vec::new();

    for mapping in mappings {
        let value = record.get(mapping.key);
        if value.is_empty() {
            continue;
        }

        let Some(target) = find_matching_field(&mapping.field, &field_names) else {
            tracing::warn!(
                "Field '{}' not found in note. Available fields: {:?}",
                mapping.field,
                field_names
            );
            continue;
        };

        if note.set_value(target, value) {
            tracing::debug!("Filled '{}' from {} into '{}'", mapping.field, mapping.key, target);
            imported.push(mapping.field.clone());
        }
    }

    if !imported.is_empty() {
        note.commit()?;
    }

    Ok(imported)
}

/// Logical field holding the headword: the mapping that receives `kanji`
pub fn headword_field(mappings: &[FieldMapping]) -> &str {
    mappings
        .iter()
        .find(|mapping| mapping.key == RecordKey::Kanji)
        .map(|mapping| mapping.field.as_str())
        .unwrap_or(DEFAULT_HEADWORD_FIELD)
}

/// Word already typed into the note's headword field, if any
pub fn existing_headword(note: &dyn NoteStorage, mappings: &[FieldMapping]) -> Option<String> {
    let field_names = note.field_names();
    let target = find_matching_field(headword_field(mappings), &field_names)?;

    note.value(target)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
