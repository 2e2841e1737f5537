use std::path::Path;

use anyhow::Result;
use jisho_client::WordLookup;
use jisho_config::Config;
use jisho_core::{
    ParsedRecord, existing_headword, fill_note, find_matching_field, headword_field,
};

use crate::note_file::JsonNoteFile;

#[derive(Debug)]
pub enum FillOutcome {
    /// No word given and the note's headword `field` is empty
    NoWord { field: String },
    NoResult { word: String },
    Filled {
        word: String,
        record: ParsedRecord,
        imported: Vec<String>,
    },
}

pub async fn run_lookup(lookup: &dyn WordLookup, word: &str) -> Option<ParsedRecord> {
    lookup.lookup_record(word).await
}

pub async fn run_fill(
    lookup: &dyn WordLookup,
    config: &Config,
    note_path: &Path,
    word: Option<String>,
) -> Result<FillOutcome> {
    let mut note = JsonNoteFile::open(note_path)?;
    let mappings = config.field_mappings.as_slice();

    let word = match word.filter(|w| !w.trim().is_empty()) {
        Some(word) => word,
        None => match existing_headword(&note, mappings) {
            Some(word) => {
                tracing::info!("Using headword '{}' from note", word);
                word
            }
            None => {
                return Ok(FillOutcome::NoWord {
                    field: headword_field(mappings).to_string(),
                });
            }
        },
    };

    let Some(record) = lookup.lookup_record(&word).await else {
        return Ok(FillOutcome::NoResult { word });
    };

    let imported = fill_note(&mut note, &record, mappings)?;
    tracing::info!("Imported {} field(s) for '{}'", imported.len(), word);

    Ok(FillOutcome::Filled {
        word,
        record,
        imported,
    })
}

pub fn run_match(logical: &str, fields: &[String]) -> Option<String> {
    find_matching_field(logical, fields).map(str::to_string)
}
