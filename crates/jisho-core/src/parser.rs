use crate::types::{ParsedRecord, SearchResult, Sense};

/// Sense tag the service uses for encyclopedia glosses
pub const WIKIPEDIA_SENSE: &str = "Wikipedia definition";

const MAX_MEANINGS: usize = 5;
const MAX_PARTS_OF_SPEECH: usize = 3;

/// Extract a flat record from one search result
pub fn parse_result(result: &SearchResult) -> ParsedRecord {
    let first_form = result.japanese.first();

    let kanji = result
        .slug
        .as_deref()
        .filter(|slug| !slug.is_empty())
        .or_else(|| first_form.and_then(|form| form.word.as_deref()))
        .unwrap_or_default()
        .to_string();

    let reading = first_form
        .and_then(|form| form.reading.as_deref())
        .unwrap_or_default()
        .to_string();

    ParsedRecord {
        kanji,
        reading,
        meanings: meanings(&result.senses),
        pos: parts_of_speech(&result.senses),
        jlpt: result.jlpt.first().cloned().unwrap_or_default(),
        common: if result.is_common { "Yes" } else { "No" }.to_string(),
    }
}

fn is_wikipedia(sense: &Sense) -> bool {
    sense.parts_of_speech.iter().any(|pos| pos == WIKIPEDIA_SENSE)
}

fn meanings(senses: &[Sense]) -> String {
    let definitions: Vec<&str> = senses
        .iter()
        .filter(|sense| !is_wikipedia(sense))
        .flat_map(|sense| sense.english_definitions.iter().map(String::as_str))
        .take(MAX_MEANINGS)
        .collect();

    definitions.join("; ")
}

fn parts_of_speech(senses: &[Sense]) -> String {
    let mut unique: Vec<&str> = Vec::new();

    for pos in senses
        .iter()
        .filter(|sense| !is_wikipedia(sense))
        .flat_map(|sense| sense.parts_of_speech.iter())
    {
        if !unique.contains(&pos.as_str()) {
            unique.push(pos);
        }
        if unique.len() == MAX_PARTS_OF_SPEECH {
            break;
        }
    }

    unique.join(", ")
}
