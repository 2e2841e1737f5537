use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Full response of the word search endpoint.
///
/// Results stay raw until picked so a malformed later entry cannot spoil the
/// first one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Vec<Value>,
}

impl SearchResponse {
    /// The most relevant result, if the search matched anything
    pub fn into_first(self) -> Option<SearchResult> {
        let first = self.data.into_iter().next()?;
        match SearchResult::deserialize(first) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!("Ignoring malformed search result: {e}");
                None
            }
        }
    }
}

/// One dictionary entry as returned by the search service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub japanese: Vec<JapaneseForm>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub senses: Vec<Sense>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub jlpt: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_common: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JapaneseForm {
    #[serde(default, deserialize_with = "lenient")]
    pub word: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub reading: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sense {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub parts_of_speech: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub english_definitions: Vec<String>,
}

/// `null` or a wrong type becomes the default value.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Bad items keep their slot as a default record, so `[0]` stays `[0]`.
fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let items: Vec<Value> = lenient(deserializer)?;
    Ok(items
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}

/// Non-string items are dropped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<Value> = lenient(deserializer)?;
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}

/// Keys of a [`ParsedRecord`], as named in field mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKey {
    Kanji,
    Reading,
    Meanings,
    Pos,
    Jlpt,
    Common,
}

impl RecordKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::Kanji => "kanji",
            RecordKey::Reading => "reading",
            RecordKey::Meanings => "meanings",
            RecordKey::Pos => "pos",
            RecordKey::Jlpt => "jlpt",
            RecordKey::Common => "common",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Note field name paired with the record value it receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub field: String,
    pub key: RecordKey,
}

impl FieldMapping {
    pub fn new(field: impl Into<String>, key: RecordKey) -> Self {
        Self {
            field: field.into(),
            key,
        }
    }
}

/// Flat record extracted from one search result.
///
/// Every field is always present; absent data is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub kanji: String,
    pub reading: String,
    pub meanings: String,
    pub pos: String,
    pub jlpt: String,
    pub common: String,
}

impl ParsedRecord {
    pub fn get(&self, key: RecordKey) -> &str {
        match key {
            RecordKey::Kanji => &self.kanji,
            RecordKey::Reading => &self.reading,
            RecordKey::Meanings => &self.meanings,
            RecordKey::Pos => &self.pos,
            RecordKey::Jlpt => &self.jlpt,
            RecordKey::Common => &self.common,
        }
    }
}

impl fmt::Display for ParsedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_na(value: &str) -> &str {
            if value.is_empty() { "N/A" } else { value }
        }

        writeln!(f, "Kanji: {}", or_na(&self.kanji))?;
        writeln!(f, "Reading: {}", or_na(&self.reading))?;
        writeln!(f, "Meanings: {}", or_na(&self.meanings))?;
        writeln!(f, "Parts of Speech: {}", or_na(&self.pos))?;
        match crate::jlpt::JlptLevel::from_tag(&self.jlpt) {
            Some(level) => {
                writeln!(f, "JLPT Level: {} ({})", self.jlpt, level.label())?
            }
            None => writeln!(f, "JLPT Level: {}", or_na(&self.jlpt))?,
        }
        write!(f, "Common: {}", or_na(&self.common))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tolerates_nulls_and_missing_fields() {
        let json = r#"{
            "slug": null,
            "japanese": [{"reading": "ねこ"}],
            "senses": [{"parts_of_speech": null, "english_definitions": ["cat"]}],
            "jlpt": null
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert!(result.slug.is_none());
        assert_eq!(result.japanese[0].word, None);
        assert_eq!(result.japanese[0].reading.as_deref(), Some("ねこ"));
        assert!(result.senses[0].parts_of_speech.is_empty());
        assert!(result.jlpt.is_empty());
        assert!(!result.is_common);
    }

    #[test]
    fn test_response_first_result() {
        let json = r#"{"meta": {"status": 200}, "data": [{"slug": "猫"}, {"slug": "ネコ"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();

        let first = response.into_first().unwrap();
        assert_eq!(first.slug.as_deref(), Some("猫"));
    }

    #[test]
    fn test_malformed_later_result_does_not_spoil_first() {
        let json = r#"{"data": [
            {"slug": "猫", "japanese": [{"word": "猫", "reading": "ねこ"}]},
            {"japanese": [null], "senses": 7},
            42
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();

        let first = response.into_first().unwrap();
        assert_eq!(first.slug.as_deref(), Some("猫"));
        assert_eq!(first.japanese[0].reading.as_deref(), Some("ねこ"));
    }

    #[test]
    fn test_non_object_first_result() {
        let response: SearchResponse = serde_json::from_str(r#"{"data": ["猫"]}"#).unwrap();
        assert!(response.into_first().is_none());

        let response: SearchResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn test_null_items_inside_lists() {
        let json = r#"{
            "japanese": [null, {"word": "ネコ"}],
            "senses": [
                null,
                {"parts_of_speech": ["Noun", 3], "english_definitions": ["cat", null]}
            ],
            "jlpt": [null, "jlpt-n5"]
        }"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.japanese.len(), 2);
        assert!(result.japanese[0].word.is_none());
        assert_eq!(result.japanese[1].word.as_deref(), Some("ネコ"));
        assert!(result.senses[0].english_definitions.is_empty());
        assert_eq!(result.senses[1].parts_of_speech, vec!["Noun"]);
        assert_eq!(result.senses[1].english_definitions, vec!["cat"]);
        assert_eq!(result.jlpt, vec!["jlpt-n5"]);
    }

    #[test]
    fn test_wrong_typed_scalars_become_defaults() {
        let json = r#"{"slug": 12, "is_common": "yes", "japanese": {"word": "猫"}}"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert!(result.slug.is_none());
        assert!(!result.is_common);
        assert!(result.japanese.is_empty());
    }

    #[test]
    fn test_empty_response_has_no_result() {
        let response: SearchResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn test_record_key_names_match_serde() {
        let keys = [
            RecordKey::Kanji,
            RecordKey::Reading,
            RecordKey::Meanings,
            RecordKey::Pos,
            RecordKey::Jlpt,
            RecordKey::Common,
        ];
        for key in keys {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!(serde_json::from_str::<RecordKey>(r#""meaning""#).is_err());
    }

    #[test]
    fn test_display_uses_placeholder_for_empty_values() {
        let record = ParsedRecord {
            kanji: "猫".to_string(),
            jlpt: "jlpt-n5".to_string(),
            common: "Yes".to_string(),
            ..Default::default()
        };

        let text = record.to_string();
        assert!(text.contains("Kanji: 猫"));
        assert!(text.contains("Reading: N/A"));
        assert!(text.contains("JLPT Level: jlpt-n5 (Beginner)"));
        assert!(text.ends_with("Common: Yes"));
    }
}
