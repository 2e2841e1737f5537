use std::fmt;

use jisho_core::{FieldMapping, RecordKey};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Note field name → record key, in document order.
///
/// Order matters: when two mappings land on the same note field the later
/// one overwrites the earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMappings(Vec<FieldMapping>);

impl FieldMappings {
    pub fn new(mappings: Vec<FieldMapping>) -> Self {
        Self(mappings)
    }

    pub fn as_slice(&self) -> &[FieldMapping] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FieldMappings {
    fn default() -> Self {
        Self(vec![
            FieldMapping::new("Japanese", RecordKey::Kanji),
            FieldMapping::new("Reading", RecordKey::Reading),
            FieldMapping::new("Meaning", RecordKey::Meanings),
            FieldMapping::new("JLPT", RecordKey::Jlpt),
            FieldMapping::new("PartOfSpeech", RecordKey::Pos),
            FieldMapping::new("Common", RecordKey::Common),
        ])
    }
}

impl Serialize for FieldMappings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for mapping in &self.0 {
            map.serialize_entry(&mapping.field, &mapping.key)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMappings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = FieldMappings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of note field names to record keys")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut mappings: Vec<FieldMapping> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((field, key)) = access.next_entry::<String, RecordKey>()? {
                    // A repeated name replaces the earlier entry in place
                    match mappings.iter_mut().find(|m| m.field == field) {
                        Some(existing) => existing.key = key,
                        None => mappings.push(FieldMapping { field, key }),
                    }
                }
                Ok(FieldMappings(mappings))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_order_is_kept() {
        let json = r#"{"Reading": "reading", "Japanese": "kanji", "Notes": "meanings"}"#;
        let mappings: FieldMappings = serde_json::from_str(json).unwrap();

        let fields: Vec<&str> = mappings.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(fields, vec!["Reading", "Japanese", "Notes"]);
        assert_eq!(mappings.as_slice()[2].key, RecordKey::Meanings);
    }

    #[test]
    fn test_unknown_record_key_is_rejected() {
        let json = r#"{"Japanese": "kanji", "Audio": "sound"}"#;
        assert!(serde_json::from_str::<FieldMappings>(json).is_err());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let json = serde_json::to_string(&FieldMappings::default()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Japanese":"kanji","Reading":"reading","Meaning":"meanings","#,
                r#""JLPT":"jlpt","PartOfSpeech":"pos","Common":"common"}"#,
            )
        );
    }

    #[test]
    fn test_duplicate_field_keeps_first_position() {
        let json = r#"{"Japanese": "kanji", "Reading": "reading", "Japanese": "reading"}"#;
        let mappings: FieldMappings = serde_json::from_str(json).unwrap();

        assert_eq!(mappings.len(), 2);
        assert_eq!(
            mappings.as_slice()[0],
            FieldMapping::new("Japanese", RecordKey::Reading)
        );
    }
}
