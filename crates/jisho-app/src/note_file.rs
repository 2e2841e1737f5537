use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jisho_core::NoteStorage;
use serde_json::{Map, Value};

/// Note stored as a JSON object of field name to text, in field order
pub struct JsonNoteFile {
    path: PathBuf,
    fields: Map<String, Value>,
    dirty: bool,
}

impl JsonNoteFile {
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read note {}", path.display()))?;
        let fields: Map<String, Value> = serde_json::from_str(&data)
            .with_context(|| format!("Note {} is not a JSON object", path.display()))?;

        if let Some((name, _)) = fields.iter().find(|(_, value)| !value.is_string()) {
            anyhow::bail!("Note field '{}' is not text", name);
        }
        if fields.is_empty() {
            tracing::warn!("Note {} has no fields", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            fields,
            dirty: false,
        })
    }
}

impl NoteStorage for JsonNoteFile {
    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn value(&self, field_name: &str) -> Option<String> {
        self.fields
            .get(field_name)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn set_value(&mut self, field_name: &str, value: &str) -> bool {
        match self.fields.get_mut(field_name) {
            Some(slot) => {
                *slot = Value::String(value.to_string());
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let data = serde_json::to_string_pretty(&self.fields)?;

        // Rename over the note so readers never see a partial file
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(data.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write note {}", self.path.display()))?;
        self.dirty = false;

        tracing::info!("Saved note {}", self.path.display());
        Ok(())
    }
}
