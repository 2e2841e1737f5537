use std::collections::HashMap;

/// Editable note whose fields receive looked-up values
pub trait NoteStorage {
    /// Field names in note order
    fn field_names(&self) -> Vec<String>;

    fn value(&self, field_name: &str) -> Option<String>;

    /// Returns false if the note has no such field
    fn set_value(&mut self, field_name: &str, value: &str) -> bool;

    /// Persist pending changes
    fn commit(&mut self) -> anyhow::Result<()>;
}

/// In-memory note, mostly useful for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryNote {
    order: Vec<String>,
    values: HashMap<String, String>,
    pub commits: usize,
}

impl MemoryNote {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = fields.into_iter().map(Into::into).collect();
        let values = order.iter().map(|f| (f.clone(), String::new())).collect();

        Self {
            order,
            values,
            commits: 0,
        }
    }
}

impl NoteStorage for MemoryNote {
    fn field_names(&self) -> Vec<String> {
        self.order.clone()
    }

    fn value(&self, field_name: &str) -> Option<String> {
        self.values.get(field_name).cloned()
    }

    fn set_value(&mut self, field_name: &str, value: &str) -> bool {
        match self.values.get_mut(field_name) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    fn commit(&mut self) -> anyhow::Result<()> {
        self.commits += 1;
        Ok(())
    }
}
