use jisho_core::{ParsedRecord, SearchResult, parse_result};

use crate::error::LookupError;

/// Dictionary lookup capability
#[async_trait::async_trait]
pub trait WordLookup: Send + Sync {
    /// Most relevant result for `word`, `None` if nothing matched
    async fn search(&self, word: &str) -> Result<Option<SearchResult>, LookupError>;

    /// Like [`WordLookup::search`], with failures logged and reported as no data
    async fn fetch_first_result(&self, word: &str) -> Option<SearchResult> {
        match self.search(word).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Lookup for '{}' failed: {}", word, e);
                None
            }
        }
    }

    /// Fetch and parse in one step
    async fn lookup_record(&self, word: &str) -> Option<ParsedRecord> {
        self.fetch_first_result(word)
            .await
            .map(|result| parse_result(&result))
    }
}
