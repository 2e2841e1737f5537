use jisho_config::network::NetworkConfig;
use jisho_core::SearchResponse;
use jisho_core::SearchResult;
use jisho_core::preprocess::clean_query;

use crate::error::LookupError;
use crate::lookup::WordLookup;

/// Client for the Jisho word search endpoint
#[derive(Clone)]
pub struct JishoClient {
    api_url: String,
    client: reqwest::Client,
}

impl JishoClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            client,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn build_request(&self, word: &str) -> Result<reqwest::Request, LookupError> {
        Ok(self
            .client
            .get(&self.api_url)
            .query(&[("keyword", word)])
            .build()?)
    }
}

#[async_trait::async_trait]
impl WordLookup for JishoClient {
    async fn search(&self, word: &str) -> Result<Option<SearchResult>, LookupError> {
        let Some(word) = clean_query(word) else {
            return Ok(None);
        };

        let request = self.build_request(&word)?;
        tracing::info!("Searching Jisho for '{}'", word);

        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let body = response.text().await?;
        let response: SearchResponse = serde_json::from_str(&body)?;
        let result = response.into_first();

        if result.is_none() {
            tracing::info!("No results for '{}'", word);
        }
        Ok(result)
    }
}
