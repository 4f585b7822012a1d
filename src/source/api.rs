use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;

use crate::core::{
    models::WordPair,
    OrbError,
};

pub const DEFAULT_BASE_URL: &str = "https://eb-api.una-team.pro";

const PREDICTIONS_PATH: &str = "/words/predictions";
const MAX_ATTEMPTS: usize = 2;

/// Fetches the remote word list. Holds no storage: results are handed to
/// the store by the caller.
pub struct WordSourceClient {
    client: Client,
    base_url: String,
}

impl WordSourceClient {
    pub fn new() -> Result<Self, OrbError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, OrbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| OrbError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// GET the prediction word list. A transport failure is retried once,
    /// then reported; an HTTP error status fails immediately.
    pub async fn fetch_word_pairs(&self) -> Result<Vec<WordPair>, OrbError> {
        let url = format!("{}{}", self.base_url, PREDICTIONS_PATH);

        let mut attempts: usize = 0;
        let response = loop {
            attempts += 1;

            match self.client.get(&url).send().await {
                Ok(resp) => break resp,
                Err(e) => {
                    if attempts < MAX_ATTEMPTS {
                        sleep(Duration::from_secs(attempts as u64)).await;
                        continue;
                    }
                    return Err(OrbError::Network(Box::new(e)));
                }
            }
        };

        let body = response.error_for_status()?.text().await?;

        parse_word_pairs(&body)
    }
}

/// The endpoint returns a JSON array of objects with string `word` and
/// `translation` fields; anything else is a malformed response.
pub fn parse_word_pairs(body: &str) -> Result<Vec<WordPair>, OrbError> {
    serde_json::from_str::<Vec<WordPair>>(body)
        .map_err(|e| OrbError::MalformedResponse(e.to_string()))
}
