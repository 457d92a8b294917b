use crate::config::FetcherConfig;
use crate::Result;

use tracing::{error, info};

type Json = serde_json::Value;

/// Outcome of a bounded-retry fetch. `Unavailable` means the retry budget
/// was exhausted, as opposed to a valid but empty payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Available(T),
    Unavailable,
}

impl<T> Fetched<T> {
    pub fn available(self) -> Option<T> {
        match self {
            Fetched::Available(value) => Some(value),
            Fetched::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Fetched::Unavailable)
    }
}

#[derive(Debug)]
pub struct Fetcher {
    config: FetcherConfig,
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Fetcher> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Fetcher { config, client })
    }

    /// GET `url` up to `max_attempts` times, returning the parsed JSON body
    /// of the first 2xx response. Exhaustion is not an error; callers treat
    /// `Unavailable` as "data unavailable" and skip dependent stages.
    pub async fn fetch_json(&self, url: &str) -> Fetched<Json> {
        for attempt in 1..=self.config.max_attempts {
            info!(attempt, url, "requesting");
            match self.get_json(url).await {
                Ok(json) => return Fetched::Available(json),
                Err(err) => {
                    error!(attempt, url, %err, "request failed");
                }
            }
        }

        error!(url, "retries exhausted");
        Fetched::Unavailable
    }

    async fn get_json(&self, url: &str) -> std::result::Result<Json, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Json>()
            .await
    }
}
