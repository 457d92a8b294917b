use crate::config::Config;
use crate::error::AggregatorError;
use crate::fetcher::{Fetched, Fetcher};
use crate::sources::Extract;
use crate::Result;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One alias record: the display name of a song plus every known alias.
/// The wire format capitalizes both keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AliasEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Alias")]
    pub alias: Vec<String>,
}

/// Alias records keyed by canonical song id. A BTreeMap keeps the
/// published artifact in a stable key order across runs.
pub type AliasMap = BTreeMap<String, AliasEntry>;

#[derive(Debug, Clone)]
pub struct YuzuAIAPI<'a> {
    config: &'a Config,
}

impl YuzuAIAPI<'_> {
    pub fn new(config: &Config) -> YuzuAIAPI {
        YuzuAIAPI { config }
    }
}

#[async_trait]
impl Extract<'_> for YuzuAIAPI<'_> {
    type Data = AliasMap;

    async fn extract(&self, fetcher: &Fetcher) -> Result<Fetched<Self::Data>> {
        let json = match fetcher.fetch_json(&self.config.yuzuai_api.url).await {
            Fetched::Available(json) => json,
            Fetched::Unavailable => return Ok(Fetched::Unavailable),
        };

        let aliases: AliasMap = serde_json::from_value(json).map_err(|err| {
            AggregatorError::boxed(&format!("could not parse yuzuai aliases: {}", err))
        })?;

        Ok(Fetched::Available(aliases))
    }
}
