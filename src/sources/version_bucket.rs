use crate::config::Config;
use crate::error::AggregatorError;
use crate::fetcher::{Fetched, Fetcher};
use crate::sources::Extract;
use crate::Result;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

/// Where the merged alias map is published for downstream consumers.
pub const ALIAS_URL: &str =
    "https://raw.githubusercontent.com/Becods/maimaiDX-CN-songs-alias-database/datas/alias.json";

/// The version descriptor is an opaque key-value document; the aggregator
/// only ever touches `alias_version` and `alias_url`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VersionInfo(pub serde_json::Map<String, Value>);

impl VersionInfo {
    /// Record today's date (YYYYMMDD) and the publication URL, leaving
    /// every other key alone.
    pub fn stamp(&mut self, today: Date) {
        self.0.insert(
            "alias_version".to_owned(),
            Value::String(format_compact(today)),
        );
        self.0
            .insert("alias_url".to_owned(), Value::String(ALIAS_URL.to_owned()));
    }
}

fn format_compact(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

#[derive(Debug, Clone)]
pub struct VersionBucket<'a> {
    config: &'a Config,
}

impl VersionBucket<'_> {
    pub fn new(config: &Config) -> VersionBucket {
        VersionBucket { config }
    }
}

#[async_trait]
impl Extract<'_> for VersionBucket<'_> {
    type Data = VersionInfo;

    async fn extract(&self, fetcher: &Fetcher) -> Result<Fetched<Self::Data>> {
        let json = match fetcher.fetch_json(&self.config.version_bucket.url).await {
            Fetched::Available(json) => json,
            Fetched::Unavailable => return Ok(Fetched::Unavailable),
        };

        let version: VersionInfo = serde_json::from_value(json).map_err(|err| {
            AggregatorError::boxed(&format!("could not parse version descriptor: {}", err))
        })?;

        Ok(Fetched::Available(version))
    }
}
