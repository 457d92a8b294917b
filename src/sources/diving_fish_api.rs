use crate::config::Config;
use crate::error::AggregatorError;
use crate::fetcher::{Fetched, Fetcher};
use crate::sources::Extract;
use crate::Result;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One record of the master song list. Only `id` and `alias` matter to the
/// aggregator; every other field rides along untouched through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Song {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct DivingFishAPI<'a> {
    config: &'a Config,
}

impl DivingFishAPI<'_> {
    pub fn new(config: &Config) -> DivingFishAPI {
        DivingFishAPI { config }
    }
}

#[async_trait]
impl Extract<'_> for DivingFishAPI<'_> {
    type Data = Vec<Song>;

    async fn extract(&self, fetcher: &Fetcher) -> Result<Fetched<Self::Data>> {
        let json = match fetcher.fetch_json(&self.config.diving_fish_api.url).await {
            Fetched::Available(json) => json,
            Fetched::Unavailable => return Ok(Fetched::Unavailable),
        };

        let songs: Vec<Song> = serde_json::from_value(json).map_err(|err| {
            AggregatorError::boxed(&format!("could not parse music data: {}", err))
        })?;

        Ok(Fetched::Available(songs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_ride_along() {
        let json = json!([
            { "id": "8", "title": "t", "ds": [1.0, 2.0] }
        ]);
        let songs: Vec<Song> = serde_json::from_value(json).unwrap();

        assert_eq!(songs[0].id, "8");
        assert_eq!(songs[0].alias, None);
        assert_eq!(songs[0].extra.get("title").unwrap(), "t");

        let out = serde_json::to_value(&songs).unwrap();
        assert_eq!(out[0].get("alias"), None);
        assert_eq!(out[0].get("ds").unwrap(), &json!([1.0, 2.0]));
    }

    #[test]
    fn test_prior_alias_field_survives() {
        let json = json!([{ "id": "8", "alias": ["old"] }]);
        let songs: Vec<Song> = serde_json::from_value(json).unwrap();

        assert_eq!(songs[0].alias, Some(vec!["old".to_owned()]));
    }
}
