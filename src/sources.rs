pub mod diving_fish_api;
pub mod version_bucket;
pub mod xray_alias_db;
pub mod yuzuai_api;

use crate::config::Config;
use crate::fetcher::{Fetched, Fetcher};
use crate::Result;

use async_trait::async_trait;

pub struct Sources<'a> {
    pub xray_alias_db: xray_alias_db::XrayAliasDB<'a>,
    pub yuzuai_api: yuzuai_api::YuzuAIAPI<'a>,
    pub diving_fish_api: diving_fish_api::DivingFishAPI<'a>,
    pub version_bucket: version_bucket::VersionBucket<'a>,
}

impl Sources<'_> {
    pub fn new(config: &Config) -> Sources {
        Sources {
            xray_alias_db: xray_alias_db::XrayAliasDB::new(config),
            yuzuai_api: yuzuai_api::YuzuAIAPI::new(config),
            diving_fish_api: diving_fish_api::DivingFishAPI::new(config),
            version_bucket: version_bucket::VersionBucket::new(config),
        }
    }
}

#[async_trait]
pub trait Extract<'a> {
    type Data;

    /// Fetch and parse this source. `Unavailable` means the retry budget
    /// was exhausted; a payload that fails to parse is a hard error.
    async fn extract(&self, fetcher: &Fetcher) -> Result<Fetched<Self::Data>>;
}
