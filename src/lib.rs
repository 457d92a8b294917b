mod combiner;
mod config;
mod error;
mod fetcher;
mod merge;
mod sources;
mod writer;

pub use config::Config;
pub use error::{AggregatorError, MissingSource, SourceKind};
pub use fetcher::{Fetched, Fetcher};
pub use sources::diving_fish_api::Song;
pub use sources::version_bucket::VersionInfo;
pub use sources::xray_alias_db::XrayAliases;
pub use sources::yuzuai_api::{AliasEntry, AliasMap};

use combiner::Combiner;
use merge::Merge;
use sources::{Extract, Sources};
use writer::Writer;

use serde::Serialize;
use std::error::Error;
use time::{Date, OffsetDateTime};
use tracing::{error, info};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// The four fetch outcomes, in fetch order.
#[derive(Debug)]
pub struct RawData {
    pub xray: Fetched<XrayAliases>,
    pub yuzu: Fetched<AliasMap>,
    pub music: Fetched<Vec<Song>>,
    pub version: Fetched<VersionInfo>,
}

/// The three artifacts published per run.
#[derive(Debug, PartialEq, Serialize)]
pub struct Data {
    pub aliases: AliasMap,
    pub songs: Vec<Song>,
    pub version: VersionInfo,
}

/// Turn the four fetched sources into the output bundle, or report every
/// source that yielded no data. All-or-nothing: a single missing source
/// means no output at all.
pub fn pipeline(raw: RawData, today: Date) -> std::result::Result<Data, MissingSource> {
    match (raw.xray, raw.yuzu, raw.music, raw.version) {
        (
            Fetched::Available(xray),
            Fetched::Available(yuzu),
            Fetched::Available(songs),
            Fetched::Available(mut version),
        ) => {
            let inverted = xray.invert();
            info!("alias conversion complete");

            let aliases = Merge::merge(yuzu, &inverted);
            info!("alias merge complete");

            let songs = Combiner::combine(songs, &aliases);
            info!("data merge complete");

            version.stamp(today);
            info!("version merge complete");

            Ok(Data {
                aliases,
                songs,
                version,
            })
        }
        (xray, yuzu, music, version) => {
            let mut missing = Vec::new();
            if xray.is_unavailable() {
                missing.push(SourceKind::XrayAliasDB);
            }
            if yuzu.is_unavailable() {
                missing.push(SourceKind::YuzuAIAPI);
            }
            if music.is_unavailable() {
                missing.push(SourceKind::DivingFishAPI);
            }
            if version.is_unavailable() {
                missing.push(SourceKind::VersionBucket);
            }

            Err(MissingSource(missing))
        }
    }
}

pub struct Aggregator {
    config: Config,
    fetcher: Fetcher,
}

impl Aggregator {
    pub fn new(config: Config) -> Result<Aggregator> {
        let fetcher = Fetcher::new(config.fetcher.clone())?;

        Ok(Aggregator { config, fetcher })
    }

    /// Fetch all four sources, one after another. Nothing downstream can
    /// start until every source is known, so there is no point racing
    /// them.
    async fn extract(&self) -> Result<RawData> {
        let sources = Sources::new(&self.config);

        let xray = sources.xray_alias_db.extract(&self.fetcher).await?;
        let yuzu = sources.yuzuai_api.extract(&self.fetcher).await?;
        let music = sources.diving_fish_api.extract(&self.fetcher).await?;
        let version = sources.version_bucket.extract(&self.fetcher).await?;

        Ok(RawData {
            xray,
            yuzu,
            music,
            version,
        })
    }

    fn load(&self, data: &Data) -> Result<()> {
        Writer::write(&self.config.output.alias, &data.aliases)?;
        info!("alias write complete");

        Writer::write(&self.config.output.data, &data.songs)?;
        info!("data write complete");

        Writer::write(&self.config.output.version, &data.version)?;
        info!("version write complete");

        Ok(())
    }

    pub async fn run(&self) -> Result<Data> {
        let raw = self.extract().await?;
        let today = OffsetDateTime::now_utc().date();

        match pipeline(raw, today) {
            Ok(data) => {
                self.load(&data)?;
                Ok(data)
            }
            Err(missing) => {
                for kind in &missing.0 {
                    error!(source = %kind, "source yielded no data, skipping publication");
                }
                Err(Box::new(missing))
            }
        }
    }
}
