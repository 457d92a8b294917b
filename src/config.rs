use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    pub max_attempts: u32,
    pub timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XrayAliasDBConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YuzuAIAPIConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DivingFishAPIConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionBucketConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub alias: String,
    pub data: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub xray_alias_db: XrayAliasDBConfig,
    pub yuzuai_api: YuzuAIAPIConfig,
    pub diving_fish_api: DivingFishAPIConfig,
    pub version_bucket: VersionBucketConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn from_file(filename: &str) -> Config {
        let config = fs::read_to_string(filename).unwrap();
        let config: Config = toml::from_str(&config).unwrap();
        config
    }
}

impl Default for Config {
    fn default() -> Config {
        Self::from_file("config/config.toml")
    }
}
