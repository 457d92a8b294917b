use crate::config::Config;
use crate::fetcher::{Fetched, Fetcher};
use crate::sources::yuzuai_api::{AliasEntry, AliasMap};
use crate::sources::Extract;
use crate::Result;

use async_trait::async_trait;
use std::collections::BTreeMap;

/// The xray database maps a display name to a list of ids: the first
/// element is the canonical id, any remaining elements are alternate ids.
/// Kept sorted by name so that contested canonical ids resolve the same
/// way on every run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct XrayAliases(pub BTreeMap<String, Vec<String>>);

impl XrayAliases {
    /// Invert name -> id-list into id -> alias record. Names whose id
    /// lists are exactly equal are grouped as aliases of each other under
    /// the shared canonical id. Entries with an empty id list contribute
    /// nothing.
    pub fn invert(&self) -> AliasMap {
        let mut inverted = AliasMap::new();

        for (name, ids) in &self.0 {
            let canonical = match ids.first() {
                Some(canonical) => canonical,
                None => continue,
            };

            let mut alias: Vec<String> = self
                .0
                .iter()
                .filter(|(_, other)| *other == ids)
                .map(|(other_name, _)| other_name.clone())
                .collect();
            alias.sort();

            inverted.insert(
                canonical.clone(),
                AliasEntry {
                    name: name.clone(),
                    alias,
                },
            );
        }

        inverted
    }
}

#[derive(Debug, Clone)]
pub struct XrayAliasDB<'a> {
    config: &'a Config,
}

impl XrayAliasDB<'_> {
    pub fn new(config: &Config) -> XrayAliasDB {
        XrayAliasDB { config }
    }

    /// Entries whose value is not an array of strings are dropped without
    /// raising; the upstream database is hand-maintained.
    fn parse(json: serde_json::Value) -> XrayAliases {
        let mut aliases = XrayAliases::default();

        if let Some(object) = json.as_object() {
            for (name, value) in object {
                if let Ok(ids) = serde_json::from_value::<Vec<String>>(value.clone()) {
                    aliases.0.insert(name.clone(), ids);
                }
            }
        }

        aliases
    }
}

#[async_trait]
impl Extract<'_> for XrayAliasDB<'_> {
    type Data = XrayAliases;

    async fn extract(&self, fetcher: &Fetcher) -> Result<Fetched<Self::Data>> {
        let json = match fetcher.fetch_json(&self.config.xray_alias_db.url).await {
            Fetched::Available(json) => json,
            Fetched::Unavailable => return Ok(Fetched::Unavailable),
        };

        Ok(Fetched::Available(Self::parse(json)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn aliases(entries: &[(&str, &[&str])]) -> XrayAliases {
        XrayAliases(
            entries
                .iter()
                .map(|(name, ids)| {
                    let ids = ids.iter().map(|id| id.to_string()).collect();
                    (name.to_string(), ids)
                })
                .collect(),
        )
    }

    #[test]
    fn test_invert_groups_equal_lists() {
        let aliases = aliases(&[("x", &["101"]), ("y", &["101"])]);
        let inverted = aliases.invert();

        assert_eq!(inverted.len(), 1);
        let entry = inverted.get("101").unwrap();
        assert_eq!(entry.alias, vec!["x", "y"]);
    }

    #[test]
    fn test_invert_does_not_group_differing_lists() {
        // Same canonical id, but the lists differ, so the names are not
        // aliases of each other. The last name in source order wins the
        // slot for id 101.
        let aliases = aliases(&[("x", &["101", "y"]), ("y", &["101"])]);
        let inverted = aliases.invert();

        assert_eq!(inverted.len(), 1);
        let entry = inverted.get("101").unwrap();
        assert_eq!(entry.name, "y");
        assert_eq!(entry.alias, vec!["y"]);
    }

    #[test]
    fn test_invert_skips_empty_lists() {
        let aliases = aliases(&[("x", &[]), ("y", &["7"])]);
        let inverted = aliases.invert();

        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted.get("7").unwrap().name, "y");
    }

    #[test]
    fn test_parse_drops_malformed_entries() {
        let json = json!({
            "good": ["101"],
            "bad": "not a list",
            "worse": [1, 2, 3]
        });
        let aliases = XrayAliasDB::parse(json);

        assert_eq!(aliases.0.len(), 1);
        assert_eq!(aliases.0.get("good").unwrap(), &vec!["101".to_owned()]);
    }
}
