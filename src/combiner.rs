use crate::sources::diving_fish_api::Song;
use crate::sources::yuzuai_api::AliasMap;

pub struct Combiner;

impl Combiner {
    /// Attach merged aliases to the master song list by id. Every input
    /// record produces exactly one output record in the same position;
    /// songs without an alias entry pass through untouched.
    pub fn combine(mut songs: Vec<Song>, aliases: &AliasMap) -> Vec<Song> {
        for song in &mut songs {
            if let Some(entry) = aliases.get(&song.id) {
                song.alias = Some(entry.alias.clone());
            }
        }

        songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::yuzuai_api::AliasEntry;
    use serde_json::json;

    fn songs(json: serde_json::Value) -> Vec<Song> {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_combine_is_positional() {
        let songs = songs(json!([
            { "id": "2", "title": "b" },
            { "id": "1", "title": "a" },
            { "id": "9", "title": "c" }
        ]));
        let aliases = AliasMap::from([(
            "1".to_owned(),
            AliasEntry {
                name: "a".to_owned(),
                alias: vec!["uno".to_owned()],
            },
        )]);

        let combined = Combiner::combine(songs, &aliases);

        assert_eq!(combined.len(), 3);
        let ids: Vec<&str> = combined.iter().map(|song| song.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "9"]);
        assert_eq!(combined[1].alias, Some(vec!["uno".to_owned()]));
        assert_eq!(combined[0].alias, None);
        assert_eq!(combined[2].alias, None);
    }

    #[test]
    fn test_combine_overwrites_prior_alias() {
        let songs = songs(json!([{ "id": "1", "alias": ["stale"] }]));
        let aliases = AliasMap::from([(
            "1".to_owned(),
            AliasEntry {
                name: "a".to_owned(),
                alias: vec!["fresh".to_owned()],
            },
        )]);

        let combined = Combiner::combine(songs, &aliases);

        assert_eq!(combined[0].alias, Some(vec!["fresh".to_owned()]));
    }

    #[test]
    fn test_unmatched_song_serializes_without_alias_key() {
        let songs = songs(json!([{ "id": "1", "title": "a" }]));
        let combined = Combiner::combine(songs, &AliasMap::new());

        let out = serde_json::to_value(&combined).unwrap();
        assert_eq!(out[0].get("alias"), None);
    }
}
