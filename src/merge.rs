use crate::sources::yuzuai_api::AliasMap;

use std::collections::BTreeSet;

pub struct Merge;

impl Merge {
    /// Fold the inverted xray map into the yuzuai map. The yuzuai map is
    /// authoritative for which ids exist: ids known only to the xray side
    /// are dropped, overlapping ids get the sorted union of both alias
    /// lists. This left-join shape matches the published artifact and must
    /// not change.
    pub fn merge(mut base: AliasMap, inverted: &AliasMap) -> AliasMap {
        for (id, entry) in base.iter_mut() {
            if let Some(extra) = inverted.get(id) {
                let union: BTreeSet<String> = entry
                    .alias
                    .iter()
                    .chain(extra.alias.iter())
                    .cloned()
                    .collect();
                entry.alias = union.into_iter().collect();
            }
        }

        base
    }
}
