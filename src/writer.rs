use crate::Result;

use serde::Serialize;
use std::fs;
use tracing::info;

pub struct Writer;

impl Writer {
    /// Serialize `value` as compact JSON (no whitespace, non-ASCII kept
    /// literal) and write it to `path` as UTF-8.
    pub fn write<T>(path: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;
        fs::write(path, json)?;
        info!(path, "wrote artifact");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_compact_utf8() {
        let path = std::env::temp_dir().join("alias-aggregator-writer-test.json");
        let path = path.to_str().unwrap();

        let value = json!({ "Name": "テスト", "Alias": ["甲", "乙"] });
        Writer::write(path, &value).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, r#"{"Alias":["甲","乙"],"Name":"テスト"}"#);

        fs::remove_file(path).unwrap();
    }
}
