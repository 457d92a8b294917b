use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug)]
pub struct AggregatorError {
    message: String,
}

impl AggregatorError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }

    pub fn boxed(message: &str) -> Box<AggregatorError> {
        Box::new(AggregatorError::new(message))
    }
}

impl Display for AggregatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Aggregator Error: {}", self.message)
    }
}

impl Error for AggregatorError {}

/// The four remote sources the aggregator depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    XrayAliasDB,
    YuzuAIAPI,
    DivingFishAPI,
    VersionBucket,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            SourceKind::XrayAliasDB => "xray alias db",
            SourceKind::YuzuAIAPI => "yuzuai api",
            SourceKind::DivingFishAPI => "diving-fish music data",
            SourceKind::VersionBucket => "version bucket",
        };
        write!(f, "{}", name)
    }
}

/// Pipeline failure: one or more sources yielded no data. Nothing is
/// written when this is returned.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingSource(pub Vec<SourceKind>);

impl Display for MissingSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "no data available from: ")?;
        for (index, kind) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

impl Error for MissingSource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_display() {
        let missing = MissingSource(vec![SourceKind::XrayAliasDB, SourceKind::VersionBucket]);
        assert_eq!(
            missing.to_string(),
            "no data available from: xray alias db, version bucket"
        );
    }
}
