use super::UploadOutcome;
use crate::shared::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Writes paths as JSON strings; bytes that are not UTF-8 become U+FFFD
/// instead of failing the whole report.
fn serialize_paths<S: Serializer>(
    paths: &[PathBuf],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(paths.iter().map(|path| path.to_string_lossy()))
}

/// Aggregate of every upload outcome in a run
///
/// Each dispatched target lands in exactly one of the two lists. The
/// serialized form is a JSON object with exactly the fields `success` and
/// `failure`, both arrays of path strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    #[serde(serialize_with = "serialize_paths")]
    pub success: Vec<PathBuf>,
    #[serde(serialize_with = "serialize_paths")]
    pub failure: Vec<PathBuf>,
}

impl UploadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report from outcomes, keeping their relative order inside
    /// each group
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a UploadOutcome>) -> Self {
        let mut report = Self::new();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    pub fn record(&mut self, outcome: &UploadOutcome) {
        let path = outcome.target().path().to_path_buf();
        if outcome.is_success() {
            self.success.push(path);
        } else {
            self.failure.push(path);
        }
    }

    /// True iff nothing failed. An empty report is a success.
    pub fn is_success(&self) -> bool {
        self.failure.is_empty()
    }

    pub fn total(&self) -> usize {
        self.success.len() + self.failure.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
