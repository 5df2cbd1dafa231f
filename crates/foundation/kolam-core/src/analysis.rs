use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::pattern::PatternRecord;

/// A selected template stamped with when and for which file it was produced.
///
/// Serializes flat: the record's fields followed by `analyzed_at` and
/// `source_filename`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub pattern: PatternRecord,
    pub analyzed_at: String,
    pub source_filename: String,
}

impl AnalysisResult {
    /// Stamp with the current time
    pub fn stamp(pattern: PatternRecord, source_filename: impl Into<String>) -> Self {
        Self::stamp_at(pattern, source_filename, Utc::now())
    }

    pub fn stamp_at(
        pattern: PatternRecord,
        source_filename: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            pattern,
            analyzed_at: at.to_rfc3339_opts(SecondsFormat::Micros, false),
            source_filename: source_filename.into(),
        }
    }
}
