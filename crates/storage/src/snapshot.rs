//! Persisted shape of [`Progress`].
//!
//! The JSON layout (camelCase keys) is the on-disk contract; any missing or
//! mistyped required field makes the whole snapshot invalid.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quiz_core::model::{Progress, ProgressError, QuestionIndex, SessionResult};

/// Key under which the progress snapshot is stored.
pub const PROGRESS_SNAPSHOT_KEY: &str = "fablab_quiz_state_v1";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] ProgressError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResultRecord {
    pub session_number: u32,
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

impl From<&SessionResult> for SessionResultRecord {
    fn from(result: &SessionResult) -> Self {
        Self {
            session_number: result.session_number,
            correct: result.correct,
            total: result.total,
            percentage: result.percentage,
        }
    }
}

impl From<SessionResultRecord> for SessionResult {
    fn from(record: SessionResultRecord) -> Self {
        Self {
            session_number: record.session_number,
            correct: record.correct,
            total: record.total,
            percentage: record.percentage,
        }
    }
}

/// Serialized progress. `saved_at` is informational and never required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub used_question_indices: Vec<QuestionIndex>,
    pub total_score: u32,
    pub total_answered: u32,
    pub sessions_played: u32,
    pub history: Vec<SessionResultRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress, saved_at: Option<DateTime<Utc>>) -> Self {
        Self {
            used_question_indices: progress.used().to_vec(),
            total_score: progress.total_score(),
            total_answered: progress.total_answered(),
            sessions_played: progress.sessions_played(),
            history: progress.history().iter().map(SessionResultRecord::from).collect(),
            saved_at,
        }
    }

    /// Convert the record back into domain `Progress`.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Invalid` if indices repeat or fall outside the bank.
    pub fn into_progress(self, question_count: usize) -> Result<Progress, SnapshotError> {
        Ok(Progress::from_persisted(
            self.used_question_indices,
            self.total_score,
            self.total_answered,
            self.sessions_played,
            self.history.into_iter().map(SessionResult::from).collect(),
            question_count,
        )?)
    }

    /// # Errors
    ///
    /// Returns `SnapshotError::Malformed` if serialization fails.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    ///
    /// Returns `SnapshotError::Malformed` if `raw` is not a valid snapshot document.
    pub fn decode(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "usedQuestionIndices": [3, 7, 12, 0, 19],
            "totalScore": 4,
            "totalAnswered": 5,
            "sessionsPlayed": 1,
            "history": [
                { "sessionNumber": 1, "correct": 4, "total": 5, "percentage": 80 }
            ]
        })
    }

    #[test]
    fn decodes_the_documented_layout() {
        let record = ProgressRecord::decode(&sample_json().to_string()).unwrap();
        let progress = record.into_progress(20).unwrap();

        assert_eq!(progress.used().len(), 5);
        assert_eq!(progress.total_score(), 4);
        assert_eq!(progress.sessions_played(), 1);
        assert_eq!(progress.history()[0], SessionResult::new(1, 4, 5));
    }

    #[test]
    fn missing_history_is_rejected() {
        let mut json = sample_json();
        json.as_object_mut().unwrap().remove("history");
        let err = ProgressRecord::decode(&json.to_string()).unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }

    #[test]
    fn mistyped_counter_is_rejected() {
        let mut json = sample_json();
        json["totalScore"] = serde_json::json!("four");
        assert!(ProgressRecord::decode(&json.to_string()).is_err());

        json["totalScore"] = serde_json::json!(-1);
        assert!(ProgressRecord::decode(&json.to_string()).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut json = sample_json();
        json["showResults"] = serde_json::json!(true);
        json["_savedAt"] = serde_json::json!(1_700_000_000_000_u64);
        assert!(ProgressRecord::decode(&json.to_string()).is_ok());
    }

    #[test]
    fn duplicate_indices_are_invalid() {
        let mut json = sample_json();
        json["usedQuestionIndices"] = serde_json::json!([1, 1]);
        let record = ProgressRecord::decode(&json.to_string()).unwrap();
        assert!(matches!(
            record.into_progress(20).unwrap_err(),
            SnapshotError::Invalid(ProgressError::DuplicateIndex(_))
        ));
    }

    #[test]
    fn encodes_camel_case_keys_and_timestamp() {
        let progress = ProgressRecord::decode(&sample_json().to_string())
            .unwrap()
            .into_progress(20)
            .unwrap();
        let encoded = ProgressRecord::from_progress(&progress, Some(fixed_now()))
            .encode()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["usedQuestionIndices"], serde_json::json!([3, 7, 12, 0, 19]));
        assert_eq!(value["history"][0]["sessionNumber"], 1);
        assert_eq!(value["savedAt"], "2024-05-01T12:00:00Z");
    }
}
