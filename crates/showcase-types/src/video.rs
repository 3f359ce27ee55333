use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::join_name;

/// Backend-assigned lifecycle status of a video.
///
/// Drives which UI actions are enabled: only `Processed` videos are playable
/// and votable. A status string the client does not recognize deserializes to
/// `Unknown` rather than failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Uploaded,
    Processing,
    Processed,
    Error,
    #[serde(other)]
    Unknown,
}

impl VideoStatus {
    pub fn is_votable(&self) -> bool {
        matches!(self, VideoStatus::Processed)
    }

    /// Spanish label shown in the UI, matching the platform's wording.
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::Uploaded => "Subido",
            VideoStatus::Processing => "Procesando",
            VideoStatus::Processed => "Procesado",
            VideoStatus::Error => "Error",
            VideoStatus::Unknown => "Desconocido",
        }
    }
}

impl Default for VideoStatus {
    fn default() -> Self {
        VideoStatus::Uploaded
    }
}

/// A video snapshot as served by the list and detail endpoints.
///
/// Owned by the backend; the client only holds read-only copies fetched per
/// screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user_first_name: String,
    #[serde(default)]
    pub user_last_name: String,
    #[serde(default)]
    pub user_city: String,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Video {
    pub fn owner_name(&self) -> String {
        join_name(&self.user_first_name, &self.user_last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_lowercase() {
        let s: VideoStatus = serde_json::from_str("\"processed\"").unwrap();
        assert_eq!(s, VideoStatus::Processed);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"processed\"");
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let s: VideoStatus = serde_json::from_str("\"quarantined\"").unwrap();
        assert_eq!(s, VideoStatus::Unknown);
        assert!(!s.is_votable());
    }

    #[test]
    fn only_processed_is_votable() {
        assert!(VideoStatus::Processed.is_votable());
        assert!(!VideoStatus::Processing.is_votable());
        assert!(!VideoStatus::Uploaded.is_votable());
        assert!(!VideoStatus::Error.is_votable());
    }

    #[test]
    fn video_tolerates_sparse_payload() {
        let v: Video = serde_json::from_str(r#"{"video_id":"v1"}"#).unwrap();
        assert_eq!(v.video_id, "v1");
        assert_eq!(v.votes, 0);
        assert!(v.is_public);
        assert_eq!(v.status, VideoStatus::Uploaded);
        assert!(v.uploaded_at.is_none());
    }
}
