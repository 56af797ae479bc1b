//! Media records and the trait that makes a record groupable.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::parse_timestamp;
use crate::constants::media::{VIDEO_EXTENSIONS, VIDEO_MEDIATYPE_PREFIX};

/// A single image or video captured by a camera trap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    /// Unique media identifier.
    #[serde(rename = "mediaID")]
    pub media_id: String,
    /// Capture time as an ISO-8601 string.
    pub timestamp: Option<String>,
    /// Camera placement session the media belongs to.
    #[serde(rename = "deploymentID")]
    pub deployment_id: Option<String>,
    /// Externally assigned burst identifier.
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    /// MIME type of the media file.
    pub file_mediatype: Option<String>,
    /// Path or name of the media file.
    pub file_path: Option<String>,
}

impl MediaRecord {
    /// Create a record with an ID and an optional timestamp.
    pub fn new(media_id: impl Into<String>, timestamp: Option<&str>) -> Self {
        Self {
            media_id: media_id.into(),
            timestamp: timestamp.map(str::to_string),
            ..Self::default()
        }
    }

    /// Set the deployment ID.
    #[must_use]
    pub fn with_deployment(mut self, deployment_id: impl Into<String>) -> Self {
        self.deployment_id = Some(deployment_id.into());
        self
    }

    /// Set the event ID.
    #[must_use]
    pub fn with_event(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    /// Set the media type.
    #[must_use]
    pub fn with_mediatype(mut self, mediatype: impl Into<String>) -> Self {
        self.file_mediatype = Some(mediatype.into());
        self
    }

    /// Set the file path.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Parsed capture time, or `None` when missing or malformed.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp.as_deref().and_then(parse_timestamp)
    }

    /// Event ID, ignoring blank values.
    pub fn event_key(&self) -> Option<&str> {
        self.event_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Whether both records carry the same non-null deployment ID.
    pub fn shares_deployment(&self, other: &Self) -> bool {
        matches!(
            (self.deployment_id.as_deref(), other.deployment_id.as_deref()),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Whether this record is a video.
    ///
    /// The media type wins when present; otherwise the file extension decides.
    pub fn is_video(&self) -> bool {
        if let Some(mediatype) = self.file_mediatype.as_deref()
            && !mediatype.is_empty()
        {
            return mediatype
                .to_ascii_lowercase()
                .starts_with(VIDEO_MEDIATYPE_PREFIX);
        }

        self.file_path
            .as_deref()
            .and_then(|path| Path::new(path).extension())
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|video| ext.eq_ignore_ascii_case(video))
            })
    }
}

/// Anything that can be partitioned into sequences.
pub trait Sequenceable {
    /// The media fields used for grouping.
    fn media(&self) -> &MediaRecord;
}

impl Sequenceable for MediaRecord {
    fn media(&self) -> &MediaRecord {
        self
    }
}
