//! Grouping policy shared by the gallery view and every statistic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Sequence, Sequenceable, group_by_event_id, group_into_sequences};
use crate::constants::GAP_OFF_KEYWORD;
use crate::error::Error;

/// How media are split into sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GapThresholdRepr", into = "GapThresholdRepr")]
pub enum GapThreshold {
    /// Group by time proximity, in seconds.
    Seconds(f64),
    /// Gap grouping is off; group by imported event IDs instead.
    EventId,
}

impl GapThreshold {
    /// Map a raw threshold to a policy; zero or less selects event IDs.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds > 0.0 {
            Self::Seconds(seconds)
        } else {
            Self::EventId
        }
    }

    /// The threshold as seconds, `0.0` standing for event-ID grouping.
    pub fn as_seconds(self) -> f64 {
        match self {
            Self::Seconds(seconds) => seconds,
            Self::EventId => 0.0,
        }
    }
}

impl std::fmt::Display for GapThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{seconds}s"),
            Self::EventId => write!(f, "{GAP_OFF_KEYWORD}"),
        }
    }
}

impl std::str::FromStr for GapThreshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(GAP_OFF_KEYWORD) {
            return Ok(Self::EventId);
        }

        let seconds = trimmed
            .strip_suffix('s')
            .unwrap_or(trimmed)
            .parse::<f64>()
            .ok()
            .filter(|seconds| seconds.is_finite())
            .ok_or_else(|| Error::InvalidGapThreshold {
                value: s.to_string(),
            })?;

        Ok(Self::from_seconds(seconds))
    }
}

/// On-disk form: a number of seconds or the `"off"` keyword.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum GapThresholdRepr {
    Seconds(f64),
    Keyword(String),
}

impl TryFrom<GapThresholdRepr> for GapThreshold {
    type Error = Error;

    fn try_from(repr: GapThresholdRepr) -> Result<Self, Self::Error> {
        match repr {
            GapThresholdRepr::Seconds(seconds) => Ok(Self::from_seconds(seconds)),
            GapThresholdRepr::Keyword(keyword) => keyword.parse(),
        }
    }
}

impl From<GapThreshold> for GapThresholdRepr {
    fn from(threshold: GapThreshold) -> Self {
        match threshold {
            GapThreshold::Seconds(seconds) => Self::Seconds(seconds),
            GapThreshold::EventId => Self::Keyword(GAP_OFF_KEYWORD.to_string()),
        }
    }
}

/// Partition mixed media the way the gallery shows them.
///
/// Videos are always singletons. Images and other stills are grouped by
/// time gap or by event ID depending on `policy`. Grouped stills come
/// first, followed by the video singletons in input order.
pub fn group_media<'a, T, I>(records: I, policy: GapThreshold) -> Vec<Sequence<'a, T>>
where
    T: Sequenceable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (videos, stills): (Vec<&'a T>, Vec<&'a T>) =
        records.into_iter().partition(|record| record.media().is_video());

    let mut sequences = match policy {
        GapThreshold::Seconds(seconds) => group_into_sequences(stills, seconds),
        GapThreshold::EventId => group_by_event_id(stills),
    };
    let grouped = sequences.len();
    sequences.extend(videos.into_iter().map(Sequence::singleton));

    debug!(
        policy = %policy,
        sequences = sequences.len(),
        videos = sequences.len() - grouped,
        "grouped media into sequences"
    );

    sequences
}
