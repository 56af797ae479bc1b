//! Burst grouping of media records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;

use super::Sequenceable;

/// A run of media judged to be one continuous animal visit.
///
/// Items are borrowed from the caller's records and always sorted ascending
/// by timestamp, whatever order they were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence<'a, T> {
    /// Media ID of the earliest item, or the shared event ID.
    pub id: String,
    /// Members sorted ascending by timestamp.
    pub items: Vec<&'a T>,
    /// Earliest valid timestamp among the items.
    pub start_time: Option<DateTime<Utc>>,
    /// Latest valid timestamp among the items.
    pub end_time: Option<DateTime<Utc>>,
}

impl<'a, T: Sequenceable> Sequence<'a, T> {
    /// A sequence holding a single record.
    pub fn singleton(record: &'a T) -> Self {
        let time = record.media().parsed_timestamp();
        Self {
            id: record.media().media_id.clone(),
            items: vec![record],
            start_time: time,
            end_time: time,
        }
    }

    /// Build a sequence from unordered members.
    ///
    /// Members without a valid timestamp are placed after the dated ones,
    /// keeping their relative order.
    fn from_members(id: String, members: Vec<&'a T>) -> Self {
        let mut timed: Vec<(&'a T, Option<DateTime<Utc>>)> = members
            .into_iter()
            .map(|record| (record, record.media().parsed_timestamp()))
            .collect();
        timed.sort_by_key(|(_, time)| (time.is_none(), *time));

        let start_time = timed.iter().find_map(|(_, time)| *time);
        let end_time = timed.iter().rev().find_map(|(_, time)| *time);

        Self {
            id,
            items: timed.into_iter().map(|(record, _)| record).collect(),
            start_time,
            end_time,
        }
    }

    /// Number of items in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Media IDs of the items, in sequence order.
    pub fn media_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|record| record.media().media_id.as_str())
            .collect()
    }
}

/// Sequence under construction while scanning the input.
struct OpenSequence<'a, T> {
    members: Vec<(&'a T, DateTime<Utc>)>,
    /// Member holding `min_time`; the first one pushed wins ties.
    earliest: &'a T,
    min_time: DateTime<Utc>,
    max_time: DateTime<Utc>,
}

impl<'a, T: Sequenceable> OpenSequence<'a, T> {
    fn start(record: &'a T, time: DateTime<Utc>) -> Self {
        Self {
            members: vec![(record, time)],
            earliest: record,
            min_time: time,
            max_time: time,
        }
    }

    /// Whether `record` belongs to this sequence.
    ///
    /// The gap is measured against both bounds so ascending, descending and
    /// unordered input all group the same way.
    fn accepts(&self, record: &T, time: DateTime<Utc>, threshold_ms: f64) -> bool {
        let same_deployment = self
            .members
            .first()
            .is_some_and(|(first, _)| first.media().shares_deployment(record.media()));
        if !same_deployment {
            return false;
        }

        let to_max = (time - self.max_time).num_milliseconds().abs();
        let to_min = (time - self.min_time).num_milliseconds().abs();
        #[allow(clippy::cast_precision_loss)]
        let gap = to_max.min(to_min) as f64;

        gap <= threshold_ms
    }

    fn push(&mut self, record: &'a T, time: DateTime<Utc>) {
        if time < self.min_time {
            self.earliest = record;
            self.min_time = time;
        }
        self.max_time = self.max_time.max(time);
        self.members.push((record, time));
    }

    fn finish(mut self) -> Sequence<'a, T> {
        self.members.sort_by_key(|(_, time)| *time);

        Sequence {
            id: self.earliest.media().media_id.clone(),
            items: self.members.into_iter().map(|(record, _)| record).collect(),
            start_time: Some(self.min_time),
            end_time: Some(self.max_time),
        }
    }
}

/// Group records into sequences by time gap within a deployment.
///
/// A record joins the open sequence when both carry the same non-null
/// deployment ID and the record lies within `gap_threshold_seconds` of the
/// sequence's earliest or latest time (inclusive). A threshold of zero or
/// less disables grouping: every record becomes its own sequence, in input
/// order. Records without a parseable timestamp are emitted as singletons
/// and close the open sequence.
///
/// Sequences are emitted in the order they are closed while scanning.
pub fn group_into_sequences<'a, T, I>(records: I, gap_threshold_seconds: f64) -> Vec<Sequence<'a, T>>
where
    T: Sequenceable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let records = records.into_iter();

    if gap_threshold_seconds.is_nan() || gap_threshold_seconds <= 0.0 {
        return records.map(Sequence::singleton).collect();
    }

    let threshold_ms = gap_threshold_seconds * 1000.0;
    let mut sequences = Vec::new();
    let mut open: Option<OpenSequence<'a, T>> = None;

    for record in records {
        let Some(time) = record.media().parsed_timestamp() else {
            trace!(media_id = %record.media().media_id, "isolating record without valid timestamp");
            if let Some(current) = open.take() {
                sequences.push(current.finish());
            }
            sequences.push(Sequence::singleton(record));
            continue;
        };

        let joins = open
            .as_ref()
            .is_some_and(|current| current.accepts(record, time, threshold_ms));

        if joins {
            if let Some(current) = open.as_mut() {
                current.push(record, time);
            }
        } else if let Some(closed) = open.replace(OpenSequence::start(record, time)) {
            sequences.push(closed.finish());
        }
    }

    if let Some(current) = open {
        sequences.push(current.finish());
    }

    sequences
}

/// Group records by their pre-assigned event ID.
///
/// Records sharing a non-blank event ID form one sequence identified by that
/// event ID; records without one become singletons. The result is sorted
/// newest first by start time, with undated sequences last.
pub fn group_by_event_id<'a, T, I>(records: I) -> Vec<Sequence<'a, T>>
where
    T: Sequenceable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut events: Vec<(&'a str, Vec<&'a T>)> = Vec::new();
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut sequences = Vec::new();

    for record in records {
        match record.media().event_key() {
            Some(event_id) => {
                let slot = *slots.entry(event_id).or_insert_with(|| {
                    events.push((event_id, Vec::new()));
                    events.len() - 1
                });
                events[slot].1.push(record);
            }
            None => sequences.push(Sequence::singleton(record)),
        }
    }

    sequences.extend(
        events
            .into_iter()
            .map(|(event_id, members)| Sequence::from_members(event_id.to_string(), members)),
    );

    // `None` sorts below `Some`, so reversing the comparison puts it last.
    sequences.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    sequences
}
