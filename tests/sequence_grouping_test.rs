//! Tests for sequence grouping.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use trapwise::sequence::{GapThreshold, MediaRecord, group_by_event_id, group_into_sequences, group_media};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).single().unwrap()
}

fn at_offset_ms(offset_ms: i64) -> String {
    (base_time() + Duration::milliseconds(offset_ms)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn make_media(id: &str, offset_ms: i64, deployment: Option<&str>) -> MediaRecord {
    let record = MediaRecord::new(id, Some(&at_offset_ms(offset_ms)));
    match deployment {
        Some(dep) => record.with_deployment(dep),
        None => record,
    }
}

fn sorted_partition(records: &[MediaRecord], gap: f64) -> Vec<Vec<String>> {
    let mut partition: Vec<Vec<String>> = group_into_sequences(records, gap)
        .iter()
        .map(|s| {
            let mut ids: Vec<String> = s.media_ids().into_iter().map(str::to_string).collect();
            ids.sort();
            ids
        })
        .collect();
    partition.sort();
    partition
}

#[test]
fn test_all_permutations_group_into_one_sorted_sequence() {
    let a = make_media("a", 0, Some("dep1"));
    let b = make_media("b", 30_000, Some("dep1"));
    let c = make_media("c", 50_000, Some("dep1"));

    let permutations = [
        [&a, &b, &c],
        [&a, &c, &b],
        [&b, &a, &c],
        [&b, &c, &a],
        [&c, &a, &b],
        [&c, &b, &a],
    ];

    for permutation in permutations {
        let records: Vec<MediaRecord> = permutation.iter().map(|r| (*r).clone()).collect();
        let sequences = group_into_sequences(&records, 60.0);

        assert_eq!(sequences.len(), 1, "permutation {:?}", records.iter().map(|r| &r.media_id).collect::<Vec<_>>());
        assert_eq!(sequences[0].media_ids(), vec!["a", "b", "c"]);
        assert_eq!(sequences[0].id, "a");
        assert_eq!(sequences[0].start_time, Some(base_time()));
        assert_eq!(sequences[0].end_time, Some(base_time() + Duration::seconds(50)));
    }
}

#[test]
fn test_gap_equal_to_threshold_groups() {
    let records = vec![make_media("a", 0, Some("dep1")), make_media("b", 60_000, Some("dep1"))];
    assert_eq!(group_into_sequences(&records, 60.0).len(), 1);
}

#[test]
fn test_gap_one_ms_over_threshold_splits() {
    let records = vec![make_media("a", 0, Some("dep1")), make_media("b", 60_001, Some("dep1"))];
    let sequences = group_into_sequences(&records, 60.0);
    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences[0].media_ids(), vec!["a"]);
    assert_eq!(sequences[1].media_ids(), vec!["b"]);
}

#[test]
fn test_different_deployments_never_merge() {
    let records = vec![make_media("a", 0, Some("dep1")), make_media("b", 5_000, Some("dep2"))];
    let sequences = group_into_sequences(&records, 60.0);
    assert_eq!(sequences.len(), 2);
    assert!(sequences.iter().all(|s| s.len() == 1));
}

#[test]
fn test_null_deployments_never_merge() {
    let records = vec![make_media("a", 0, None), make_media("b", 1_000, None)];
    assert_eq!(group_into_sequences(&records, 60.0).len(), 2);

    let records = vec![make_media("a", 0, Some("dep1")), make_media("b", 1_000, None)];
    assert_eq!(group_into_sequences(&records, 60.0).len(), 2);
}

#[test]
fn test_large_burst_collapses_to_one_sequence() {
    // 50 shots two seconds apart, supplied newest first
    let records: Vec<MediaRecord> = (0..50)
        .rev()
        .map(|i| make_media(&format!("m{i:02}"), i * 2_000, Some("dep1")))
        .collect();

    let sequences = group_into_sequences(&records, 10.0);

    assert_eq!(sequences.len(), 1);
    assert_eq!(sequences[0].len(), 50);
    assert_eq!(sequences[0].id, "m00");
    let ids = sequences[0].media_ids();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_zero_or_negative_threshold_yields_singletons_in_input_order() {
    let records = vec![
        make_media("c", 2_000, Some("dep1")),
        make_media("a", 0, Some("dep1")),
        make_media("b", 1_000, Some("dep1")),
    ];

    for gap in [0.0, -1.0, -60.0] {
        let sequences = group_into_sequences(&records, gap);
        assert_eq!(sequences.len(), records.len());
        let ids: Vec<&str> = sequences.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}

#[test]
fn test_unparsable_timestamps_become_singletons() {
    let records = vec![
        make_media("a", 0, Some("dep1")),
        MediaRecord::new("broken", Some("31/02/2024 25:61")).with_deployment("dep1"),
        MediaRecord::new("missing", None).with_deployment("dep1"),
        make_media("b", 5_000, Some("dep1")),
        make_media("c", 6_000, Some("dep1")),
    ];

    let sequences = group_into_sequences(&records, 60.0);

    let shapes: Vec<Vec<&str>> = sequences.iter().map(|s| s.media_ids()).collect();
    assert_eq!(
        shapes,
        vec![vec!["a"], vec!["broken"], vec!["missing"], vec!["b", "c"]]
    );
    assert_eq!(sequences[1].start_time, None);
    assert_eq!(sequences[2].end_time, None);
}

#[test]
fn test_partition_is_order_independent() {
    let records = vec![
        make_media("a", 0, Some("dep1")),
        make_media("b", 20_000, Some("dep1")),
        make_media("c", 300_000, Some("dep1")),
        make_media("d", 310_000, Some("dep1")),
        make_media("e", 15_000, Some("dep2")),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    assert_eq!(sorted_partition(&records, 60.0), sorted_partition(&reversed, 60.0));
    assert_eq!(sorted_partition(&records, 60.0).len(), 3);
}

#[test]
fn test_input_is_not_mutated() {
    let records = vec![
        make_media("b", 10_000, Some("dep1")),
        make_media("a", 0, Some("dep1")),
    ];
    let before = records.clone();

    let _ = group_into_sequences(&records, 60.0);
    let _ = group_by_event_id(&records);
    let _ = group_media(&records, GapThreshold::Seconds(60.0));

    assert_eq!(records, before);
}

#[test]
fn test_event_grouping_buckets_by_event_id() {
    let records = vec![
        make_media("a", 0, Some("dep1")).with_event("event1"),
        make_media("b", 600_000, Some("dep1")).with_event("event2"),
        make_media("c", 5_000, Some("dep1")).with_event("event1"),
        make_media("d", 1_000_000, Some("dep1")),
    ];

    let sequences = group_by_event_id(&records);

    assert_eq!(sequences.len(), 3);
    let event1 = sequences.iter().find(|s| s.id == "event1").unwrap();
    assert_eq!(event1.media_ids(), vec!["a", "c"]);
    let singleton = sequences.iter().find(|s| s.id == "d").unwrap();
    assert_eq!(singleton.len(), 1);
}

#[test]
fn test_event_grouping_sorted_newest_first() {
    let records = vec![
        make_media("old", 0, None).with_event("e-old"),
        make_media("new", 900_000, None).with_event("e-new"),
        make_media("mid", 300_000, None),
        MediaRecord::new("undated", None),
    ];

    let sequences = group_by_event_id(&records);

    let ids: Vec<&str> = sequences.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["e-new", "mid", "e-old", "undated"]);
}

#[test]
fn test_gap_grouping_keeps_encounter_order() {
    // Unlike event grouping, gap grouping does not re-sort sequences.
    let records = vec![
        make_media("late", 900_000, Some("dep1")),
        make_media("early", 0, Some("dep1")),
    ];
    let sequences = group_into_sequences(&records, 60.0);
    let ids: Vec<&str> = sequences.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["late", "early"]);
}
