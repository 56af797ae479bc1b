//! Plain-text rendering of results.

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::aggregate::{HourBucket, LocationCount, SpeciesCount, TimeseriesResult};
use crate::sequence::{MediaRecord, Sequence};
use crate::video::VideoClassificationWinner;

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Write sequences, one block per sequence.
pub fn write_sequences<W: Write>(writer: &mut W, sequences: &[Sequence<'_, MediaRecord>]) -> io::Result<()> {
    for sequence in sequences {
        writeln!(
            writer,
            "{}  {} item(s)  {} .. {}",
            sequence.id,
            sequence.len(),
            format_time(sequence.start_time),
            format_time(sequence.end_time)
        )?;
        for item in &sequence.items {
            writeln!(
                writer,
                "    {}  {}",
                item.media_id,
                item.timestamp.as_deref().unwrap_or("-")
            )?;
        }
    }
    Ok(())
}

/// Write species totals as a two-column table.
pub fn write_species_counts<W: Write>(writer: &mut W, counts: &[SpeciesCount]) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|c| c.scientific_name.len())
        .max()
        .unwrap_or(0)
        .max("Species".len());

    writeln!(writer, "{:<width$}  Count", "Species")?;
    for count in counts {
        writeln!(writer, "{:<width$}  {}", count.scientific_name, count.count)?;
    }
    Ok(())
}

/// Write the weekly timeseries with one column per species.
pub fn write_timeseries<W: Write>(writer: &mut W, result: &TimeseriesResult) -> io::Result<()> {
    write!(writer, "{:<10}", "Week")?;
    for species in &result.all_species {
        write!(writer, "  {species}")?;
    }
    writeln!(writer)?;

    for row in &result.timeseries {
        write!(writer, "{:<10}", row.date)?;
        for species in &result.all_species {
            let count = row.counts.get(species).copied().unwrap_or(0);
            write!(writer, "  {count:>width$}", width = species.len())?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write per-species location counts.
pub fn write_heatmap<W: Write>(
    writer: &mut W,
    heatmap: &BTreeMap<String, Vec<LocationCount>>,
) -> io::Result<()> {
    for (species, locations) in heatmap {
        writeln!(writer, "{species}")?;
        for location in locations {
            writeln!(
                writer,
                "    {:>10.5} {:>11.5}  {:<20}  {}",
                location.latitude,
                location.longitude,
                location.location_name.as_deref().unwrap_or("-"),
                location.count
            )?;
        }
    }
    Ok(())
}

/// Write the 24-hour activity table for `species`.
pub fn write_daily_activity<W: Write>(
    writer: &mut W,
    buckets: &[HourBucket],
    species: &[String],
) -> io::Result<()> {
    write!(writer, "Hour")?;
    for name in species {
        write!(writer, "  {name}")?;
    }
    writeln!(writer)?;

    for bucket in buckets {
        write!(writer, "{:>4}", bucket.hour)?;
        for name in species {
            let count = bucket.counts.get(name).copied().unwrap_or(0);
            write!(writer, "  {count:>width$}", width = name.len())?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the winning species of a video.
pub fn write_video_winner<W: Write>(writer: &mut W, result: &VideoClassificationWinner) -> io::Result<()> {
    match (&result.winner, &result.winner_data) {
        (Some(winner), Some(data)) => writeln!(
            writer,
            "{winner}: {} frame(s), frames {}-{}, mean confidence {:.4}",
            data.frames.len(),
            data.first_frame,
            data.last_frame,
            data.avg_confidence
        ),
        _ => writeln!(writer, "No species detected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_species_counts_table() {
        let counts = vec![SpeciesCount {
            scientific_name: "Capreolus capreolus".to_string(),
            count: 7,
        }];
        let text = render(|w| write_species_counts(w, &counts));
        assert!(text.starts_with("Species"));
        assert!(text.contains("Capreolus capreolus  7"));
    }

    #[test]
    fn test_no_winner_message() {
        let text = render(|w| write_video_winner(w, &VideoClassificationWinner::default()));
        assert_eq!(text.trim(), "No species detected");
    }

    #[test]
    fn test_sequences_list_items() {
        let records = vec![
            MediaRecord::new("a", Some("2024-01-15T10:00:00Z")),
            MediaRecord::new("b", None),
        ];
        let sequences = vec![Sequence::singleton(&records[0]), Sequence::singleton(&records[1])];
        let text = render(|w| write_sequences(w, &sequences));
        assert!(text.contains("a  1 item(s)  2024-01-15 10:00:00 .. 2024-01-15 10:00:00"));
        assert!(text.contains("b  1 item(s)  - .. -"));
    }
}
