//! Command execution.

use std::collections::BTreeSet;
use std::io::{self, StdoutLock, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::aggregate::{
    ActivityObservation, HeatmapObservation, SpeciesObservation, TimeseriesObservation,
    calculate_sequence_aware_daily_activity, calculate_sequence_aware_heatmap,
    calculate_sequence_aware_species_counts, calculate_sequence_aware_timeseries,
};
use crate::cli::{ActivityArgs, Command, ConfigAction, GroupingArgs};
use crate::config::{Config, OutputMode, config_file_path, load_default_config, save_default_config};
use crate::error::Result;
use crate::input::{ObservationRow, distinct_media, read_frame_predictions, read_observations};
use crate::output::{ResultType, emit_json_result, human};
use crate::sequence::{GapThreshold, group_media};
use crate::utils::species_list::read_species_list;
use crate::video::{collect_species_frames, select_video_classification_winner};

/// Execute a parsed command.
pub fn execute(command: Command, config: &Config, mode: OutputMode) -> Result<()> {
    match command {
        Command::Sequences(args) => run_sequences(&args, config, mode),
        Command::Species(args) => run_species(&args, config, mode),
        Command::Timeseries(args) => run_timeseries(&args, config, mode),
        Command::Heatmap(args) => run_heatmap(&args, config, mode),
        Command::Activity(args) => run_activity(&args, config, mode),
        Command::VideoWinner { predictions } => run_video_winner(&predictions, mode),
        Command::Config { action } => run_config(action, mode),
    }
}

/// Print a result either as a JSON envelope or through `write_human`.
fn render<T, F>(
    mode: OutputMode,
    result_type: ResultType,
    gap: Option<GapThreshold>,
    data: &T,
    write_human: F,
) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut StdoutLock<'static>) -> io::Result<()>,
{
    if mode.is_structured() {
        return emit_json_result(result_type, gap, data);
    }

    let mut stdout = io::stdout().lock();
    write_human(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Command-line gap, falling back to the configured default.
fn resolve_gap(args: &GroupingArgs, config: &Config) -> GapThreshold {
    args.gap.unwrap_or(config.defaults.gap_threshold)
}

fn load_rows(args: &GroupingArgs) -> Result<Vec<ObservationRow>> {
    let rows = read_observations(&args.input)?;
    if rows.is_empty() {
        warn!("No observations found in {}", args.input.display());
    } else {
        info!("Loaded {} observation(s) from {}", rows.len(), args.input.display());
    }
    Ok(rows)
}

fn run_sequences(args: &GroupingArgs, config: &Config, mode: OutputMode) -> Result<()> {
    let gap = resolve_gap(args, config);
    let rows = load_rows(args)?;
    let media = distinct_media(&rows);
    let sequences = group_media(&media, gap);

    info!(
        "Grouped {} media into {} sequence(s) (gap: {gap})",
        media.len(),
        sequences.len()
    );

    render(mode, ResultType::Sequences, Some(gap), &sequences, |out| {
        human::write_sequences(out, &sequences)
    })
}

fn run_species(args: &GroupingArgs, config: &Config, mode: OutputMode) -> Result<()> {
    let gap = resolve_gap(args, config);
    let observations: Vec<SpeciesObservation> = load_rows(args)?
        .iter()
        .map(ObservationRow::to_species_observation)
        .collect();

    let counts = calculate_sequence_aware_species_counts(&observations, gap.as_seconds());
    info!("Counted {} species (gap: {gap})", counts.len());

    render(mode, ResultType::SpeciesCounts, Some(gap), &counts, |out| {
        human::write_species_counts(out, &counts)
    })
}

fn run_timeseries(args: &GroupingArgs, config: &Config, mode: OutputMode) -> Result<()> {
    let gap = resolve_gap(args, config);
    let observations: Vec<TimeseriesObservation> = load_rows(args)?
        .iter()
        .map(ObservationRow::to_timeseries_observation)
        .collect();

    let unbucketed = observations.iter().filter(|o| o.dimension.is_none()).count();
    if unbucketed > 0 {
        warn!("{unbucketed} observation(s) have no week and were left out of the timeseries");
    }

    let result = calculate_sequence_aware_timeseries(&observations, gap.as_seconds());
    info!(
        "Built {} weekly row(s) for {} species (gap: {gap})",
        result.timeseries.len(),
        result.all_species.len()
    );

    render(mode, ResultType::Timeseries, Some(gap), &result, |out| {
        human::write_timeseries(out, &result)
    })
}

fn run_heatmap(args: &GroupingArgs, config: &Config, mode: OutputMode) -> Result<()> {
    let gap = resolve_gap(args, config);
    let observations: Vec<HeatmapObservation> = load_rows(args)?
        .iter()
        .map(ObservationRow::to_heatmap_observation)
        .collect();

    let unlocated = observations.iter().filter(|o| o.dimension.is_none()).count();
    if unlocated > 0 {
        warn!("{unlocated} observation(s) have no coordinates and were left out of the heatmap");
    }

    let heatmap = calculate_sequence_aware_heatmap(&observations, gap.as_seconds());
    info!("Mapped {} species (gap: {gap})", heatmap.len());

    render(mode, ResultType::Heatmap, Some(gap), &heatmap, |out| {
        human::write_heatmap(out, &heatmap)
    })
}

fn run_activity(args: &ActivityArgs, config: &Config, mode: OutputMode) -> Result<()> {
    let gap = resolve_gap(&args.grouping, config);
    let observations: Vec<ActivityObservation> = load_rows(&args.grouping)?
        .iter()
        .map(ObservationRow::to_activity_observation)
        .collect();

    let species = resolve_activity_species(args, config, &observations)?;
    debug!("Charting activity for {} species", species.len());

    let buckets = calculate_sequence_aware_daily_activity(&observations, gap.as_seconds(), &species);

    render(mode, ResultType::DailyActivity, Some(gap), &buckets, |out| {
        human::write_daily_activity(out, &buckets, &species)
    })
}

/// Species to chart: `--species`, then `--species-list`, then the
/// configured list file, then every species in the input.
fn resolve_activity_species(
    args: &ActivityArgs,
    config: &Config,
    observations: &[ActivityObservation],
) -> Result<Vec<String>> {
    if !args.species.is_empty() {
        return Ok(args.species.clone());
    }

    if let Some(path) = args
        .species_list
        .as_ref()
        .or(config.defaults.species_list_file.as_ref())
    {
        info!("Loading species list: {}", path.display());
        return read_species_list(path);
    }

    let all: BTreeSet<&str> = observations
        .iter()
        .filter_map(ActivityObservation::species)
        .collect();
    Ok(all.into_iter().map(str::to_string).collect())
}

fn run_video_winner(predictions: &Path, mode: OutputMode) -> Result<()> {
    let predictions = read_frame_predictions(predictions)?;
    let species_frames = collect_species_frames(&predictions);
    debug!(
        "Collected {} prediction(s) across {} species",
        predictions.len(),
        species_frames.len()
    );

    let result = select_video_classification_winner(&species_frames);
    match &result.winner {
        Some(winner) => info!("Video winner: {winner}"),
        None => info!("No species detected in video"),
    }

    render(mode, ResultType::VideoWinner, None, &result, |out| {
        human::write_video_winner(out, &result)
    })
}

#[allow(clippy::print_stdout)]
fn run_config(action: ConfigAction, mode: OutputMode) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            render(mode, ResultType::Config, None, &config, |out| {
                writeln!(out, "{config:#?}")
            })
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
