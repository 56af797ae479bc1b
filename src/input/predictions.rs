//! Frame prediction CSV parsing.

use std::path::Path;

use crate::Error;
use crate::video::FramePrediction;

/// Parse per-frame video predictions.
///
/// Expects columns `frame`, `scientificName` and `score`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a column is missing, or a
/// score is outside 0.0-1.0.
pub fn read_frame_predictions(path: &Path) -> Result<Vec<FramePrediction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::InputOpen {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut predictions = Vec::new();

    for (line_num, result) in reader.deserialize::<FramePrediction>().enumerate() {
        let prediction = result.map_err(|e| Error::InvalidInput {
            path: path.to_path_buf(),
            message: format!("line {}: {e}", line_num + 2),
        })?;

        if !(0.0..=1.0).contains(&prediction.score) {
            return Err(Error::InvalidInput {
                path: path.to_path_buf(),
                message: format!(
                    "line {}: score must be between 0.0 and 1.0, got {}",
                    line_num + 2,
                    prediction.score
                ),
            });
        }

        predictions.push(prediction);
    }

    Ok(predictions)
}
