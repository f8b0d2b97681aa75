//! Shape checks applied to experiment constructor arguments.

use crate::error::{ExperimentError, Result};

use super::model::RetentionTime;

/// An experiment code must carry at least one non-whitespace character.
pub fn check_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(ExperimentError::Configuration(
            "experiment code must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Every peak must report a finite retention time, otherwise ordering is meaningless.
pub fn check_peak_list<P: RetentionTime>(peaks: &[P]) -> Result<()> {
    for (i, peak) in peaks.iter().enumerate() {
        let rt = peak.rt();
        if !rt.is_finite() {
            return Err(ExperimentError::Configuration(format!(
                "peak {i} has non-finite retention time {rt}"
            )));
        }
    }
    Ok(())
}

/// Accessor-level check used when a single peak enters an existing list.
pub fn check_rt(rt: f64) -> Result<f64> {
    if rt.is_finite() {
        Ok(rt)
    } else {
        Err(ExperimentError::InvalidRetentionTime { rt })
    }
}

/// Whether `peaks` are in non-decreasing retention time.
pub fn is_rt_ordered<P: RetentionTime>(peaks: &[P]) -> bool {
    peaks.windows(2).all(|w| w[0].rt() <= w[1].rt())
}
