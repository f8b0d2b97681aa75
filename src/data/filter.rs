use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ExperimentError, Result};

use super::model::RetentionTime;

// ---------------------------------------------------------------------------
// Time strings
// ---------------------------------------------------------------------------

/// Parse a time given as `"630"`, `"630s"` or `"10.5m"` into seconds.
///
/// The unit suffix is case-insensitive.
pub fn parse_time_str(s: &str) -> Result<f64> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();
    let (number, scale) = if let Some(n) = lower.strip_suffix('m') {
        (n, 60.0)
    } else if let Some(n) = lower.strip_suffix('s') {
        (n, 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let value = number
        .trim()
        .parse::<f64>()
        .map_err(|_| ExperimentError::InvalidTimeString(s.to_string()))?;
    if !value.is_finite() {
        return Err(ExperimentError::InvalidTimeString(s.to_string()));
    }
    Ok(value * scale)
}

// ---------------------------------------------------------------------------
// RtRange – a validated retention-time window
// ---------------------------------------------------------------------------

/// Closed retention-time window `[rt_min, rt_max]`, in seconds.
///
/// Deserialized windows go through the same checks as [`RtRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRtRange")]
pub struct RtRange {
    rt_min: f64,
    rt_max: f64,
}

#[derive(Deserialize)]
struct RawRtRange {
    rt_min: f64,
    rt_max: f64,
}

impl TryFrom<RawRtRange> for RtRange {
    type Error = ExperimentError;

    fn try_from(raw: RawRtRange) -> Result<Self> {
        RtRange::new(raw.rt_min, raw.rt_max)
    }
}

impl RtRange {
    /// Build a window from bounds in seconds; bounds must be finite and ascending.
    pub fn new(rt_min: f64, rt_max: f64) -> Result<Self> {
        if !rt_min.is_finite() || !rt_max.is_finite() || rt_min > rt_max {
            return Err(ExperimentError::InvalidRange { rt_min, rt_max });
        }
        Ok(RtRange { rt_min, rt_max })
    }

    /// Build a window from time strings, e.g. `RtRange::parse("10m", "12.5m")`.
    pub fn parse(rt_min: &str, rt_max: &str) -> Result<Self> {
        Self::new(parse_time_str(rt_min)?, parse_time_str(rt_max)?)
    }

    pub fn rt_min(&self) -> f64 {
        self.rt_min
    }

    pub fn rt_max(&self) -> f64 {
        self.rt_max
    }

    pub fn contains(&self, rt: f64) -> bool {
        self.rt_min <= rt && rt <= self.rt_max
    }
}

impl fmt::Display for RtRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}s, {:.3}s]", self.rt_min, self.rt_max)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Return the peaks whose retention time falls inside `range`, keeping their order.
///
/// An empty input, or a window that matches nothing, yields an empty list.
pub fn select_peaks_by_rt<P: RetentionTime + ?Sized>(peaks: &[Arc<P>], range: &RtRange) -> Vec<Arc<P>> {
    peaks
        .iter()
        .filter(|peak| range.contains(peak.rt()))
        .cloned()
        .collect()
}
