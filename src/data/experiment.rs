use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ExperimentError, Result};

use super::filter::{RtRange, select_peaks_by_rt};
use super::model::RetentionTime;
use super::validate::{check_code, check_peak_list, check_rt, is_rt_ordered};

// ---------------------------------------------------------------------------
// Experiment – one analytical run as a retention-time ordered peak list
// ---------------------------------------------------------------------------

/// The peaks detected in one run, identified by an experiment code.
///
/// Peaks are shared (`Arc`) with whoever produced them; the experiment only
/// owns the sequence. The sequence is kept in non-decreasing retention time
/// by every mutating method, provided it started out that way. Construction
/// does not reorder the caller's list, see [`Experiment::new`].
///
/// `P` may be unsized, so `Experiment<dyn RetentionTime>` holds peaks of
/// mixed concrete types.
#[derive(Debug, Serialize)]
pub struct Experiment<P: ?Sized> {
    code: String,
    peaks: Vec<Arc<P>>,
}

impl<P: ?Sized> Clone for Experiment<P> {
    fn clone(&self) -> Self {
        Experiment {
            code: self.code.clone(),
            peaks: self.peaks.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RawExperiment<P> {
    code: String,
    peaks: Vec<Arc<P>>,
}

/// Deserialized experiments go through [`Experiment::new`] and its checks.
impl<'de, P> Deserialize<'de> for Experiment<P>
where
    P: RetentionTime + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawExperiment::<P>::deserialize(deserializer)?;
        Experiment::new(raw.code, raw.peaks).map_err(serde::de::Error::custom)
    }
}

impl<P: RetentionTime + ?Sized> Experiment<P> {
    /// Create an experiment from a code and an already time-ordered peak list.
    ///
    /// Fails with [`ExperimentError::Configuration`] when the code is blank or
    /// a peak has a non-finite retention time. The list is taken as given: an
    /// unordered list is logged as a warning but not sorted, so later
    /// [`add_peak`](Self::add_peak) placement is only meaningful after
    /// [`sort_by_rt`](Self::sort_by_rt).
    pub fn new(code: impl Into<String>, peaks: Vec<Arc<P>>) -> Result<Self> {
        let code = code.into();
        check_code(&code)?;
        check_peak_list(&peaks)?;

        if !is_rt_ordered(&peaks) {
            log::warn!("experiment {code}: peak list is not in retention time order");
        }
        log::debug!("experiment {code}: created with {} peaks", peaks.len());

        Ok(Experiment { code, peaks })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Read-only view of the current peak sequence.
    pub fn peaks(&self) -> &[Arc<P>] {
        &self.peaks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<P>> {
        self.peaks.iter()
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Retention times of the first and last peak, if any.
    pub fn rt_bounds(&self) -> Option<(f64, f64)> {
        match (self.peaks.first(), self.peaks.last()) {
            (Some(first), Some(last)) => Some((first.rt(), last.rt())),
            _ => None,
        }
    }

    pub fn is_rt_ordered(&self) -> bool {
        is_rt_ordered(&self.peaks)
    }

    /// Stable sort by retention time; equal times keep their relative order.
    pub fn sort_by_rt(&mut self) {
        self.peaks.sort_by(|a, b| a.rt().total_cmp(&b.rt()));
    }

    /// Remove the peak at `index`; later peaks move up by one.
    ///
    /// The sequence is left untouched when `index` is out of range.
    pub fn drop_peak(&mut self, index: usize) -> Result<()> {
        let len = self.peaks.len();
        if index >= len {
            return Err(ExperimentError::IndexOutOfBounds { index, len });
        }
        let dropped = self.peaks.remove(index);
        log::debug!(
            "experiment {}: dropped peak {index} at rt {:.3}",
            self.code,
            dropped.rt()
        );
        Ok(())
    }

    /// Keep only peaks with `rt_min <= rt <= rt_max`.
    ///
    /// The peak list is replaced wholesale. Returns the number of peaks kept;
    /// keeping none is not an error.
    pub fn select_rt_range(&mut self, rt_min: f64, rt_max: f64) -> Result<usize> {
        let range = RtRange::new(rt_min, rt_max)?;
        Ok(self.select_rt_window(&range))
    }

    /// Same as [`select_rt_range`](Self::select_rt_range) for a prebuilt window.
    pub fn select_rt_window(&mut self, range: &RtRange) -> usize {
        let selected = select_peaks_by_rt(&self.peaks, range);
        log::debug!(
            "experiment {}: kept {} of {} peaks in {range}",
            self.code,
            selected.len(),
            self.peaks.len()
        );
        self.peaks = selected;
        self.peaks.len()
    }

    /// Insert `peak` where it keeps the list in ascending retention time.
    ///
    /// A peak sharing its retention time with existing peaks goes after them.
    /// Returns the index the peak was inserted at.
    pub fn add_peak(&mut self, peak: Arc<P>) -> Result<usize> {
        let rt = check_rt(peak.rt())?;
        let index = self.peaks.partition_point(|p| p.rt() <= rt);
        self.peaks.insert(index, peak);
        log::debug!("experiment {}: inserted peak at rt {rt:.3} at index {index}", self.code);
        Ok(index)
    }
}

impl<P: ?Sized> fmt::Display for Experiment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} peaks", self.code, self.peaks.len())
    }
}

impl<'a, P: ?Sized> IntoIterator for &'a Experiment<P> {
    type Item = &'a Arc<P>;
    type IntoIter = std::slice::Iter<'a, Arc<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.peaks.iter()
    }
}
