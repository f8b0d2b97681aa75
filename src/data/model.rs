use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RetentionTime – the only capability an experiment needs from a peak
// ---------------------------------------------------------------------------

/// Anything that was detected at a point in chromatographic time.
///
/// The value is in seconds and must be finite for the peak to be storable in
/// an [`Experiment`](super::experiment::Experiment); non-finite values are
/// rejected rather than silently misplaced.
pub trait RetentionTime {
    fn rt(&self) -> f64;
}

impl<T: RetentionTime + ?Sized> RetentionTime for Arc<T> {
    fn rt(&self) -> f64 {
        (**self).rt()
    }
}

// ---------------------------------------------------------------------------
// Peak – a detected signal event
// ---------------------------------------------------------------------------

/// A single detected peak.
///
/// Mass spectra and identifications live with the peak detector; only the
/// fields that travel along with an experiment's peak list are kept here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Retention time in seconds.
    rt: f64,
    /// Integrated peak area, if the detector computed one.
    area: Option<f64>,
    /// Set by downstream alignment when the peak looks like an outlier.
    #[serde(default)]
    outlier: bool,
}

impl Peak {
    pub fn new(rt: f64) -> Self {
        Peak {
            rt,
            area: None,
            outlier: false,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn is_outlier(&self) -> bool {
        self.outlier
    }

    pub fn flag_outlier(&mut self) {
        self.outlier = true;
    }
}

impl RetentionTime for Peak {
    fn rt(&self) -> f64 {
        self.rt
    }
}

impl fmt::Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peak @ {:.3}s", self.rt)?;
        if let Some(area) = self.area {
            write!(f, " (area {area:.1})")?;
        }
        if self.outlier {
            write!(f, " [outlier]")?;
        }
        Ok(())
    }
}
