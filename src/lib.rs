//! Retention-time ordered peak lists for a single chromatography-mass
//! spectrometry run.
//!
//! ```
//! use std::sync::Arc;
//! use peak_experiment::{Experiment, Peak, RetentionTime};
//!
//! let peaks = vec![Arc::new(Peak::new(12.0)), Arc::new(Peak::new(45.5))];
//! let mut expr = Experiment::new("EXP1", peaks).unwrap();
//! expr.add_peak(Arc::new(Peak::new(30.0))).unwrap();
//!
//! let rts: Vec<f64> = expr.iter().map(|p| p.rt()).collect();
//! assert_eq!(rts, vec![12.0, 30.0, 45.5]);
//! ```

pub mod data;
pub mod error;

pub use data::experiment::Experiment;
pub use data::filter::{RtRange, parse_time_str, select_peaks_by_rt};
pub use data::model::{Peak, RetentionTime};
pub use error::{ExperimentError, Result};
