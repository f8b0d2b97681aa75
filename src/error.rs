use thiserror::Error;

/// Everything that can go wrong while building or editing an [`Experiment`].
///
/// [`Experiment`]: crate::data::experiment::Experiment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExperimentError {
    /// A constructor argument does not have the expected shape.
    #[error("invalid experiment configuration: {0}")]
    Configuration(String),

    #[error("peak index {index} out of bounds for experiment with {len} peaks")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A peak reported a retention time that cannot be ordered (NaN or infinite).
    #[error("retention time {rt} is not a finite number")]
    InvalidRetentionTime { rt: f64 },

    #[error("retention time range [{rt_min}, {rt_max}] is not ascending or not finite")]
    InvalidRange { rt_min: f64, rt_max: f64 },

    #[error("cannot parse time string '{0}' (expected e.g. '630', '630s' or '10.5m')")]
    InvalidTimeString(String),
}

pub type Result<T> = std::result::Result<T, ExperimentError>;
