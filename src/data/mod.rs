/// Data layer: peak capability, validation, selection and the experiment container.
///
/// Architecture:
/// ```text
///   peaks from a detector (Arc<P: RetentionTime>)
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  code / peak-list shape checks
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ Experiment  │  Vec<Arc<P>> kept in retention-time order
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  RtRange → order-preserving subsequence
///   └──────────┘
/// ```

pub mod experiment;
pub mod filter;
pub mod model;
pub mod validate;
