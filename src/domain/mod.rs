//! Domain layer: entities and statistics
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod dataset;
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod layout;
pub mod level;
pub mod stats;

pub use builder::{LevelBuilder, LevelSpec};
pub use dataset::{Dataset, QuestionSummary, TagStatistics};
pub use diagnostics::{Diagnostics, MissingTagWarning};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use layout::{RingGeometry, RingLayout};
pub use level::{LevelSource, LevelValue, PieLevel, SunburstNode};
pub use stats::{compute_average, five_number_summary, median};
