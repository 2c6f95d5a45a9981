//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod charts;
mod survey;

pub use charts::{
    BoxplotChart, BoxplotSeries, ChartService, CombinedChart, DetailsChart, GradientSlice,
    RadarChart, RadarIndicator, RadarSeries, RingKind, RingSeries,
};
pub use survey::SurveyService;
