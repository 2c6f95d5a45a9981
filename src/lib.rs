//! surveypie: hierarchical survey aggregation
//!
//! Answers tagged by question and respondent group are attached to the leaves
//! of a level tree. Every level carries the grand mean of its subtree, and the
//! chart services project levels and datasets into radar, boxplot, sunburst and
//! ring series.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
