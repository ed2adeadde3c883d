//! Corruption planning, execution, and cell-level tracking.

mod actions;
mod engine;
mod plan;
mod tracker;

pub use engine::CorruptionEngine;
pub use plan::{CorruptionPlan, PlanEntry};
pub use tracker::{CodeCounts, CorruptionCode, Tracker, TrackerSummary};
