//! Events module - transition detection over life trajectories
//!
//! A linear scan over each life's trust and ATP histories classifies the
//! transitions a timeline wants to annotate: crisis entry, recovery, ATP
//! exhaustion, and termination. Detection is pure and allocation-fresh;
//! callers may invoke it from any number of render contexts.

mod detector;
mod types;

pub use detector::{detect_events, termination_severity, DetectorConfig, EventDetector};
pub use types::*;
