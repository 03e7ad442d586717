//! fourlife-core: life-cycle trajectory analysis for Web4 simulation runs
//!
//! This crate provides the analysis layer behind the 4-Life timelines:
//! - Records: fixture parsing and validation into `LifeRecord` values
//! - Events: transition detection over trust/ATP trajectories
//! - Scoring: the illustrative Web4 score formulas (coherence, salience,
//!   confabulation risk)
//!
//! All operations are pure and synchronous: fixture JSON goes in, records
//! and classified events come out. Malformed fixture content is skipped,
//! never raised — the consuming timeline must not crash on imperfect data.

pub mod constants;
pub mod errors;
pub mod events;
pub mod records;
pub mod scoring;

// Re-exports for convenience
pub use errors::FixtureError;
pub use events::{
    detect_events, DetectorConfig, EventDetector, EventKind, LifeEvent, Severity,
};
pub use records::{map_lives, parse_lives, LifeRecord, RawLifeRecord};
pub use scoring::{confabulation_risk, salience, t3_coherence, RiskBreakdown};
