//! Error types for the fixture parsing boundary.
//!
//! Detection itself never errors: per-record damage is skipped at the
//! mapping boundary. Only a caller-side contract violation (fixture text
//! that is not an array of records at all) surfaces as `FixtureError`.

/// Fixture parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid fixture JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("fixture root must be an array of life records, got {found}")]
    NotAnArray { found: String },
}
