//! Tuning constants for event detection and termination classification.
//!
//! Every threshold the detector compares against lives here so the scan
//! algorithm itself stays free of magic literals.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trust score below which a life enters crisis.
pub const CRISIS_TRUST_THRESHOLD: f64 = 0.3;

/// Trust score at or above which a life counts as recovered.
pub const RECOVERY_TRUST_THRESHOLD: f64 = 0.5;

/// ATP level at or below which a life is exhausted.
pub const ATP_EXHAUSTION_FLOOR: f64 = 0.0;

/// Sentinel termination reason for lives that did not terminate.
pub const NO_TERMINATION_REASON: &str = "none";

/// Termination reasons linked to resource exhaustion (critical tier).
pub const EXHAUSTION_TERMINATION_REASONS: &[&str] = &[
    "resource_exhaustion",
    "atp_depleted",
    "starvation",
];

/// Termination reasons for a voluntary or natural end of life (info tier).
pub const NATURAL_TERMINATION_REASONS: &[&str] = &[
    "completed",
    "natural",
    "voluntary_exit",
    "retirement",
];
