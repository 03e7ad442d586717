//! Scoring module - illustrative Web4 score formulas
//!
//! These are the calculators the 4-Life pages render: small, pure, and
//! display-grade. They carry no state and no error paths; inputs are
//! clamped rather than validated.

mod formula;

pub use formula::{confabulation_risk, risk_breakdown, salience, t3_coherence, RiskBreakdown};
