//! Event types

use serde::{Deserialize, Serialize};

/// Classification of a detected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Trust crossed below the crisis threshold
    CrisisEntry,
    /// Trust crossed back at or above the recovery threshold
    Recovery,
    /// ATP reached the exhaustion floor; terminal for the life
    AtpExhaustion,
    /// The life's own termination reason, anchored at `end_tick`
    Termination,
}

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Notable,
    Critical,
}

/// A detected, classified transition point within a life's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Absolute tick (owning life's `start_tick` + local sample index)
    pub tick: u64,
    /// Owning life
    pub life_id: String,
    /// Transition classification
    pub kind: EventKind,
    /// Severity tier
    pub severity: Severity,
    /// Human-readable label, display-only
    pub label: String,
}
