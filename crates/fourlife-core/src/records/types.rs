//! Life record types

use serde::{Deserialize, Serialize};

/// One bounded span of an agent's existence within a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeRecord {
    /// Identifier, unique within a simulation run
    pub life_id: String,
    /// Owning agent's LCT; an agent may have many lives
    pub agent_lct: String,
    /// First tick of the life (inclusive)
    pub start_tick: u64,
    /// Tick at which the life ended (exclusive)
    pub end_tick: u64,
    /// Terminal classification ("completed", "terminated", ...)
    pub life_state: String,
    /// Reason code, "none" if the life is not terminal
    pub termination_reason: String,
    /// Trust-score samples, one per tick, chronological order.
    /// Non-finite entries stand in for missing samples.
    pub t3_history: Vec<f64>,
    /// ATP samples, aligned index-for-index with `t3_history`
    pub atp_history: Vec<f64>,
}

impl LifeRecord {
    /// Intended duration in ticks. Histories may be shorter or longer;
    /// the detector never relies on this matching the sample counts.
    pub fn duration(&self) -> u64 {
        self.end_tick.saturating_sub(self.start_tick)
    }

    /// Absolute tick of a local sample index. Saturates rather than wraps
    /// so hostile tick bounds cannot corrupt event ordering.
    pub fn absolute_tick(&self, index: usize) -> u64 {
        self.start_tick.saturating_add(index as u64)
    }
}
