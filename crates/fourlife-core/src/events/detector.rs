//! Event detector - threshold scan over trust and ATP trajectories
//!
//! One pass per life, one comparison per sample. Crossings are detected
//! against the single previous sample of the same stream; there is no
//! hysteresis, so oscillation around a threshold legitimately produces
//! repeated crisis/recovery pairs. Non-finite samples are treated as "no
//! sample here" and do not update the previous-sample memory, which keeps
//! ragged fixture data harmless.

use super::types::{EventKind, LifeEvent, Severity};
use crate::constants::{
    ATP_EXHAUSTION_FLOOR, CRISIS_TRUST_THRESHOLD, EXHAUSTION_TERMINATION_REASONS,
    NATURAL_TERMINATION_REASONS, NO_TERMINATION_REASON, RECOVERY_TRUST_THRESHOLD,
};
use crate::records::LifeRecord;

/// Detection thresholds. Defaults come from `constants`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Trust below this enters crisis
    pub crisis_threshold: f64,
    /// Trust at or above this counts as recovered
    pub recovery_threshold: f64,
    /// ATP at or below this is exhaustion
    pub exhaustion_floor: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            crisis_threshold: CRISIS_TRUST_THRESHOLD,
            recovery_threshold: RECOVERY_TRUST_THRESHOLD,
            exhaustion_floor: ATP_EXHAUSTION_FLOOR,
        }
    }
}

/// Scans life records and emits classified transition events.
pub struct EventDetector {
    config: DetectorConfig,
}

impl EventDetector {
    /// Create a detector with the default thresholds.
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    /// Create a detector with custom thresholds.
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// The active thresholds.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect transition events across a set of lives.
    ///
    /// Pure: inputs are read-only and the output is freshly allocated.
    /// Events come back in non-decreasing absolute-tick order, ties broken
    /// by input life order. Malformed lives contribute nothing and never
    /// abort processing of the rest.
    pub fn detect(&self, lives: &[LifeRecord]) -> Vec<LifeEvent> {
        let mut events = Vec::new();
        for life in lives {
            self.scan_life(life, &mut events);
        }
        // Stable sort: pushes happened in life order, so equal ticks keep it.
        events.sort_by_key(|event| event.tick);
        events
    }

    /// Scan one life's trajectories, appending events in local tick order.
    fn scan_life(&self, life: &LifeRecord, out: &mut Vec<LifeEvent>) {
        let samples = life.t3_history.len().max(life.atp_history.len());

        let mut prev_t3: Option<f64> = None;
        let mut exhausted = false;

        for index in 0..samples {
            let tick = life.absolute_tick(index);

            // ATP first: exhaustion at a tick suppresses a same-tick recovery.
            if !exhausted {
                if let Some(atp) = finite_sample(&life.atp_history, index) {
                    if atp <= self.config.exhaustion_floor {
                        exhausted = true;
                        out.push(LifeEvent {
                            tick,
                            life_id: life.life_id.clone(),
                            kind: EventKind::AtpExhaustion,
                            severity: Severity::Critical,
                            label: "ATP exhausted".to_string(),
                        });
                    }
                }
            }

            if let Some(t3) = finite_sample(&life.t3_history, index) {
                if let Some(prev) = prev_t3 {
                    if prev >= self.config.crisis_threshold && t3 < self.config.crisis_threshold {
                        out.push(LifeEvent {
                            tick,
                            life_id: life.life_id.clone(),
                            kind: EventKind::CrisisEntry,
                            severity: Severity::Notable,
                            label: format!(
                                "trust fell below {:.2}",
                                self.config.crisis_threshold
                            ),
                        });
                    }
                    // A life cannot recover once its ATP ran out.
                    if !exhausted
                        && prev < self.config.recovery_threshold
                        && t3 >= self.config.recovery_threshold
                    {
                        out.push(LifeEvent {
                            tick,
                            life_id: life.life_id.clone(),
                            kind: EventKind::Recovery,
                            severity: Severity::Info,
                            label: format!(
                                "trust recovered to {:.2}",
                                self.config.recovery_threshold
                            ),
                        });
                    }
                }
                prev_t3 = Some(t3);
            }
        }

        if life.termination_reason != NO_TERMINATION_REASON
            && !life.termination_reason.is_empty()
        {
            out.push(LifeEvent {
                tick: life.end_tick,
                life_id: life.life_id.clone(),
                kind: EventKind::Termination,
                severity: termination_severity(&life.termination_reason),
                label: format!("life ended: {}", life.termination_reason),
            });
        }
    }
}

impl Default for EventDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect events with the default thresholds.
pub fn detect_events(lives: &[LifeRecord]) -> Vec<LifeEvent> {
    EventDetector::new().detect(lives)
}

/// Map a termination reason onto a severity tier.
///
/// Exhaustion-linked reasons are critical, voluntary or natural ends are
/// informational, everything else lands in the middle tier.
pub fn termination_severity(reason: &str) -> Severity {
    if EXHAUSTION_TERMINATION_REASONS.contains(&reason) {
        Severity::Critical
    } else if NATURAL_TERMINATION_REASONS.contains(&reason) {
        Severity::Info
    } else {
        Severity::Notable
    }
}

/// Fetch a sample, treating out-of-range and non-finite values as absent.
fn finite_sample(history: &[f64], index: usize) -> Option<f64> {
    history.get(index).copied().filter(|value| value.is_finite())
}
