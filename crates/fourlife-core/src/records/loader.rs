//! Fixture loader - tolerant mapping from raw fixture JSON to `LifeRecord`
//!
//! Fixture files are illustrative data exported from simulation runs, not a
//! schema-checked feed. The mapping here is deliberately forgiving: missing
//! ids are synthesized, absent tick bounds are reconstructed by accumulating
//! prior lives' durations per agent, and null or non-finite samples become
//! NaN placeholders so that sample indices keep their tick alignment. A
//! damaged record is skipped with a warning, never an error.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::LifeRecord;
use crate::constants::NO_TERMINATION_REASON;
use crate::errors::FixtureError;

/// Raw serde mirror of one fixture record. Every field is optional so a
/// partially exported record still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLifeRecord {
    pub life_id: Option<String>,
    pub agent_lct: Option<String>,
    pub start_tick: Option<u64>,
    pub end_tick: Option<u64>,
    pub life_state: Option<String>,
    pub termination_reason: Option<String>,
    /// Histories accept nulls so one bad sample cannot poison a life.
    pub t3_history: Vec<Option<f64>>,
    pub atp_history: Vec<Option<f64>>,
}

/// Parse fixture text into validated life records.
///
/// The only fallible step: text that is not a JSON array of records at all
/// is a contract violation by the caller. Per-record damage is mapped
/// around, not raised.
pub fn parse_lives(json: &str) -> Result<Vec<LifeRecord>, FixtureError> {
    let value: Value = serde_json::from_str(json).map_err(|e| FixtureError::InvalidJson {
        reason: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(FixtureError::NotAnArray {
                found: json_type_name(&other).to_string(),
            })
        }
    };

    let raw: Vec<RawLifeRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed life record");
                None
            }
        })
        .collect();

    Ok(map_lives(raw))
}

/// Map raw fixture records into `LifeRecord` values.
///
/// Tick bounds missing from the source are synthesized by accumulating the
/// durations of that agent's prior lives (duration = longest history). A
/// record that carries its own bounds resets the agent's running offset to
/// its `end_tick`.
pub fn map_lives(raw: Vec<RawLifeRecord>) -> Vec<LifeRecord> {
    let mut offsets: HashMap<String, u64> = HashMap::new();
    let mut lives = Vec::with_capacity(raw.len());

    for (index, record) in raw.into_iter().enumerate() {
        let life_id = record
            .life_id
            .unwrap_or_else(|| format!("life-{index}"));
        let agent_lct = record
            .agent_lct
            .unwrap_or_else(|| "lct:unknown".to_string());

        let t3_history = sanitize_history(&life_id, "t3", record.t3_history);
        let atp_history = sanitize_history(&life_id, "atp", record.atp_history);
        let duration = t3_history.len().max(atp_history.len()) as u64;

        let offset = offsets.entry(agent_lct.clone()).or_insert(0);
        let start_tick = record.start_tick.unwrap_or(*offset);
        let end_tick = match record.end_tick {
            Some(end) if end > start_tick => end,
            Some(end) => {
                warn!(life_id = %life_id, start_tick, end_tick = end,
                    "end_tick not after start_tick, extending from history length");
                start_tick.saturating_add(duration)
            }
            None => {
                debug!(life_id = %life_id, "tick bounds missing, synthesizing from prior lives");
                start_tick.saturating_add(duration)
            }
        };
        *offset = end_tick;

        lives.push(LifeRecord {
            life_id,
            agent_lct,
            start_tick,
            end_tick,
            life_state: record.life_state.unwrap_or_else(|| "unknown".to_string()),
            termination_reason: record
                .termination_reason
                .unwrap_or_else(|| NO_TERMINATION_REASON.to_string()),
            t3_history,
            atp_history,
        });
    }

    lives
}

/// Replace missing samples with NaN placeholders so later samples keep
/// their tick alignment. The detector skips non-finite values.
fn sanitize_history(life_id: &str, stream: &str, samples: Vec<Option<f64>>) -> Vec<f64> {
    let mut missing = 0usize;
    let history: Vec<f64> = samples
        .into_iter()
        .map(|sample| match sample {
            Some(value) if value.is_finite() => value,
            _ => {
                missing += 1;
                f64::NAN
            }
        })
        .collect();

    if missing > 0 {
        warn!(life_id = %life_id, stream, missing, "history contains missing samples");
    }

    history
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
