//! Web4 score formulas

use serde::Serialize;

fn clamp01(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// T3 coherence: geometric mean of the three T3 axes.
///
/// ```text
/// coherence = (talent × training × temperament)^(1/3)
/// ```
///
/// Inputs are clamped to [0.0, 1.0]; a zero on any axis zeroes the whole
/// score, which is the point of using a geometric mean here.
pub fn t3_coherence(talent: f64, training: f64, temperament: f64) -> f64 {
    (clamp01(talent) * clamp01(training) * clamp01(temperament)).cbrt()
}

/// Salience: weighted sum of signal strengths, normalized by total weight.
///
/// Ragged inputs pair up to the shorter slice; empty input or zero total
/// weight yields 0. Result is clamped to [0.0, 1.0].
pub fn salience(weights: &[f64], signals: &[f64]) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (weight, signal) in weights.iter().zip(signals.iter()) {
        if weight.is_finite() && signal.is_finite() && *weight > 0.0 {
            weighted += weight * clamp01(*signal);
            total += weight;
        }
    }
    if total > 0.0 {
        clamp01(weighted / total)
    } else {
        0.0
    }
}

/// Confabulation risk heuristic.
///
/// Low coherence is the base driver; salience amplifies it (an agent under
/// pressure to say *something* salient confabulates more), and a depleted
/// ATP budget raises it further. Result is clamped to [0.0, 1.0].
pub fn confabulation_risk(coherence: f64, salience: f64, atp_ratio: f64) -> f64 {
    risk_breakdown(coherence, salience, atp_ratio).risk
}

/// Per-factor view of the confabulation risk, for display.
#[derive(Debug, Clone, Serialize)]
pub struct RiskBreakdown {
    pub incoherence: f64,
    pub salience_amplifier: f64,
    pub starvation_factor: f64,
    pub risk: f64,
}

/// Compute confabulation risk with each factor broken out.
pub fn risk_breakdown(coherence: f64, salience: f64, atp_ratio: f64) -> RiskBreakdown {
    let incoherence = 1.0 - clamp01(coherence);
    let salience_amplifier = 0.5 + 0.5 * clamp01(salience);
    let starvation_factor = 1.0 + 0.5 * (1.0 - clamp01(atp_ratio));
    let risk = clamp01(incoherence * salience_amplifier * starvation_factor);

    RiskBreakdown {
        incoherence,
        salience_amplifier,
        starvation_factor,
        risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coherence_is_geometric_mean() {
        let score = t3_coherence(0.8, 0.8, 0.8);
        assert!((score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_coherence_zero_axis_zeroes_score() {
        assert_eq!(t3_coherence(1.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_salience_normalizes_by_weight() {
        let score = salience(&[2.0, 1.0], &[1.0, 0.0]);
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_salience_empty_is_zero() {
        assert_eq!(salience(&[], &[]), 0.0);
        assert_eq!(salience(&[0.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_risk_bounds() {
        for coherence in [0.0, 0.3, 1.0] {
            for sal in [0.0, 0.5, 1.0] {
                for atp in [0.0, 0.5, 1.0] {
                    let risk = confabulation_risk(coherence, sal, atp);
                    assert!((0.0..=1.0).contains(&risk));
                }
            }
        }
    }

    #[test]
    fn test_risk_rises_as_coherence_falls() {
        let healthy = confabulation_risk(0.9, 0.5, 1.0);
        let shaky = confabulation_risk(0.3, 0.5, 1.0);
        let starved = confabulation_risk(0.3, 0.5, 0.0);
        assert!(shaky > healthy);
        assert!(starved > shaky);
    }
}
