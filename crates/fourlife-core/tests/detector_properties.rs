//! Property tests: invariants that must hold for arbitrary fixture data.

use fourlife_core::{detect_events, LifeRecord};
use proptest::prelude::*;

/// Arbitrary sample values, including the hostile ones the mapping boundary
/// can let through when records are built directly.
fn any_sample() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -10.0f64..10.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn any_life() -> impl Strategy<Value = LifeRecord> {
    (
        0u64..200,
        prop::collection::vec(any_sample(), 0..40),
        prop::collection::vec(any_sample(), 0..40),
        prop_oneof![
            Just("none"),
            Just("resource_exhaustion"),
            Just("voluntary_exit"),
            Just("defection"),
        ],
    )
        .prop_map(|(start_tick, t3, atp, reason)| {
            let duration = t3.len().max(atp.len()) as u64;
            LifeRecord {
                life_id: String::new(),
                agent_lct: "lct:agent".to_string(),
                start_tick,
                end_tick: start_tick + duration,
                life_state: "unknown".to_string(),
                termination_reason: reason.to_string(),
                t3_history: t3,
                atp_history: atp,
            }
        })
}

fn any_lives() -> impl Strategy<Value = Vec<LifeRecord>> {
    prop::collection::vec(any_life(), 0..8).prop_map(|mut lives| {
        for (index, life) in lives.iter_mut().enumerate() {
            life.life_id = format!("life-{index}");
        }
        lives
    })
}

proptest! {
    #[test]
    fn output_is_sorted_by_tick(lives in any_lives()) {
        let events = detect_events(&lives);
        prop_assert!(events.windows(2).all(|w| w[0].tick <= w[1].tick));
    }

    #[test]
    fn detection_is_idempotent(lives in any_lives()) {
        prop_assert_eq!(detect_events(&lives), detect_events(&lives));
    }

    #[test]
    fn hostile_samples_never_panic(lives in any_lives()) {
        // The call completing is the property.
        let _ = detect_events(&lives);
    }

    #[test]
    fn event_ticks_stay_within_life_bounds(lives in any_lives()) {
        let events = detect_events(&lives);
        for event in events {
            let life = lives.iter().find(|l| l.life_id == event.life_id).unwrap();
            prop_assert!(event.tick >= life.start_tick);
            // Sample events sit inside the span; termination sits at end_tick.
            prop_assert!(event.tick <= life.end_tick.max(life.start_tick
                + life.t3_history.len().max(life.atp_history.len()) as u64));
        }
    }
}
