//! Property tests for the mold accumulator's bound invariants.

use hf_advisor::{MoldModel, MoldRiskState};
use proptest::prelude::*;

fn reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        2 => (-40.0f64..60.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn humidity_reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        2 => (0.0f64..110.0).prop_map(Some),
        1 => Just(None),
    ]
}

proptest! {
    #[test]
    fn index_never_leaves_bounds(steps in prop::collection::vec((reading(), humidity_reading()), 1..300)) {
        let model = MoldModel::default();
        let mut state = MoldRiskState::new();
        for (t, rh) in steps {
            let (next, out) = model.step(state, t, rh);
            prop_assert!(next.index() >= 0.0);
            prop_assert!(next.index() <= model.max_index);
            if let Some(v) = out {
                prop_assert!((0.0..=model.max_index).contains(&v));
            }
            state = next;
        }
    }

    #[test]
    fn each_step_moves_at_most_one_increment(steps in prop::collection::vec((reading(), humidity_reading()), 1..100)) {
        let model = MoldModel::default();
        let mut state = MoldRiskState::new();
        let max_move = model.growth_step.max(model.decay_step) + 1e-12;
        for (t, rh) in steps {
            let (next, _) = model.step(state, t, rh);
            prop_assert!((next.index() - state.index()).abs() <= max_move);
            state = next;
        }
    }

    #[test]
    fn absent_input_is_a_no_op(t in -40.0f64..60.0, rh in 0.0f64..110.0, warmup in 0usize..50) {
        let model = MoldModel::default();
        let mut state = MoldRiskState::new();
        for _ in 0..warmup {
            let (next, _) = model.step(state, Some(t), Some(rh));
            state = next;
        }
        let (after, out) = model.step(state, None, Some(rh));
        prop_assert_eq!(out, None);
        prop_assert_eq!(after.index().to_bits(), state.index().to_bits());
    }
}
