use fitscore_domain::{HiringDna, Stage, StageWeights, Wizard, REQUIRED_TRAITS, TOTAL_STEPS};
use proptest::prelude::*;
use proptest::test_runner::Config;

#[derive(Debug, Clone)]
enum StageOp {
    Toggle(Stage, bool),
    Edit(Stage, f64),
}

fn stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::Screening),
        Just(Stage::Virtual),
        Just(Stage::InPerson)
    ]
}

fn stage_op() -> impl Strategy<Value = StageOp> {
    prop_oneof![
        (stage(), any::<bool>()).prop_map(|(s, on)| StageOp::Toggle(s, on)),
        (stage(), 1_u32..=18).prop_map(|(s, n)| StageOp::Edit(s, n as f64 * 5.0)),
    ]
}

fn start_weights() -> impl Strategy<Value = StageWeights> {
    prop_oneof![
        Just(StageWeights::from_parts([(true, 50.0), (true, 50.0), (false, 0.0)])),
        Just(StageWeights::new()),
        Just(StageWeights::from_parts([(true, 100.0), (false, 0.0), (false, 0.0)])),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn wizard_index_stays_in_bounds(moves in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut wizard = Wizard::new();
        for forward in moves {
            wizard = if forward { wizard.next() } else { wizard.back() };
            prop_assert!(wizard.index() <= TOTAL_STEPS);
        }
    }

    #[test]
    fn stage_ops_preserve_active_total(
        start in start_weights(),
        ops in proptest::collection::vec(stage_op(), 1..32)
    ) {
        let mut weights = start;
        for op in ops {
            let before = weights.total();
            let result = match op {
                StageOp::Toggle(s, on) => weights.set_active(s, on),
                StageOp::Edit(s, value) => weights.set_weight(s, value),
            };
            if let Ok(next) = result {
                weights = next;
            }
            prop_assert!((weights.total() - before).abs() < 1e-6);
            prop_assert!(weights.active_count() >= 1);
            for s in Stage::ALL {
                if !weights.is_active(s) {
                    prop_assert_eq!(weights.weight(s), 0.0);
                }
            }
        }
    }

    #[test]
    fn trait_selection_never_exceeds_limit(
        mask in proptest::collection::vec(any::<bool>(), 8)
            .prop_filter("at most five selected", |m| m.iter().filter(|b| **b).count() <= REQUIRED_TRAITS),
        toggles in proptest::collection::vec(1_u32..=8, 0..64)
    ) {
        let mut dna = HiringDna::new();
        for (t, selected) in dna.traits.iter_mut().zip(mask) {
            t.selected = selected;
        }
        for id in toggles {
            let before = dna.selected_count();
            if let Ok(next) = dna.toggle(id) {
                prop_assert!(before < REQUIRED_TRAITS);
                prop_assert_eq!(next.selected_count(), before + 1);
                dna = next;
            }
            prop_assert!(dna.selected_count() <= REQUIRED_TRAITS);
        }
    }
}

#[test]
fn full_trait_set_refuses_every_new_selection() {
    let dna = HiringDna::new();
    assert_eq!(dna.selected_count(), REQUIRED_TRAITS);
    for t in dna.traits.iter().filter(|t| !t.selected) {
        assert!(dna.toggle(t.id).is_err());
    }
}
