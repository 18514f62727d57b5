//! Step drill ordering through the probe seam.
//!
//! The drill's order and multiplicities are contractual, including the
//! closing step that only the drill itself can reach. Ordering is checked
//! two ways: grouped expectations on a scripted probe and an exact log from
//! a recording one.

use std::sync::Arc;

use echodesk_testkit::{
    Attendant, BossBoard, NoopProbe, Step, StepProbe, grouped_counts, probed_attendant,
};
use mockall::{Sequence, predicate};

mockall::mock! {
    pub Probe {}

    impl StepProbe for Probe {
        fn record(&self, step: Step);
    }
}

/// The contracted drill, step by step.
const DRILL: [Step; 8] = [
    Step::A,
    Step::A,
    Step::B,
    Step::C,
    Step::C,
    Step::B,
    Step::C,
    Step::D,
];

#[test]
fn drill_reports_steps_in_grouped_order() {
    let mut probe = MockProbe::new();
    let mut seq = Sequence::new();
    for (step, count) in [
        (Step::A, 2),
        (Step::B, 1),
        (Step::C, 2),
        (Step::B, 1),
        (Step::C, 1),
        (Step::D, 1),
    ] {
        probe
            .expect_record()
            .with(predicate::eq(step))
            .times(count)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let attendant =
        Attendant::with_collaborators("noir.zsk", Arc::new(BossBoard::new()), Arc::new(probe));

    attendant.run_fixed_sequence();
}

#[test]
fn drill_follows_the_exact_contract_order() {
    let (attendant, probe) = probed_attendant("noir.zsk");

    attendant.run_fixed_sequence();

    assert_eq!(probe.snapshot(), DRILL.to_vec());
}

#[test]
fn drill_grouping_matches_the_contract() {
    let (attendant, probe) = probed_attendant("noir.zsk");

    attendant.run_fixed_sequence();

    assert_eq!(
        grouped_counts(&probe.snapshot()),
        vec![
            (Step::A, 2),
            (Step::B, 1),
            (Step::C, 2),
            (Step::B, 1),
            (Step::C, 1),
            (Step::D, 1),
        ]
    );
}

#[test]
fn closing_step_fires_once_per_drill_and_never_alone() {
    let (attendant, probe) = probed_attendant("noir.zsk");

    attendant.step_a();
    attendant.step_b();
    attendant.step_c();
    assert_eq!(probe.count_of(Step::D), 0);

    attendant.run_fixed_sequence();
    assert_eq!(probe.count_of(Step::D), 1);

    attendant.run_fixed_sequence();
    assert_eq!(probe.count_of(Step::D), 2);
}

#[test]
fn drill_is_reproducible() {
    let (attendant, probe) = probed_attendant("noir.zsk");

    attendant.run_fixed_sequence();
    assert_eq!(probe.take(), DRILL.to_vec());

    attendant.run_fixed_sequence();
    assert_eq!(probe.take(), DRILL.to_vec());
}

#[test]
fn drill_runs_against_a_silent_probe() {
    let attendant =
        Attendant::with_collaborators("noir.zsk", Arc::new(BossBoard::new()), Arc::new(NoopProbe));

    attendant.run_fixed_sequence();
}
