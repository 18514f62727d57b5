//! Harness for exercising attendants through their seams.
//!
//! This crate carries the fixtures and consumer-side flows the integration
//! suites drive: wiring helpers that pair an attendant with an inspectable
//! collaborator, and small desk routines written against the seam traits so
//! scripted doubles can stand in for the real entity.

use std::sync::Arc;

pub use echodesk_attendant::{
    Attendant, AttendantFactory, BossBoard, BossDirectory, DeskFactory, FeedbackError,
    FeedbackResult, FeedbackSource, NameStamper, NameTag, NoopProbe, RecordingProbe, Step,
    StepProbe,
};

/// One-time logging setup for test binaries. Safe to call repeatedly.
pub fn init_test_logging() {
    echodesk_observability::init_for_tests();
}

/// Attendant wired to a fresh recording probe and a private board.
///
/// Returns the probe alongside so the caller can assert on the step log.
pub fn probed_attendant(name: &str) -> (Attendant, Arc<RecordingProbe>) {
    let probe = Arc::new(RecordingProbe::new());
    let attendant =
        Attendant::with_collaborators(name, Arc::new(BossBoard::new()), probe.clone());
    (attendant, probe)
}

/// Attendant wired to a private board and a silent probe.
///
/// Returns the board alongside so the caller can inspect or share it.
pub fn boarded_attendant(name: &str) -> (Attendant, Arc<BossBoard>) {
    let board = Arc::new(BossBoard::new());
    let attendant = Attendant::with_collaborators(name, board.clone(), Arc::new(NoopProbe));
    (attendant, board)
}

/// Mint one attendant per name through the given factory.
pub fn staffed_desk(factory: &dyn AttendantFactory, names: &[&str]) -> Vec<Attendant> {
    names.iter().map(|name| factory.make_attendant(name)).collect()
}

/// Ask a source for feedback, swallowing the blocked case.
///
/// A blocked source yields `None`; the miss is logged at debug level.
pub fn collect_feedback(source: &dyn FeedbackSource, need_upper_case: bool) -> Option<String> {
    match source.produce_feedback(need_upper_case) {
        Ok(feedback) => Some(feedback),
        Err(FeedbackError::EmptyInput) => {
            tracing::debug!("feedback request blocked, nothing pending");
            None
        }
    }
}

/// Stamp every tag in the batch with the given stamper.
pub fn stamp_all(stamper: &dyn NameStamper, tags: &mut [NameTag]) {
    for tag in tags {
        stamper.apply_name_to(tag);
    }
}

/// Run-length encode a step log.
///
/// Consecutive repeats collapse into one `(step, count)` group, so an exact
/// log can be compared against a grouped contract.
pub fn grouped_counts(steps: &[Step]) -> Vec<(Step, usize)> {
    let mut groups: Vec<(Step, usize)> = Vec::new();
    for step in steps {
        match groups.last_mut() {
            Some((current, count)) if *current == *step => *count += 1,
            _ => groups.push((*step, 1)),
        }
    }
    groups
}
