//! Step observation seam.
//!
//! The attendant's lifecycle steps are no-ops by contract; their only
//! observable effect is a notification to the probe installed at
//! construction time. Production code installs [`NoopProbe`]; tests install
//! [`RecordingProbe`] (or a mock of [`StepProbe`]) to verify invocation
//! order and counts, including the internal closing step that is not
//! publicly callable.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One step of the attendant's fixed drill.
///
/// `A`, `B` and `C` are publicly invocable; `D` only ever appears as the
/// closing step of [`run_fixed_sequence`].
///
/// [`run_fixed_sequence`]: crate::Attendant::run_fixed_sequence
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    A,
    B,
    C,
    D,
}

/// Observer for step invocations.
///
/// Implementations receive one call per step, in invocation order. They must
/// not fail: a probe is a passive listener, not a participant.
#[cfg_attr(test, mockall::automock)]
pub trait StepProbe: Send + Sync {
    /// Called once per step invocation.
    fn record(&self, step: Step);
}

/// Probe that discards every step (production default).
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopProbe;

impl StepProbe for NoopProbe {
    fn record(&self, _step: Step) {}
}

/// In-memory step log for tests/dev.
///
/// - No IO / no async
/// - Preserves invocation order
/// - Shared via `Arc` between the attendant and the asserting test
#[derive(Debug, Default)]
pub struct RecordingProbe {
    steps: Mutex<Vec<Step>>,
}

impl RecordingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the log so far, in invocation order.
    pub fn snapshot(&self) -> Vec<Step> {
        self.steps.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// How many times `step` has been recorded.
    pub fn count_of(&self, step: Step) -> usize {
        self.steps
            .lock()
            .map(|log| log.iter().filter(|s| **s == step).count())
            .unwrap_or(0)
    }

    /// Drain the log, returning everything recorded so far.
    pub fn take(&self) -> Vec<Step> {
        self.steps
            .lock()
            .map(|mut log| std::mem::take(&mut *log))
            .unwrap_or_default()
    }
}

impl StepProbe for RecordingProbe {
    fn record(&self, step: Step) {
        // If the lock is poisoned we stop recording rather than panic;
        // a probe must never take the attendant down with it.
        if let Ok(mut log) = self.steps.lock() {
            log.push(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_probe_preserves_order() {
        let probe = RecordingProbe::new();
        probe.record(Step::C);
        probe.record(Step::A);
        probe.record(Step::C);

        assert_eq!(probe.snapshot(), vec![Step::C, Step::A, Step::C]);
        assert_eq!(probe.count_of(Step::C), 2);
        assert_eq!(probe.count_of(Step::A), 1);
        assert_eq!(probe.count_of(Step::D), 0);
    }

    #[test]
    fn take_drains_the_log() {
        let probe = RecordingProbe::new();
        probe.record(Step::B);

        assert_eq!(probe.take(), vec![Step::B]);
        assert_eq!(probe.snapshot(), Vec::new());
        assert_eq!(probe.take(), Vec::new());
    }

    #[test]
    fn snapshot_does_not_consume_the_log() {
        let probe = RecordingProbe::new();
        probe.record(Step::A);

        assert_eq!(probe.snapshot(), probe.snapshot());
    }

    #[test]
    fn steps_serialize_as_lowercase_letters() {
        assert_eq!(serde_json::to_string(&Step::A).unwrap(), r#""a""#);
        assert_eq!(serde_json::to_string(&Step::D).unwrap(), r#""d""#);

        let step: Step = serde_json::from_str(r#""b""#).unwrap();
        assert_eq!(step, Step::B);
    }
}
