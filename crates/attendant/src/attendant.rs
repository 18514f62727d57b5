//! The desk attendant entity.
//!
//! An [`Attendant`] wears a name, relays the desk-wide boss name through
//! its [`BossDirectory`], and turns previously captured input into feedback
//! on request. All behavior is pure and synchronous; the only collaborators
//! are the directory and the step probe injected at construction time.

use std::fmt;
use std::sync::Arc;

use crate::boss::{BossBoard, BossDirectory};
use crate::error::{FeedbackError, FeedbackResult};
use crate::probe::{NoopProbe, Step, StepProbe};
use crate::tag::NameTag;

/// Anything that can answer a feedback request.
///
/// [`Attendant`] is the production implementation; consumers that only need
/// feedback should depend on this trait so tests can script the answers.
pub trait FeedbackSource: Send + Sync {
    /// Feedback for the pending input, uppercased on demand.
    fn produce_feedback(&self, need_upper_case: bool) -> FeedbackResult<String>;
}

/// Anything that can stamp its own name onto a [`NameTag`].
pub trait NameStamper: Send + Sync {
    /// Rewrite `tag` to carry the stamper's name.
    fn apply_name_to(&self, tag: &mut NameTag);
}

/// A named desk attendant.
///
/// Created with a required name and renameable afterwards. Input arrives via
/// [`process_input`](Attendant::process_input) and stays pending until
/// overwritten; [`produce_feedback`](Attendant::produce_feedback) reads it
/// without consuming it. Boss-name reads and writes go through the wired
/// [`BossDirectory`], so attendants sharing a board see each other's writes.
#[derive(Clone)]
pub struct Attendant {
    name: String,
    pending_input: Option<String>,
    boss: Arc<dyn BossDirectory>,
    probe: Arc<dyn StepProbe>,
}

impl Attendant {
    /// Attendant wired to the process-wide [`BossBoard`] and a silent probe.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_collaborators(name, BossBoard::shared(), Arc::new(NoopProbe))
    }

    /// Attendant with explicit collaborators.
    ///
    /// Tests use this to inject a fresh board, a recording probe, or mocks.
    pub fn with_collaborators(
        name: impl Into<String>,
        boss: Arc<dyn BossDirectory>,
        probe: Arc<dyn StepProbe>,
    ) -> Self {
        Self {
            name: name.into(),
            pending_input: None,
            boss,
            probe,
        }
    }

    /// The name this attendant wears.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename this attendant. No validation; any string is a name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Overwrite the desk-wide boss name.
    pub fn set_boss_name(&self, name: impl Into<String>) {
        self.boss.set_boss_name(name.into());
    }

    /// Latest desk-wide boss name, or `None` if nobody has set one.
    pub fn boss_name(&self) -> Option<String> {
        self.boss.boss_name()
    }

    /// Capture `input` as the pending input, replacing any previous one.
    pub fn process_input(&mut self, input: impl Into<String>) {
        self.pending_input = Some(input.into());
    }

    /// Feedback for the pending input.
    ///
    /// Fails with [`FeedbackError::EmptyInput`] when no input is pending or
    /// the pending input is the empty string. The check is exact: input
    /// consisting of whitespace is still input. Producing feedback does not
    /// consume the pending input, so repeated calls answer alike.
    pub fn produce_feedback(&self, need_upper_case: bool) -> FeedbackResult<String> {
        match self.pending_input.as_deref() {
            None | Some("") => Err(FeedbackError::EmptyInput),
            Some(input) if need_upper_case => Ok(input.to_uppercase()),
            Some(input) => Ok(input.to_string()),
        }
    }

    /// Stamp this attendant's name onto `tag`.
    ///
    /// Compares by string value: a tag that already carries an equal name is
    /// left untouched, anything else is overwritten.
    pub fn apply_name_to(&self, tag: &mut NameTag) {
        if tag.name != self.name {
            tag.name = self.name.clone();
        }
    }

    /// First drill step. Observable only through the wired probe.
    pub fn step_a(&self) {
        self.probe.record(Step::A);
    }

    /// Second drill step. Observable only through the wired probe.
    pub fn step_b(&self) {
        self.probe.record(Step::B);
    }

    /// Third drill step. Observable only through the wired probe.
    pub fn step_c(&self) {
        self.probe.record(Step::C);
    }

    /// Closing drill step, reachable only via [`run_fixed_sequence`].
    ///
    /// [`run_fixed_sequence`]: Attendant::run_fixed_sequence
    fn step_d(&self) {
        self.probe.record(Step::D);
    }

    /// Run the fixed drill: A, A, B, C, C, B, C, then the closing D.
    ///
    /// The order and multiplicities are part of the contract.
    pub fn run_fixed_sequence(&self) {
        self.step_a();
        self.step_a();
        self.step_b();
        self.step_c();
        self.step_c();
        self.step_b();
        self.step_c();
        self.step_d();
    }
}

impl FeedbackSource for Attendant {
    fn produce_feedback(&self, need_upper_case: bool) -> FeedbackResult<String> {
        Attendant::produce_feedback(self, need_upper_case)
    }
}

impl NameStamper for Attendant {
    fn apply_name_to(&self, tag: &mut NameTag) {
        Attendant::apply_name_to(self, tag);
    }
}

impl fmt::Debug for Attendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attendant")
            .field("name", &self.name)
            .field("pending_input", &self.pending_input)
            .finish_non_exhaustive()
    }
}
