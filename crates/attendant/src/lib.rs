//! Attendant domain module (the echodesk object under test).
//!
//! This crate contains the desk attendant and its collaborators, implemented
//! purely as deterministic domain logic (no IO, no storage). Every
//! dependency the attendant needs (the boss directory, the step probe) is
//! injected through a trait seam so tests can substitute doubles without
//! runtime patching.

pub mod attendant;
pub mod boss;
pub mod error;
pub mod factory;
pub mod probe;
pub mod tag;

pub use attendant::{Attendant, FeedbackSource, NameStamper};
pub use boss::{BossBoard, BossDirectory};
pub use error::{FeedbackError, FeedbackResult};
pub use factory::{AttendantFactory, DeskFactory};
pub use probe::{NoopProbe, RecordingProbe, Step, StepProbe};
pub use tag::NameTag;
