//! Attendant construction seam.
//!
//! Code that needs to mint attendants mid-flow depends on
//! [`AttendantFactory`] instead of calling [`Attendant::new`] directly, so
//! tests can intercept construction and hand back a prepared instance.
//! [`DeskFactory`] is the production implementation.

use crate::attendant::Attendant;

/// Mints attendants on demand.
#[cfg_attr(test, mockall::automock)]
pub trait AttendantFactory: Send + Sync {
    /// New attendant wearing `name`, wired to the default collaborators.
    fn make_attendant(&self, name: &str) -> Attendant;
}

/// Production factory: delegates straight to [`Attendant::new`].
#[derive(Debug, Default, Copy, Clone)]
pub struct DeskFactory;

impl AttendantFactory for DeskFactory {
    fn make_attendant(&self, name: &str) -> Attendant {
        Attendant::new(name)
    }
}
