//! Boss-name directory seam.
//!
//! The boss name is desk-wide state, not per-attendant state: every
//! attendant wired to the same directory reads and writes the same slot.
//! [`BossBoard`] is the in-memory implementation; [`BossBoard::shared`]
//! hands out the process-wide board that [`Attendant::new`] wires in by
//! default. Tests that need isolation construct their own board (or a mock
//! of [`BossDirectory`]) and inject it through
//! [`Attendant::with_collaborators`].
//!
//! [`Attendant::new`]: crate::Attendant::new
//! [`Attendant::with_collaborators`]: crate::Attendant::with_collaborators

use std::sync::{Arc, OnceLock, RwLock};

/// Desk-wide boss-name slot.
///
/// A single mutable name shared by every attendant at the same desk.
/// Writes overwrite unconditionally; reads see the latest completed write.
#[cfg_attr(test, mockall::automock)]
pub trait BossDirectory: Send + Sync {
    /// Overwrite the shared boss name.
    fn set_boss_name(&self, name: String);

    /// Latest boss name, or `None` if nobody has set one yet.
    fn boss_name(&self) -> Option<String>;
}

/// In-memory [`BossDirectory`] backed by a `RwLock`.
#[derive(Debug, Default)]
pub struct BossBoard {
    name: RwLock<Option<String>>,
}

impl BossBoard {
    /// Fresh board with no boss name set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide board.
    ///
    /// Every call returns the same `Arc`. Tests touching this board share
    /// state with every other test in the same binary; prefer a fresh
    /// [`BossBoard::new`] unless the shared slot is the point.
    pub fn shared() -> Arc<BossBoard> {
        static SHARED: OnceLock<Arc<BossBoard>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(BossBoard::new())))
    }
}

impl BossDirectory for BossBoard {
    fn set_boss_name(&self, name: String) {
        // A poisoned lock drops the write; the board degrades to its last
        // good value instead of panicking.
        if let Ok(mut slot) = self.name.write() {
            *slot = Some(name);
        }
    }

    fn boss_name(&self) -> Option<String> {
        self.name.read().map(|slot| slot.clone()).unwrap_or(None)
    }
}
