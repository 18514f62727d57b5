//! Name tag value holder.

use serde::{Deserialize, Serialize};

/// Plain mutable name holder the attendant may restamp.
///
/// No invariants: a tag starts empty, is mutated externally, and stays owned
/// by the caller. The attendant only ever borrows it for the duration of
/// one [`apply_name_to`] call.
///
/// [`apply_name_to`]: crate::Attendant::apply_name_to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTag {
    pub name: String,
}

impl NameTag {
    /// Create a tag already carrying a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
