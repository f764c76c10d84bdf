//! Built-in compositions by id.

use crate::{
    composition::model::{Composition, CompositionMeta},
    compositions::{careers, feedback, launch, moot_court},
    foundation::error::{MotionError, MotionResult},
};

/// One registered composition.
#[derive(Clone, Copy, Debug)]
pub struct RegistryEntry {
    /// Composition id.
    pub id: &'static str,
    /// Constructor.
    pub build: fn() -> MotionResult<Composition>,
}

const ENTRIES: &[RegistryEntry] = &[
    RegistryEntry {
        id: launch::ID,
        build: launch::build,
    },
    RegistryEntry {
        id: moot_court::ID,
        build: moot_court::build,
    },
    RegistryEntry {
        id: feedback::ID,
        build: feedback::build,
    },
    RegistryEntry {
        id: careers::ID,
        build: careers::build,
    },
];

/// Every registered composition, in registration order.
pub fn entries() -> &'static [RegistryEntry] {
    ENTRIES
}

/// Registered ids.
pub fn ids() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.id).collect()
}

/// Build the composition registered as `id`.
pub fn lookup(id: &str) -> MotionResult<Composition> {
    let entry = ENTRIES.iter().find(|e| e.id == id).ok_or_else(|| {
        MotionError::validation(format!(
            "unknown composition \"{id}\" (known: {})",
            ids().join(", ")
        ))
    })?;
    (entry.build)()
}

/// Metadata of every registered composition.
pub fn list() -> MotionResult<Vec<CompositionMeta>> {
    ENTRIES
        .iter()
        .map(|e| (e.build)().map(|c| c.meta))
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/registry/registry.rs"]
mod tests;
