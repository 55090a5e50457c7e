//! External tool availability, resolved against PATH and memoized.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Process-lifetime cache of which executables exist on the search path.
///
/// The probe is an explicit value owned by the `Linter` and passed into
/// the runner by reference, never an implicit global: tests pre-seed
/// verdicts with `set_available` instead of depending on the host
/// environment.
#[derive(Debug, Default)]
pub struct ToolProbe {
    cache: RwLock<HashMap<String, bool>>,
}

impl ToolProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `executable` resolves on the search path.
    ///
    /// Lookup failures (unset PATH, I/O errors) count as unavailable;
    /// this never panics.
    pub fn is_available(&self, executable: &str) -> bool {
        if let Some(&known) = self.cache.read().get(executable) {
            return known;
        }
        let available = which::which(executable).is_ok();
        self.cache.write().insert(executable.to_string(), available);
        available
    }

    /// Pre-seed an availability verdict, bypassing PATH resolution.
    pub fn set_available(&self, executable: &str, available: bool) {
        self.cache.write().insert(executable.to_string(), available);
    }

    /// Drop all memoized verdicts so the next lookup re-resolves.
    pub fn invalidate(&self) {
        self.cache.write().clear();
    }
}
