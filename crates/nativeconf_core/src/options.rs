//! Collector options.

use serde::Deserialize;

/// Options consumed by the configuration collector.
///
/// Options only affect diagnostics; accept/reject outcomes never depend on
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AotOptions {
    /// Emit one diagnostic line per failed verification.
    pub debug_verify: bool,
}

impl AotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug_verify(mut self, enabled: bool) -> Self {
        self.debug_verify = enabled;
        self
    }

    pub fn is_debug_verify(&self) -> bool {
        self.debug_verify
    }
}
