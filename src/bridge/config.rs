/*!
 * Bridge Configuration
 */

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::bridge::Bridge`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Subsystem label used in log context
    pub name: String,
    /// Warn when a proxy is released by the drop fallback instead of an
    /// explicit `close`. The fallback is best-effort only; code that leans
    /// on it risks exhausting native memory before drops run.
    pub warn_on_drop_release: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            name: "native".to_string(),
            warn_on_drop_release: true,
        }
    }
}

impl BridgeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_warn_on_drop_release(mut self, warn: bool) -> Self {
        self.warn_on_drop_release = warn;
        self
    }
}
