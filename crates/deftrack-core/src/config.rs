//! Workflow configuration

use serde::{Deserialize, Serialize};

/// Submission workflow configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Maximum accepted length of a trimmed tracker name
    pub max_name_len: usize,
    /// Whether the stock verifier setup should refuse plain-http endpoints
    pub require_https: bool,
}

impl WorkflowConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name length cap
    #[inline]
    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// With https-only endpoint verification
    #[inline]
    #[must_use]
    pub fn with_require_https(mut self, require: bool) -> Self {
        self.require_https = require;
        self
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            require_https: false,
        }
    }
}
