//! Acting-principal identity
//!
//! The workflow assumes the caller already authorized the principal; it
//! consumes the name only to attribute the creation log line.

/// Source of the acting principal's name
pub trait PrincipalContext: Send + Sync {
    /// Name of the principal performing the submission
    fn current_user_name(&self) -> String;
}

/// Principal for non-interactive callers
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrincipal;

impl PrincipalContext for SystemPrincipal {
    fn current_user_name(&self) -> String {
        "system".to_string()
    }
}

/// Principal with a fixed name, handed in by the adapting layer
#[derive(Debug, Clone)]
pub struct FixedPrincipal {
    name: String,
}

impl FixedPrincipal {
    /// Create a principal with the given name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PrincipalContext for FixedPrincipal {
    fn current_user_name(&self) -> String {
        self.name.clone()
    }
}
