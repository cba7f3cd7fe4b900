//! Environment variable access seam.
//!
//! The resolver never reads the live process environment directly; it goes
//! through [`EnvSource`] so tests can inject a deterministic environment
//! without mutating process state. Production code passes [`SystemEnv`].

use std::collections::HashMap;

/// Name of the reserved variable holding comma-separated `key=value`
/// resource attribute pairs.
pub const OTEL_RESOURCE_ATTRIBUTES: &str = "OTEL_RESOURCE_ATTRIBUTES";

/// Name of the reserved variable holding a single `service.name` override.
pub const OTEL_SERVICE_NAME: &str = "OTEL_SERVICE_NAME";

/// Read access to named environment variables.
pub trait EnvSource {
    /// Look up a variable, returning `None` when it is unset or not valid
    /// unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory environment, used by tests and embedders that capture the
/// environment up front.
impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
