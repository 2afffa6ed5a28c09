//! Process-wide cryptographic provider state
//!
//! Some schemes depend on a provider being installed before first use. The
//! set of installed providers is global to the process and only ever grows:
//! installing a provider that is already present is a no-op, so concurrent
//! first use resolves to a single effective registration.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use kemgate_api::AlgorithmId;
use once_cell::sync::Lazy;
use tracing::debug;

/// A named source of KEM primitives
#[derive(Debug)]
pub struct Provider {
    name: &'static str,
    algorithms: &'static [AlgorithmId],
}

impl Provider {
    /// Describe a provider
    pub const fn new(name: &'static str, algorithms: &'static [AlgorithmId]) -> Self {
        Self { name, algorithms }
    }

    /// Provider name used for lookups
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Post-quantum provider backed by the pqcrypto crates
pub static PQCRYPTO: Provider = Provider::new("pqcrypto", &[AlgorithmId::Kyber768]);

static INSTALLED: Lazy<RwLock<Vec<&'static Provider>>> = Lazy::new(|| RwLock::new(Vec::new()));
static REGISTRATIONS: AtomicUsize = AtomicUsize::new(0);

/// Look up an installed provider by name
pub fn get(name: &str) -> Option<&'static Provider> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .copied()
        .find(|p| p.name == name)
}

/// Install `provider` unless a provider with the same name is present.
///
/// Returns `true` if this call performed the registration.
pub fn install(provider: &'static Provider) -> bool {
    let mut installed = INSTALLED.write().unwrap_or_else(PoisonError::into_inner);
    if installed.iter().any(|p| p.name == provider.name) {
        return false;
    }

    installed.push(provider);
    REGISTRATIONS.fetch_add(1, Ordering::SeqCst);
    debug!(provider = provider.name, algorithms = ?provider.algorithms, "installed cryptographic provider");
    true
}

/// Names of the installed providers, in installation order
pub fn installed() -> Vec<&'static str> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|p| p.name)
        .collect()
}

/// Number of effective registrations performed in this process
pub fn registrations() -> usize {
    REGISTRATIONS.load(Ordering::SeqCst)
}
