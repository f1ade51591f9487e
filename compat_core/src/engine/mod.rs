//! Compatibility Engine - derives the compatibility relation and answers queries over it.
//!
//! Each operation builds a structured [`Query`], runs it against the store and
//! shapes the bindings into results:
//! 1. **Derive**: socket-matching CPU/motherboard pairs become `compatibleWith` facts
//! 2. **Name**: manufacturer lookup for display names
//! 3. **Configure**: preference-driven search over compatible, tier-matched pairs
//! 4. **Check**: does a (possibly wildcarded) pair share the relation?
//! 5. **Recommend**: counterparts compatible with one component
//! 6. **Upgrade**: same-socket CPUs that beat the current one, best first

mod check;
mod derive;
mod naming;
mod preferences;
mod recommend;
mod upgrade;

pub use check::*;
pub use derive::*;
pub use naming::*;
pub use preferences::*;
pub use recommend::*;
pub use upgrade::*;

use parts_catalog::Token;
use std::path::Path;
use tracing::warn;

use crate::store::{FactStore, MemoryStore, PatternTerm, Query, Solution, Var};
use crate::StoreError;

/// The engine owns the fact store once compatibility has been derived.
///
/// Construction runs the derivation pass; every operation afterwards takes
/// `&self`, so the store is read-only for the rest of the engine's life.
#[derive(Debug, Clone)]
pub struct CompatEngine<S: FactStore = MemoryStore> {
    store: S,
    derivation: DerivationReport,
}

impl<S: FactStore> CompatEngine<S> {
    /// Derive compatibility over the store and wrap it.
    pub fn new(mut store: S) -> Result<Self, StoreError> {
        let derivation = derive_compatibility(&mut store)?;
        Ok(Self { store, derivation })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Outcome of the derivation pass run at construction.
    pub fn derivation(&self) -> DerivationReport {
        self.derivation
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Run a query, degrading a store failure to an empty result.
    fn run(&self, operation: &'static str, query: &Query) -> Vec<Solution> {
        match self.store.query(query) {
            Ok(rows) => rows,
            Err(error) => {
                warn!(operation, %error, "query failed, returning no results");
                Vec::new()
            }
        }
    }
}

impl CompatEngine<MemoryStore> {
    /// Load a catalog file and derive compatibility over it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::new(MemoryStore::load(path)?)
    }
}

/// A fixed token, or a wildcard variable when absent.
fn slot(token: Option<&Token>, var: &str) -> PatternTerm {
    match token {
        Some(token) => PatternTerm::from(token),
        None => PatternTerm::Var(Var::new(var)),
    }
}
