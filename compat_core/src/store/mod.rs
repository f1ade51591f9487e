//! Fact store - the triple store the engine queries.
//!
//! The store consists of:
//! - **Facts**: subject-predicate-object triples with set semantics
//! - **Queries**: conjunctive triple patterns plus typed filters, ordering and projection
//! - **Solutions**: variable bindings returned for each match

mod fact;
mod load;
mod memory;
mod query;
mod term;

pub use fact::*;
pub use load::*;
pub use memory::*;
pub use query::*;
pub use term::*;

use crate::StoreError;

/// The capability the engine requires from a triple store.
pub trait FactStore {
    /// Insert a fact. Returns `false` if the fact was already present.
    fn insert(&mut self, fact: Fact) -> bool;

    /// Execute a structured query and return its solutions.
    fn query(&self, query: &Query) -> Result<Vec<Solution>, StoreError>;

    /// Number of facts held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert many facts, returning how many were new.
    fn extend_facts<I>(&mut self, facts: I) -> usize
    where
        I: IntoIterator<Item = Fact>,
        Self: Sized,
    {
        let mut inserted = 0;
        for fact in facts {
            if self.insert(fact) {
                inserted += 1;
            }
        }
        inserted
    }
}
