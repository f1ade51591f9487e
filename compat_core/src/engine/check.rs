//! Compatibility checker.

use parts_catalog::Token;

use super::{slot, CompatEngine};
use crate::store::{FactStore, Predicate, Query, TriplePattern};

/// `cpu compatibleWith board`, with an absent side left as a wildcard.
pub fn compatibility_query(cpu: Option<&Token>, motherboard: Option<&Token>) -> Query {
    Query::new().with_pattern(TriplePattern::new(
        slot(cpu, "cpu"),
        Predicate::CompatibleWith,
        slot(motherboard, "board"),
    ))
}

impl<S: FactStore> CompatEngine<S> {
    /// Whether any `compatibleWith` fact matches the (possibly wildcarded) pair.
    ///
    /// Unknown names simply match nothing.
    pub fn check_compatible(&self, cpu: Option<&Token>, motherboard: Option<&Token>) -> bool {
        !self
            .run("check_compatible", &compatibility_query(cpu, motherboard))
            .is_empty()
    }
}
