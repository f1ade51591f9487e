//! Compatibility derivation - materialises `compatibleWith` from socket facts.

use serde::Serialize;
use tracing::info;

use crate::store::{Fact, FactStore, Predicate, Query, TriplePattern, Var};
use crate::StoreError;

const CPU: &str = "cpu";
const BOARD: &str = "board";
const SOCKET: &str = "socket";

/// Summary of one derivation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DerivationReport {
    /// Distinct (CPU, motherboard) pairs sharing a socket.
    pub pairs: usize,
    /// Facts that were not already in the store.
    pub inserted: usize,
}

/// Every CPU and motherboard whose socket tokens are equal.
pub fn socket_match_query() -> Query {
    Query::new()
        .with_pattern(TriplePattern::new(Var::new(CPU), Predicate::UsesSocket, Var::new(SOCKET)))
        .with_pattern(TriplePattern::new(Var::new(BOARD), Predicate::HasSocket, Var::new(SOCKET)))
        .selecting([Var::new(CPU), Var::new(BOARD)])
        .distinct()
}

/// Insert `compatibleWith` in both directions for every socket-matching pair.
///
/// Re-running is harmless: facts already present are not inserted again.
pub fn derive_compatibility<S: FactStore>(store: &mut S) -> Result<DerivationReport, StoreError> {
    let rows = store.query(&socket_match_query())?;
    let mut report = DerivationReport {
        pairs: rows.len(),
        inserted: 0,
    };

    for row in &rows {
        let (Some(cpu), Some(board)) = (row.node(CPU), row.node(BOARD)) else {
            continue;
        };
        let forward = Fact::compatible_with(cpu.clone(), board.clone());
        let backward = Fact::compatible_with(board.clone(), cpu.clone());
        report.inserted += usize::from(store.insert(forward));
        report.inserted += usize::from(store.insert(backward));
    }

    info!(
        pairs = report.pairs,
        inserted = report.inserted,
        "derived compatibility relation"
    );
    Ok(report)
}
