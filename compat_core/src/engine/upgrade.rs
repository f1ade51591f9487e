//! Upgrade ranking - CPUs on the same socket that beat the current one.
//!
//! A CPU qualifies if it shares the motherboard's socket and has more cores
//! or more threads than the current CPU (improving either axis is enough).
//! Candidates are ordered by core count, then thread count, both descending.

use parts_catalog::{ComponentKind, Token};
use serde::Serialize;
use tracing::debug;

use super::{slot, CompatEngine};
use crate::store::{FactStore, Filter, OrderKey, Predicate, Query, Term, TriplePattern, Var};

const BOARD: &str = "board";
const SOCKET: &str = "socket";
const BASE_CORES: &str = "base_cores";
const BASE_THREADS: &str = "base_threads";
const UPGRADE: &str = "upgrade";
const CORES: &str = "cores";
const THREADS: &str = "threads";

/// A CPU that improves on the current one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UpgradeCandidate {
    pub cpu: Token,
    pub cores: u32,
    pub threads: u32,
}

/// Upgrades for `current` on `motherboard`, or on any motherboard when absent.
///
/// The current CPU's socket is joined with the motherboard's, so a CPU that does
/// not fit the motherboard produces no candidates.
pub fn upgrade_query(current: &Token, motherboard: Option<&Token>) -> Query {
    let var = |name: &str| Var::new(name);

    Query::new()
        .with_pattern(TriplePattern::new(current, Predicate::UsesSocket, var(SOCKET)))
        .with_pattern(TriplePattern::new(slot(motherboard, BOARD), Predicate::HasSocket, var(SOCKET)))
        .with_pattern(TriplePattern::new(current, Predicate::CoreCount, var(BASE_CORES)))
        .with_pattern(TriplePattern::new(current, Predicate::ThreadCount, var(BASE_THREADS)))
        .with_pattern(TriplePattern::new(var(UPGRADE), Predicate::UsesSocket, var(SOCKET)))
        .with_pattern(TriplePattern::new(var(UPGRADE), Predicate::Type, ComponentKind::Cpu.as_token()))
        .with_pattern(TriplePattern::new(var(UPGRADE), Predicate::CoreCount, var(CORES)))
        .with_pattern(TriplePattern::new(var(UPGRADE), Predicate::ThreadCount, var(THREADS)))
        .with_filter(Filter::Any(vec![
            Filter::GreaterThan {
                left: var(CORES),
                right: var(BASE_CORES),
            },
            Filter::GreaterThan {
                left: var(THREADS),
                right: var(BASE_THREADS),
            },
        ]))
        .with_filter(Filter::NotEqual {
            var: var(UPGRADE),
            term: Term::Node(current.clone()),
        })
        .with_order(OrderKey::desc(var(CORES)))
        .with_order(OrderKey::desc(var(THREADS)))
        .selecting([var(UPGRADE), var(CORES), var(THREADS)])
        .distinct()
}

impl<S: FactStore> CompatEngine<S> {
    /// Rank upgrade candidates for the current CPU on a target motherboard, best first.
    ///
    /// Returns nothing when the current CPU is absent or cannot be resolved.
    pub fn rank_upgrades(
        &self,
        current: Option<&Token>,
        motherboard: Option<&Token>,
    ) -> Vec<UpgradeCandidate> {
        let Some(current) = current else {
            debug!("no current CPU given, no upgrades to rank");
            return Vec::new();
        };

        self.run("rank_upgrades", &upgrade_query(current, motherboard))
            .iter()
            .filter_map(|row| {
                Some(UpgradeCandidate {
                    cpu: row.node(UPGRADE)?.clone(),
                    cores: u32::try_from(row.integer(CORES)?).ok()?,
                    threads: u32::try_from(row.integer(THREADS)?).ok()?,
                })
            })
            .collect()
    }
}
