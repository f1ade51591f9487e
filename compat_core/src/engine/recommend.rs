//! Recommendation engine - counterparts compatible with one component.

use parts_catalog::{ComponentKind, Token};

use super::CompatEngine;
use crate::store::{FactStore, Predicate, Query, TriplePattern, Var};

const MATCH: &str = "match";

/// Components compatible with `component`, read in the direction `kind` gives.
///
/// `compatibleWith` only ever links a CPU to a motherboard, so the relation alone
/// decides the counterpart; no `type` fact is needed on either side.
pub fn recommendation_query(component: &Token, kind: ComponentKind) -> Query {
    let counterpart = Var::new(MATCH);
    let relation = match kind {
        ComponentKind::Cpu => {
            TriplePattern::new(component, Predicate::CompatibleWith, &counterpart)
        }
        ComponentKind::MotherBoard => {
            TriplePattern::new(&counterpart, Predicate::CompatibleWith, component)
        }
    };

    Query::new()
        .with_pattern(relation)
        .selecting([counterpart])
        .distinct()
}

impl<S: FactStore> CompatEngine<S> {
    /// Motherboards for a CPU, or CPUs for a motherboard. Empty if the component is unknown.
    pub fn recommend(&self, component: &Token, kind: ComponentKind) -> Vec<Token> {
        self.run("recommend", &recommendation_query(component, kind))
            .iter()
            .filter_map(|row| row.node(MATCH).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Fact, MemoryStore, Term};

    fn engine() -> CompatEngine {
        let mut store = MemoryStore::new();
        for (cpu, socket) in [("Ryzen_5_5600X", "AM4"), ("Ryzen_7_5800X", "AM4"), ("Core_i5_12400F", "LGA1700")] {
            store.add_fact(Fact::typed(cpu, ComponentKind::Cpu.as_token()));
            store.add_fact(Fact::new(cpu, Predicate::UsesSocket, Term::node(socket)));
        }
        for (board, socket) in [("B450_Tomahawk", "AM4"), ("B550_Aorus_Elite", "AM4"), ("Z690_Prime", "LGA1700")] {
            store.add_fact(Fact::typed(board, ComponentKind::MotherBoard.as_token()));
            store.add_fact(Fact::new(board, Predicate::HasSocket, Term::node(socket)));
        }
        CompatEngine::new(store).unwrap()
    }

    #[test]
    fn test_boards_for_cpu() {
        let boards = engine().recommend(&Token::new("Ryzen_5_5600X"), ComponentKind::Cpu);
        assert_eq!(boards, vec![Token::new("B450_Tomahawk"), Token::new("B550_Aorus_Elite")]);
    }

    #[test]
    fn test_cpus_for_board() {
        let cpus = engine().recommend(&Token::new("Z690_Prime"), ComponentKind::MotherBoard);
        assert_eq!(cpus, vec![Token::new("Core_i5_12400F")]);
    }

    #[test]
    fn test_unknown_component() {
        assert!(engine().recommend(&Token::new("Pentium_4"), ComponentKind::Cpu).is_empty());
    }

    #[test]
    fn test_untyped_socket_facts_are_recommended() {
        let mut store = MemoryStore::new();
        store.add_fact(Fact::new("Ryzen_5_7600", Predicate::UsesSocket, Term::node("AM5")));
        store.add_fact(Fact::new("B650_Tomahawk", Predicate::HasSocket, Term::node("AM5")));
        let engine = CompatEngine::new(store).unwrap();

        assert!(engine.check_compatible(Some(&Token::new("Ryzen_5_7600")), Some(&Token::new("B650_Tomahawk"))));
        assert_eq!(
            engine.recommend(&Token::new("Ryzen_5_7600"), ComponentKind::Cpu),
            vec![Token::new("B650_Tomahawk")]
        );
        assert_eq!(
            engine.recommend(&Token::new("B650_Tomahawk"), ComponentKind::MotherBoard),
            vec![Token::new("Ryzen_5_7600")]
        );
    }
}
