//! Naming resolver - manufacturer lookup and display names.

use parts_catalog::{ComponentKind, Token};
use tracing::debug;

use super::CompatEngine;
use crate::store::{FactStore, Predicate, Query, TriplePattern, Var};

const MAKER: &str = "maker";
const KIND: &str = "kind";

/// Manufacturers of a component.
pub fn manufacturer_query(component: &Token) -> Query {
    Query::new()
        .with_pattern(TriplePattern::new(Var::new(MAKER), Predicate::Manufactures, component))
        .selecting([Var::new(MAKER)])
}

/// `"<Manufacturer> <Component>"` with underscores rendered as spaces.
pub fn display_name(manufacturer: &Token, component: &Token) -> String {
    format!("{} {}", manufacturer.display_name(), component.display_name())
}

impl<S: FactStore> CompatEngine<S> {
    /// The manufacturer of a component.
    ///
    /// If the dataset lists several, the first one in store order is used.
    pub fn manufacturer_of(&self, component: &Token) -> Option<Token> {
        let rows = self.run("manufacturer_of", &manufacturer_query(component));
        if rows.len() > 1 {
            debug!(%component, count = rows.len(), "component has several manufacturers, using the first");
        }
        rows.first().and_then(|row| row.node(MAKER)).cloned()
    }

    /// Human-readable name of a component, or `None` if it has no manufacturer.
    pub fn name_of(&self, component: &Token) -> Option<String> {
        let manufacturer = self.manufacturer_of(component)?;
        Some(display_name(&manufacturer, component))
    }

    /// The kind recorded for a component.
    pub fn kind_of(&self, component: &Token) -> Option<ComponentKind> {
        let query = Query::new()
            .with_pattern(TriplePattern::new(component, Predicate::Type, Var::new(KIND)))
            .selecting([Var::new(KIND)]);
        self.run("kind_of", &query)
            .iter()
            .filter_map(|row| row.node(KIND))
            .find_map(ComponentKind::from_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Fact, MemoryStore};

    fn engine(facts: Vec<Fact>) -> CompatEngine {
        let mut store = MemoryStore::new();
        store.extend_facts(facts);
        CompatEngine::new(store).unwrap()
    }

    #[test]
    fn test_name_of() {
        let engine = engine(vec![
            Fact::manufactures("AMD", "Ryzen_5_5600X"),
            Fact::manufactures("Western_Digital", "Black_SN850"),
        ]);

        assert_eq!(
            engine.name_of(&Token::new("Ryzen_5_5600X")).as_deref(),
            Some("AMD Ryzen 5 5600X")
        );
        assert_eq!(
            engine.name_of(&Token::new("Black_SN850")).as_deref(),
            Some("Western Digital Black SN850")
        );
    }

    #[test]
    fn test_name_of_without_manufacturer() {
        let engine = engine(vec![Fact::typed("Mystery_Chip", ComponentKind::Cpu.as_token())]);
        assert_eq!(engine.name_of(&Token::new("Mystery_Chip")), None);
    }

    #[test]
    fn test_first_manufacturer_wins() {
        let engine = engine(vec![
            Fact::manufactures("MSI", "B450_Tomahawk"),
            Fact::manufactures("ASRock", "B450_Tomahawk"),
        ]);
        assert_eq!(
            engine.manufacturer_of(&Token::new("B450_Tomahawk")),
            Some(Token::new("MSI"))
        );
    }

    #[test]
    fn test_kind_of() {
        let engine = engine(vec![
            Fact::typed("Ryzen_5_5600X", ComponentKind::Cpu.as_token()),
            Fact::typed("B450_Tomahawk", ComponentKind::MotherBoard.as_token()),
        ]);
        assert_eq!(engine.kind_of(&Token::new("Ryzen_5_5600X")), Some(ComponentKind::Cpu));
        assert_eq!(
            engine.kind_of(&Token::new("B450_Tomahawk")),
            Some(ComponentKind::MotherBoard)
        );
        assert_eq!(engine.kind_of(&Token::new("Unknown")), None);
    }
}
