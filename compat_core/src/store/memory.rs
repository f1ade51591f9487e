//! In-memory fact store - the core data structure holding the hardware graph.

use parts_catalog::{Catalog, Token};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use super::{
    catalog_facts, Fact, FactStore, Filter, OrderKey, PatternTerm, Predicate, Query, Solution,
    Term, TriplePattern,
};
use crate::StoreError;

/// The in-memory triple store.
///
/// Facts are kept in insertion order, which is the order queries return
/// solutions in before any explicit ordering. Inserting a fact twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// All facts in insertion order.
    facts: Vec<Fact>,

    /// Membership set backing the set semantics.
    present: HashSet<Fact>,

    /// Index: subject -> positions in `facts`.
    by_subject: HashMap<Token, Vec<usize>>,

    /// Index: predicate -> positions in `facts`.
    by_predicate: HashMap<Predicate, Vec<usize>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding every fact of a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut store = Self::new();
        store.extend_facts(catalog_facts(catalog));
        store
    }

    /// Load a catalog file (`.toml` or `.json`) into a new store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let catalog = Catalog::from_path(path)?;
        let store = Self::from_catalog(&catalog);
        info!(facts = store.fact_count(), "fact store ready");
        Ok(store)
    }

    /// Add a fact to the store.
    ///
    /// Returns `false` if it was already present.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        if self.present.contains(&fact) {
            return false;
        }

        let position = self.facts.len();
        self.by_subject
            .entry(fact.subject.clone())
            .or_default()
            .push(position);
        self.by_predicate
            .entry(fact.predicate.clone())
            .or_default()
            .push(position);

        self.present.insert(fact.clone());
        self.facts.push(fact);
        true
    }

    /// Check if a fact is present.
    pub fn contains(&self, fact: &Fact) -> bool {
        self.present.contains(fact)
    }

    /// Get all facts whose subject is the given token.
    pub fn facts_about(&self, subject: &Token) -> Vec<&Fact> {
        self.by_subject
            .get(subject)
            .map(|positions| positions.iter().map(|&i| &self.facts[i]).collect())
            .unwrap_or_default()
    }

    /// Get all facts with the given predicate.
    pub fn facts_with_predicate(&self, predicate: &Predicate) -> Vec<&Fact> {
        self.by_predicate
            .get(predicate)
            .map(|positions| positions.iter().map(|&i| &self.facts[i]).collect())
            .unwrap_or_default()
    }

    /// Get all facts in insertion order.
    pub fn all_facts(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Get the total number of facts.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Find facts matching a predicate.
    pub fn find_facts<F>(&self, predicate: F) -> Vec<&Fact>
    where
        F: Fn(&Fact) -> bool,
    {
        self.facts.iter().filter(|f| predicate(f)).collect()
    }

    /// Positions of the facts that could match a pattern under a partial solution.
    fn candidate_positions(&self, pattern: &TriplePattern, solution: &Solution) -> &[usize] {
        let positions = match pattern.subject.resolve(solution) {
            Some(Term::Node(subject)) => self.by_subject.get(subject),
            Some(Term::Integer(_)) => None,
            None => self.by_predicate.get(&pattern.predicate),
        };
        positions.map(Vec::as_slice).unwrap_or(&[])
    }

    /// Join patterns left to right, extending each partial solution with every matching fact.
    fn solve(&self, patterns: &[TriplePattern], seed: Solution) -> Vec<Solution> {
        let mut partial = vec![seed];

        for pattern in patterns {
            let mut next = Vec::new();
            for solution in &partial {
                for &position in self.candidate_positions(pattern, solution) {
                    if let Some(extended) = unify(pattern, &self.facts[position], solution) {
                        next.push(extended);
                    }
                }
            }
            partial = next;
            if partial.is_empty() {
                break;
            }
        }

        partial
    }

    /// Evaluate a filter against a solution.
    fn holds(&self, filter: &Filter, solution: &Solution) -> bool {
        match filter {
            Filter::ContainsIgnoreCase { var, needle } => solution
                .get(var.name())
                .is_some_and(|term| term.match_text().to_lowercase().contains(needle.as_str())),
            Filter::AtLeast { var, min } => {
                solution.integer(var.name()).is_some_and(|value| value >= *min)
            }
            Filter::GreaterThan { left, right } => {
                match (solution.integer(left.name()), solution.integer(right.name())) {
                    (Some(left), Some(right)) => left > right,
                    _ => false,
                }
            }
            Filter::NotEqual { var, term } => {
                solution.get(var.name()).is_some_and(|bound| bound != term)
            }
            Filter::Any(filters) => filters.iter().any(|f| self.holds(f, solution)),
            Filter::NotExists { patterns, filters } => !self
                .solve(patterns, solution.clone())
                .iter()
                .any(|inner| filters.iter().all(|f| self.holds(f, inner))),
        }
    }
}

impl FactStore for MemoryStore {
    fn insert(&mut self, fact: Fact) -> bool {
        self.add_fact(fact)
    }

    fn query(&self, query: &Query) -> Result<Vec<Solution>, StoreError> {
        query.validate()?;

        let mut rows: Vec<Solution> = self
            .solve(&query.patterns, Solution::new())
            .into_iter()
            .filter(|row| query.filters.iter().all(|f| self.holds(f, row)))
            .collect();

        if !query.order_by.is_empty() {
            rows.sort_by(|a, b| compare_rows(&query.order_by, a, b));
        }

        if !query.select.is_empty() {
            rows = rows.iter().map(|row| row.project(&query.select)).collect();
        }

        if query.distinct {
            let mut seen = HashSet::new();
            rows.retain(|row| seen.insert(row.clone()));
        }

        debug!(
            patterns = query.patterns.len(),
            filters = query.filters.len(),
            rows = rows.len(),
            "executed query"
        );
        Ok(rows)
    }

    fn len(&self) -> usize {
        self.facts.len()
    }
}

/// Extend a solution so that the pattern matches the fact, or `None` on conflict.
fn unify(pattern: &TriplePattern, fact: &Fact, solution: &Solution) -> Option<Solution> {
    if pattern.predicate != fact.predicate {
        return None;
    }

    let mut extended = solution.clone();
    bind_slot(&pattern.subject, Term::Node(fact.subject.clone()), &mut extended)?;
    bind_slot(&pattern.object, fact.object.clone(), &mut extended)?;
    Some(extended)
}

fn bind_slot(slot: &PatternTerm, value: Term, solution: &mut Solution) -> Option<()> {
    let var = match slot {
        PatternTerm::Bound(term) => return (term == &value).then_some(()),
        PatternTerm::Var(var) => var,
    };

    if let Some(existing) = solution.get(var.name()) {
        return (existing == &value).then_some(());
    }
    solution.bind(var.clone(), value);
    Some(())
}

/// Stable multi-key comparison; unbound values sort first.
fn compare_rows(keys: &[OrderKey], a: &Solution, b: &Solution) -> Ordering {
    keys.iter()
        .map(|key| {
            let ordering = a.get(key.var.name()).cmp(&b.get(key.var.name()));
            if key.descending {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Var;

    fn var(name: &str) -> Var {
        Var::new(name)
    }

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_fact(Fact::new("Ryzen_5_5600X", Predicate::UsesSocket, Term::node("AM4")));
        store.add_fact(Fact::new("Ryzen_5_5600X", Predicate::CoreCount, Term::Integer(6)));
        store.add_fact(Fact::new("Ryzen_7_5800X", Predicate::UsesSocket, Term::node("AM4")));
        store.add_fact(Fact::new("Ryzen_7_5800X", Predicate::CoreCount, Term::Integer(8)));
        store.add_fact(Fact::new("Core_i5_12400F", Predicate::UsesSocket, Term::node("LGA1700")));
        store.add_fact(Fact::new("Core_i5_12400F", Predicate::CoreCount, Term::Integer(6)));
        store.add_fact(Fact::manufactures("AMD", "Ryzen_5_5600X"));
        store.add_fact(Fact::manufactures("AMD", "Ryzen_7_5800X"));
        store.add_fact(Fact::manufactures("Intel", "Core_i5_12400F"));
        store
    }

    fn names(rows: &[Solution], name: &str) -> Vec<String> {
        rows.iter()
            .filter_map(|row| row.node(name))
            .map(|token| token.to_string())
            .collect()
    }

    #[test]
    fn test_add_fact_is_idempotent() {
        let mut store = MemoryStore::new();
        let fact = Fact::compatible_with("Ryzen_5_5600X", "B450_Tomahawk");

        assert!(store.add_fact(fact.clone()));
        assert!(!store.add_fact(fact.clone()));
        assert_eq!(store.fact_count(), 1);
        assert!(store.contains(&fact));
    }

    #[test]
    fn test_facts_about() {
        let store = sample_store();
        let facts = store.facts_about(&Token::new("Ryzen_7_5800X"));
        assert_eq!(facts.len(), 2);
        assert!(store.facts_about(&Token::new("Unknown")).is_empty());
        assert_eq!(store.facts_with_predicate(&Predicate::Manufactures).len(), 3);
    }

    #[test]
    fn test_join_on_shared_variable() {
        let store = sample_store();
        let query = Query::new()
            .with_pattern(TriplePattern::new(Token::new("Ryzen_5_5600X"), Predicate::UsesSocket, var("socket")))
            .with_pattern(TriplePattern::new(var("other"), Predicate::UsesSocket, var("socket")));

        let rows = store.query(&query).unwrap();
        assert_eq!(names(&rows, "other"), vec!["Ryzen_5_5600X", "Ryzen_7_5800X"]);
    }

    #[test]
    fn test_contains_filter_is_literal_and_case_insensitive() {
        let store = sample_store();
        let query = |needle: &str| {
            Query::new()
                .with_pattern(TriplePattern::new(var("maker"), Predicate::Manufactures, var("cpu")))
                .with_filter(Filter::contains_ignore_case(var("maker"), needle))
        };

        assert_eq!(store.query(&query("intel")).unwrap().len(), 1);
        assert_eq!(store.query(&query("AM")).unwrap().len(), 2);
        // Regex metacharacters are plain text.
        assert!(store.query(&query(".*")).unwrap().is_empty());
    }

    #[test]
    fn test_not_exists_filter() {
        let store = sample_store();
        let query = Query::new()
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::UsesSocket, var("socket")))
            .with_filter(Filter::NotExists {
                patterns: vec![TriplePattern::new(var("maker"), Predicate::Manufactures, var("cpu"))],
                filters: vec![Filter::contains_ignore_case(var("maker"), "amd")],
            });

        let rows = store.query(&query).unwrap();
        assert_eq!(names(&rows, "cpu"), vec!["Core_i5_12400F"]);
    }

    #[test]
    fn test_ordering_projection_and_distinct() {
        let store = sample_store();
        let query = Query::new()
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::CoreCount, var("cores")))
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::UsesSocket, var("socket")))
            .with_order(OrderKey::desc(var("cores")))
            .selecting([var("socket")])
            .distinct();

        let rows = store.query(&query).unwrap();
        // 8-core AM4 first, then the two 6-core parts in insertion order, deduplicated.
        assert_eq!(names(&rows, "socket"), vec!["AM4", "LGA1700"]);
    }

    #[test]
    fn test_numeric_filters() {
        let store = sample_store();
        let at_least = Query::new()
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::CoreCount, var("cores")))
            .with_filter(Filter::AtLeast { var: var("cores"), min: 7 });
        assert_eq!(names(&store.query(&at_least).unwrap(), "cpu"), vec!["Ryzen_7_5800X"]);

        let greater = Query::new()
            .with_pattern(TriplePattern::new(Token::new("Ryzen_5_5600X"), Predicate::CoreCount, var("base")))
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::CoreCount, var("cores")))
            .with_filter(Filter::GreaterThan { left: var("cores"), right: var("base") });
        assert_eq!(names(&store.query(&greater).unwrap(), "cpu"), vec!["Ryzen_7_5800X"]);
    }

    #[test]
    fn test_unbound_variable_is_an_error() {
        let store = sample_store();
        let query = Query::new()
            .with_pattern(TriplePattern::new(var("cpu"), Predicate::CoreCount, var("cores")))
            .with_order(OrderKey::asc(var("threads")));
        assert!(matches!(store.query(&query), Err(StoreError::UnboundVariable(_))));
    }

    #[test]
    fn test_unknown_subject_yields_nothing() {
        let store = sample_store();
        let query = Query::new().with_pattern(TriplePattern::new(
            Token::new("Pentium_4"),
            Predicate::UsesSocket,
            var("socket"),
        ));
        assert!(store.query(&query).unwrap().is_empty());
    }
}
