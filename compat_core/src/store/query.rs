//! Structured queries - triple patterns, filters and the bindings they produce.
//!
//! Queries are assembled from typed clauses rather than text, so user input only
//! ever appears as a filter operand and never as query syntax.

use parts_catalog::Token;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use super::{Predicate, Term};
use crate::StoreError;

/// A query variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(String);

impl Var {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Var {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Subject or object slot of a pattern: a variable or a fixed term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTerm {
    Var(Var),
    Bound(Term),
}

impl PatternTerm {
    pub fn as_var(&self) -> Option<&Var> {
        match self {
            PatternTerm::Var(var) => Some(var),
            PatternTerm::Bound(_) => None,
        }
    }

    /// The term this slot stands for under a solution, if it is fixed or already bound.
    pub fn resolve<'a>(&'a self, solution: &'a Solution) -> Option<&'a Term> {
        match self {
            PatternTerm::Var(var) => solution.get(var.name()),
            PatternTerm::Bound(term) => Some(term),
        }
    }
}

impl From<Var> for PatternTerm {
    fn from(var: Var) -> Self {
        PatternTerm::Var(var)
    }
}

impl From<&Var> for PatternTerm {
    fn from(var: &Var) -> Self {
        PatternTerm::Var(var.clone())
    }
}

impl From<Term> for PatternTerm {
    fn from(term: Term) -> Self {
        PatternTerm::Bound(term)
    }
}

impl From<Token> for PatternTerm {
    fn from(token: Token) -> Self {
        PatternTerm::Bound(Term::Node(token))
    }
}

impl From<&Token> for PatternTerm {
    fn from(token: &Token) -> Self {
        PatternTerm::Bound(Term::Node(token.clone()))
    }
}

/// A triple template with a fixed predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: PatternTerm,
    pub predicate: Predicate,
    pub object: PatternTerm,
}

impl TriplePattern {
    pub fn new(
        subject: impl Into<PatternTerm>,
        predicate: Predicate,
        object: impl Into<PatternTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// Variables appearing in this pattern.
    pub fn variables(&self) -> impl Iterator<Item = &Var> {
        self.subject.as_var().into_iter().chain(self.object.as_var())
    }
}

/// Conditions applied to candidate solutions after pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive literal substring match on the display text of a bound term.
    ContainsIgnoreCase { var: Var, needle: String },

    /// The bound integer is at least `min`.
    AtLeast { var: Var, min: i64 },

    /// Both variables are bound to integers and `left > right`.
    GreaterThan { left: Var, right: Var },

    /// The bound term differs from `term`.
    NotEqual { var: Var, term: Term },

    /// At least one of the filters holds.
    Any(Vec<Filter>),

    /// No extension of the current solution matches the sub-patterns and sub-filters.
    NotExists {
        patterns: Vec<TriplePattern>,
        filters: Vec<Filter>,
    },
}

impl Filter {
    /// Build a substring filter. The needle is normalised the same way as
    /// [`Term::match_text`]: whitespace collapsed, underscores as spaces, lowercase.
    pub fn contains_ignore_case(var: Var, needle: &str) -> Self {
        Filter::ContainsIgnoreCase {
            var,
            needle: Token::from_display(needle).display_name().to_lowercase(),
        }
    }

    fn check_bound<'a>(&'a self, bound: &BTreeSet<&'a Var>) -> Result<(), StoreError> {
        let require = |var: &Var| {
            if bound.contains(var) {
                Ok(())
            } else {
                Err(StoreError::UnboundVariable(var.name().to_string()))
            }
        };

        match self {
            Filter::ContainsIgnoreCase { var, .. }
            | Filter::AtLeast { var, .. }
            | Filter::NotEqual { var, .. } => require(var),
            Filter::GreaterThan { left, right } => {
                require(left)?;
                require(right)
            }
            Filter::Any(filters) => filters.iter().try_for_each(|f| f.check_bound(bound)),
            Filter::NotExists { patterns, filters } => {
                let mut inner = bound.clone();
                inner.extend(patterns.iter().flat_map(TriplePattern::variables));
                filters.iter().try_for_each(|f| f.check_bound(&inner))
            }
        }
    }
}

/// Sort key applied to an integer- or node-valued variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderKey {
    pub var: Var,
    pub descending: bool,
}

impl OrderKey {
    pub fn asc(var: Var) -> Self {
        Self {
            var,
            descending: false,
        }
    }

    pub fn desc(var: Var) -> Self {
        Self {
            var,
            descending: true,
        }
    }
}

/// A conjunctive graph query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub patterns: Vec<TriplePattern>,
    pub filters: Vec<Filter>,
    pub order_by: Vec<OrderKey>,
    /// Variables kept in each solution; empty keeps everything.
    pub select: Vec<Var>,
    pub distinct: bool,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: TriplePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_order(mut self, key: OrderKey) -> Self {
        self.order_by.push(key);
        self
    }

    pub fn selecting(mut self, vars: impl IntoIterator<Item = Var>) -> Self {
        self.select.extend(vars);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn push_pattern(&mut self, pattern: TriplePattern) {
        self.patterns.push(pattern);
    }

    pub fn push_filter(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Variables bound by the top-level patterns.
    pub fn bound_variables(&self) -> BTreeSet<&Var> {
        self.patterns.iter().flat_map(TriplePattern::variables).collect()
    }

    /// Check that every filter, ordering key and projection refers to a bound variable.
    pub fn validate(&self) -> Result<(), StoreError> {
        let bound = self.bound_variables();

        for filter in &self.filters {
            filter.check_bound(&bound)?;
        }

        self.order_by
            .iter()
            .map(|key| &key.var)
            .chain(&self.select)
            .find(|var| !bound.contains(var))
            .map_or(Ok(()), |var| {
                Err(StoreError::UnboundVariable(var.name().to_string()))
            })
    }
}

/// One row of variable bindings produced by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    bindings: BTreeMap<Var, Term>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// The node bound to `var`, if any.
    pub fn node(&self, var: &str) -> Option<&Token> {
        self.get(var).and_then(Term::as_node)
    }

    /// The integer bound to `var`, if any.
    pub fn integer(&self, var: &str) -> Option<i64> {
        self.get(var).and_then(Term::as_integer)
    }

    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Keep only the given variables.
    pub fn project(&self, vars: &[Var]) -> Self {
        Self {
            bindings: vars
                .iter()
                .filter_map(|var| Some((var.clone(), self.bindings.get(var)?.clone())))
                .collect(),
        }
    }
}
