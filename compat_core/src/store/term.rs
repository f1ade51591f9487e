//! Predicates and terms - the vocabulary of the fact store.

use parts_catalog::Token;
use serde::{Deserialize, Serialize};

/// Predicates relating a subject to an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Predicate {
    /// Component kind (`CPU` or `MotherBoard`).
    Type,

    /// CPU -> socket.
    UsesSocket,

    /// Motherboard -> socket.
    HasSocket,

    /// Component -> performance tier.
    PerformanceTier,

    /// CPU -> integer core count.
    CoreCount,

    /// CPU -> integer thread count.
    ThreadCount,

    /// Manufacturer -> component.
    Manufactures,

    /// Derived, symmetric CPU <-> motherboard relation.
    CompatibleWith,

    /// Anything outside the built-in vocabulary.
    Custom(String),
}

impl Predicate {
    /// Resolve a predicate name as written in a dataset.
    pub fn from_name(name: &str) -> Self {
        match name {
            "type" | "a" => Predicate::Type,
            "usesSocket" | "uses-socket" => Predicate::UsesSocket,
            "hasSocket" | "has-socket" => Predicate::HasSocket,
            "performanceTier" | "tier" => Predicate::PerformanceTier,
            "coreCount" | "cores" => Predicate::CoreCount,
            "threadCount" | "threads" => Predicate::ThreadCount,
            "manufactures" => Predicate::Manufactures,
            "compatibleWith" => Predicate::CompatibleWith,
            other => Predicate::Custom(other.to_string()),
        }
    }

    /// Canonical name of the predicate.
    pub fn as_str(&self) -> &str {
        match self {
            Predicate::Type => "type",
            Predicate::UsesSocket => "usesSocket",
            Predicate::HasSocket => "hasSocket",
            Predicate::PerformanceTier => "performanceTier",
            Predicate::CoreCount => "coreCount",
            Predicate::ThreadCount => "threadCount",
            Predicate::Manufactures => "manufactures",
            Predicate::CompatibleWith => "compatibleWith",
            Predicate::Custom(name) => name,
        }
    }

    /// Whether the fact was computed rather than loaded.
    pub fn is_derived(&self) -> bool {
        matches!(self, Predicate::CompatibleWith)
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object position of a fact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Node(Token),
    Integer(i64),
}

impl Term {
    /// Create a node term.
    pub fn node(token: impl Into<Token>) -> Self {
        Term::Node(token.into())
    }

    pub fn as_node(&self) -> Option<&Token> {
        match self {
            Term::Node(token) => Some(token),
            Term::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Term::Integer(value) => Some(*value),
            Term::Node(_) => None,
        }
    }

    /// Text used for substring matching: display name for nodes, digits for integers.
    pub fn match_text(&self) -> String {
        match self {
            Term::Node(token) => token.display_name(),
            Term::Integer(value) => value.to_string(),
        }
    }
}

impl From<Token> for Term {
    fn from(token: Token) -> Self {
        Term::Node(token)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Integer(value)
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Self {
        Term::Integer(i64::from(value))
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Node(token) => write!(f, "{}", token),
            Term::Integer(value) => write!(f, "{}", value),
        }
    }
}
