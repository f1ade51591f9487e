//! Fact definitions - the triples held by the store.

use parts_catalog::Token;
use serde::{Deserialize, Serialize};

use super::{Predicate, Term};

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub subject: Token,
    pub predicate: Predicate,
    pub object: Term,
}

impl Fact {
    pub fn new(subject: impl Into<Token>, predicate: Predicate, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// `subject type kind`.
    pub fn typed(subject: impl Into<Token>, kind: Token) -> Self {
        Self::new(subject, Predicate::Type, kind)
    }

    /// `manufacturer manufactures component`.
    pub fn manufactures(manufacturer: impl Into<Token>, component: impl Into<Token>) -> Self {
        Self::new(manufacturer, Predicate::Manufactures, Term::node(component))
    }

    /// `a compatibleWith b`.
    pub fn compatible_with(a: impl Into<Token>, b: impl Into<Token>) -> Self {
        Self::new(a, Predicate::CompatibleWith, Term::node(b))
    }

    /// The same statement with subject and object swapped, if the object is a node.
    pub fn inverse(&self) -> Option<Self> {
        let object = self.object.as_node()?;
        Some(Self::new(
            object.clone(),
            self.predicate.clone(),
            Term::Node(self.subject.clone()),
        ))
    }

    /// Check if this fact mentions a token as subject or object.
    pub fn involves(&self, token: &Token) -> bool {
        &self.subject == token || self.object.as_node() == Some(token)
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
