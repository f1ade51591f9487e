//! Opaque identifiers for graph nodes.

use serde::{Deserialize, Serialize};

/// Identifier of a node in the catalog: a component, a manufacturer, a socket or a tier.
///
/// Tokens never contain spaces. User-facing text is converted with
/// [`Token::from_display`] and rendered back with [`Token::display_name`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Create a token from raw text, replacing any whitespace run with an underscore.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::from_display(raw.as_ref())
    }

    /// Convert human-typed text ("Ryzen 5 5600X") into a token ("Ryzen_5_5600X").
    pub fn from_display(text: &str) -> Self {
        Self(text.split_whitespace().collect::<Vec<_>>().join("_"))
    }

    /// Parse optional user input: blank text means "no value".
    pub fn parse_optional(text: &str) -> Option<Self> {
        let token = Self::from_display(text);
        (!token.0.is_empty()).then_some(token)
    }

    /// The raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form with underscores rendered as spaces.
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self::from_display(&raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self::from_display(raw)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
