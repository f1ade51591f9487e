//! The catalog - every component record known to the system.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::{CatalogError, CpuRecord, MotherboardRecord, Token};

/// Object position of a free-form fact: either a node token or an integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawObject {
    Integer(i64),
    Token(Token),
}

/// A free-form subject-predicate-object statement.
///
/// Used for anything the record sections cannot express, such as a second
/// manufacturer for a component or custom predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFact {
    pub subject: Token,
    pub predicate: String,
    pub object: RawObject,
}

impl RawFact {
    pub fn new(subject: impl Into<Token>, predicate: impl Into<String>, object: RawObject) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// The complete dataset as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "cpu")]
    pub cpus: Vec<CpuRecord>,

    #[serde(default, rename = "motherboard")]
    pub motherboards: Vec<MotherboardRecord>,

    #[serde(default, rename = "fact")]
    pub facts: Vec<RawFact>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a catalog file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text)?,
            Some("json") => Self::from_json_str(&text)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(
            path = %path.display(),
            cpus = catalog.cpus.len(),
            motherboards = catalog.motherboards.len(),
            facts = catalog.facts.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Add a CPU record.
    pub fn with_cpu(mut self, cpu: CpuRecord) -> Self {
        self.cpus.push(cpu);
        self
    }

    /// Add a motherboard record.
    pub fn with_motherboard(mut self, motherboard: MotherboardRecord) -> Self {
        self.motherboards.push(motherboard);
        self
    }

    /// Add a free-form fact.
    pub fn with_fact(mut self, fact: RawFact) -> Self {
        self.facts.push(fact);
        self
    }

    /// Get a CPU record by name.
    pub fn cpu(&self, name: &Token) -> Option<&CpuRecord> {
        self.cpus.iter().find(|cpu| &cpu.name == name)
    }

    /// Get a motherboard record by name.
    pub fn motherboard(&self, name: &Token) -> Option<&MotherboardRecord> {
        self.motherboards.iter().find(|mb| &mb.name == name)
    }

    /// Total number of component records.
    pub fn component_count(&self) -> usize {
        self.cpus.len() + self.motherboards.len()
    }
}
