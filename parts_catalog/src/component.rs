//! Component definitions for the catalog.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Token;

/// The two kinds of component the compatibility model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "CPU")]
    Cpu,
    MotherBoard,
}

impl ComponentKind {
    /// Type token used for this kind in the fact store.
    pub fn as_token(&self) -> Token {
        Token::new(self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Cpu => "CPU",
            ComponentKind::MotherBoard => "MotherBoard",
        }
    }

    /// Resolve a type token back into a kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        token.as_str().parse().ok()
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(ComponentKind::Cpu),
            "motherboard" | "mb" | "board" => Ok(ComponentKind::MotherBoard),
            other => Err(format!("unknown component kind '{other}'")),
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance tiers shared by CPUs and motherboards of comparable class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Entry,
    Intermediate,
    Advanced,
    Premium,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Entry,
        PerformanceTier::Intermediate,
        PerformanceTier::Advanced,
        PerformanceTier::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceTier::Entry => "Entry",
            PerformanceTier::Intermediate => "Intermediate",
            PerformanceTier::Advanced => "Advanced",
            PerformanceTier::Premium => "Premium",
        }
    }
}

impl From<PerformanceTier> for Token {
    fn from(tier: PerformanceTier) -> Self {
        Token::new(tier.as_str())
    }
}

impl FromStr for PerformanceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PerformanceTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown performance tier '{s}'"))
    }
}

impl std::fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CPU entry in the catalog.
///
/// Tier and socket are kept as tokens rather than validated enums: the dataset
/// is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuRecord {
    pub name: Token,
    pub manufacturer: Token,
    pub socket: Token,
    pub tier: Token,
    pub cores: u32,
    pub threads: u32,
}

impl CpuRecord {
    pub fn new(
        name: impl Into<Token>,
        manufacturer: impl Into<Token>,
        socket: impl Into<Token>,
        tier: PerformanceTier,
        cores: u32,
        threads: u32,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            socket: socket.into(),
            tier: tier.into(),
            cores,
            threads,
        }
    }
}

/// A motherboard entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardRecord {
    pub name: Token,
    pub manufacturer: Token,
    pub socket: Token,
    pub tier: Token,
}

impl MotherboardRecord {
    pub fn new(
        name: impl Into<Token>,
        manufacturer: impl Into<Token>,
        socket: impl Into<Token>,
        tier: PerformanceTier,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            socket: socket.into(),
            tier: tier.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_through_token() {
        for kind in [ComponentKind::Cpu, ComponentKind::MotherBoard] {
            assert_eq!(ComponentKind::from_token(&kind.as_token()), Some(kind));
        }
        assert_eq!(ComponentKind::from_token(&Token::new("GPU")), None);
    }

    #[test]
    fn test_tier_parse_is_case_insensitive() {
        assert_eq!("premium".parse::<PerformanceTier>(), Ok(PerformanceTier::Premium));
        assert_eq!(" Entry ".parse::<PerformanceTier>(), Ok(PerformanceTier::Entry));
        assert!("Ultra".parse::<PerformanceTier>().is_err());
    }

    #[test]
    fn test_cpu_record_builder() {
        let cpu = CpuRecord::new("Ryzen 5 5600X", "AMD", "AM4", PerformanceTier::Intermediate, 6, 12);
        assert_eq!(cpu.name.as_str(), "Ryzen_5_5600X");
        assert_eq!(cpu.tier, Token::new("Intermediate"));
        assert_eq!((cpu.cores, cpu.threads), (6, 12));
    }
}
