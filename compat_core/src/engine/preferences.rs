//! Configuration search - builds the CPU/motherboard query from user preferences.
//!
//! Every preference maps to one [`Constraint`]. A constraint contributes its own
//! patterns and filters to the query; an absent preference contributes nothing,
//! so it can never narrow the result.

use parts_catalog::{ComponentKind, Token};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompatEngine;
use crate::store::{FactStore, Filter, Predicate, Query, TriplePattern, Var};

const CPU: &str = "cpu";
const BOARD: &str = "board";
const TIER: &str = "tier";
const CPU_MAKER: &str = "cpu_maker";
const BOARD_MAKER: &str = "board_maker";
const EXCLUDED_CPU_MAKER: &str = "excluded_cpu_maker";
const EXCLUDED_BOARD_MAKER: &str = "excluded_board_maker";
const CORES: &str = "cores";
const THREADS: &str = "threads";

/// Manufacturer preferences; each is a case-insensitive substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPreferences {
    pub cpu: Option<String>,
    pub motherboard: Option<String>,
    /// Brand that neither component may come from.
    pub excluded: Option<String>,
}

/// Performance preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePreferences {
    /// Case-insensitive substring of the shared tier.
    pub tier: Option<String>,
    pub min_cores: Option<u32>,
    pub min_threads: Option<u32>,
}

/// Everything a user may ask of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub brand: BrandPreferences,
    pub performance: PerformancePreferences,
}

impl Preferences {
    /// Build preferences from raw text as typed by a user.
    ///
    /// Blank fields mean "no preference"; counts that are not plain
    /// non-negative integers are dropped rather than rejected.
    pub fn from_raw(
        cpu_brand: &str,
        board_brand: &str,
        excluded_brand: &str,
        tier: &str,
        min_cores: &str,
        min_threads: &str,
    ) -> Self {
        Self {
            brand: BrandPreferences {
                cpu: parse_text(cpu_brand),
                motherboard: parse_text(board_brand),
                excluded: parse_text(excluded_brand),
            },
            performance: PerformancePreferences {
                tier: parse_text(tier),
                min_cores: parse_count(min_cores),
                min_threads: parse_count(min_threads),
            },
        }
    }

    /// The constraints these preferences impose, in a fixed order.
    pub fn constraints(&self) -> Vec<Constraint> {
        let brand = &self.brand;
        let performance = &self.performance;

        [
            brand.cpu.clone().map(Constraint::CpuBrand),
            brand.motherboard.clone().map(Constraint::MotherboardBrand),
            brand.excluded.clone().map(Constraint::ExcludedBrand),
            performance.tier.clone().map(Constraint::Tier),
            performance.min_cores.map(Constraint::MinCores),
            performance.min_threads.map(Constraint::MinThreads),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Trimmed text, or `None` when blank.
pub fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A count made only of ASCII digits, or `None`. Counts past `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(trimmed.parse().unwrap_or(u32::MAX))
}

/// A single, independently omittable restriction on configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    CpuBrand(String),
    MotherboardBrand(String),
    ExcludedBrand(String),
    Tier(String),
    MinCores(u32),
    MinThreads(u32),
}

impl Constraint {
    /// Add this constraint's patterns and filters to a query.
    pub fn apply(&self, query: &mut Query) {
        match self {
            Constraint::CpuBrand(brand) => {
                query.push_pattern(manufactures(CPU_MAKER, CPU));
                query.push_filter(Filter::contains_ignore_case(Var::new(CPU_MAKER), brand));
            }
            Constraint::MotherboardBrand(brand) => {
                query.push_pattern(manufactures(BOARD_MAKER, BOARD));
                query.push_filter(Filter::contains_ignore_case(Var::new(BOARD_MAKER), brand));
            }
            Constraint::ExcludedBrand(brand) => {
                query.push_filter(excluded_maker(EXCLUDED_CPU_MAKER, CPU, brand));
                query.push_filter(excluded_maker(EXCLUDED_BOARD_MAKER, BOARD, brand));
            }
            Constraint::Tier(tier) => {
                query.push_filter(Filter::contains_ignore_case(Var::new(TIER), tier));
            }
            Constraint::MinCores(min) => {
                query.push_pattern(TriplePattern::new(Var::new(CPU), Predicate::CoreCount, Var::new(CORES)));
                query.push_filter(Filter::AtLeast {
                    var: Var::new(CORES),
                    min: i64::from(*min),
                });
            }
            Constraint::MinThreads(min) => {
                query.push_pattern(TriplePattern::new(Var::new(CPU), Predicate::ThreadCount, Var::new(THREADS)));
                query.push_filter(Filter::AtLeast {
                    var: Var::new(THREADS),
                    min: i64::from(*min),
                });
            }
        }
    }
}

fn manufactures(maker: &str, component: &str) -> TriplePattern {
    TriplePattern::new(Var::new(maker), Predicate::Manufactures, Var::new(component))
}

/// No manufacturer of `component` may match `brand`.
fn excluded_maker(maker: &str, component: &str, brand: &str) -> Filter {
    Filter::NotExists {
        patterns: vec![manufactures(maker, component)],
        filters: vec![Filter::contains_ignore_case(Var::new(maker), brand)],
    }
}

/// Compatible, tier-matched CPU/motherboard pairs restricted by the given constraints.
pub fn configuration_query(constraints: &[Constraint]) -> Query {
    let mut query = Query::new()
        .with_pattern(TriplePattern::new(Var::new(CPU), Predicate::Type, ComponentKind::Cpu.as_token()))
        .with_pattern(TriplePattern::new(
            Var::new(BOARD),
            Predicate::Type,
            ComponentKind::MotherBoard.as_token(),
        ))
        .with_pattern(TriplePattern::new(Var::new(CPU), Predicate::CompatibleWith, Var::new(BOARD)))
        .with_pattern(TriplePattern::new(Var::new(CPU), Predicate::PerformanceTier, Var::new(TIER)))
        .with_pattern(TriplePattern::new(Var::new(BOARD), Predicate::PerformanceTier, Var::new(TIER)))
        .selecting([Var::new(CPU), Var::new(BOARD)])
        .distinct();

    for constraint in constraints {
        constraint.apply(&mut query);
    }
    query
}

/// A suggested CPU and motherboard pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Configuration {
    pub cpu: Token,
    pub motherboard: Token,
}

impl<S: FactStore> CompatEngine<S> {
    /// Find every configuration satisfying the preferences, in store order.
    pub fn find_configurations(&self, preferences: &Preferences) -> Vec<Configuration> {
        let constraints = preferences.constraints();
        debug!(?constraints, "searching configurations");

        self.run("find_configurations", &configuration_query(&constraints))
            .iter()
            .filter_map(|row| {
                Some(Configuration {
                    cpu: row.node(CPU)?.clone(),
                    motherboard: row.node(BOARD)?.clone(),
                })
            })
            .collect()
    }
}
