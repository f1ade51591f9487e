//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use compat_core::{CompatEngine, MemoryStore};
use parts_catalog::{Catalog, CpuRecord, MotherboardRecord, PerformanceTier, RawFact, RawObject, Token};

/// Path of the sample catalog shipped with the workspace.
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/catalog.toml")
}

/// A small catalog with no Intel/Premium pair.
pub fn fixture_catalog() -> Catalog {
    use PerformanceTier::*;

    Catalog::new()
        .with_cpu(CpuRecord::new("Ryzen_5_5600X", "AMD", "AM4", Intermediate, 6, 12))
        .with_cpu(CpuRecord::new("Ryzen_7_5800X", "AMD", "AM4", Intermediate, 8, 16))
        .with_cpu(CpuRecord::new("Ryzen_9_5950X", "AMD", "AM4", Premium, 16, 32))
        .with_cpu(CpuRecord::new("Core_i5_12400F", "Intel", "LGA1700", Intermediate, 6, 12))
        .with_cpu(CpuRecord::new("Core_i3_12100F", "Intel", "LGA1700", Entry, 4, 8))
        .with_motherboard(MotherboardRecord::new("B450_Tomahawk", "MSI", "AM4", Intermediate))
        .with_motherboard(MotherboardRecord::new("B550_Aorus_Elite", "Gigabyte", "AM4", Intermediate))
        .with_motherboard(MotherboardRecord::new("X570_Crosshair_VIII", "ASUS", "AM4", Premium))
        .with_motherboard(MotherboardRecord::new("B660M_Mortar", "MSI", "LGA1700", Intermediate))
        .with_motherboard(MotherboardRecord::new("H610M_E", "ASUS", "LGA1700", Entry))
        // A second manufacturer listing for one board.
        .with_fact(RawFact::new(
            "MSI",
            "manufactures",
            RawObject::Token(Token::new("X570_Crosshair_VIII")),
        ))
}

pub fn fixture_engine() -> CompatEngine {
    CompatEngine::new(MemoryStore::from_catalog(&fixture_catalog())).expect("fixture derivation")
}
