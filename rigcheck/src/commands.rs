//! Subcommand handlers. Each returns a [`Report`] with text and JSON renderings.

use parts_catalog::{ComponentKind, Token};
use serde_json::{json, Value};

use compat_core::{CompatEngine, Preferences};

/// Output of one subcommand.
pub struct Report {
    pub text: String,
    pub json: Value,
}

/// Display name of a component, falling back to its bare model name.
fn name(engine: &CompatEngine, component: &Token) -> String {
    engine
        .name_of(component)
        .unwrap_or_else(|| component.display_name())
}

pub fn configure(engine: &CompatEngine, preferences: &Preferences) -> Report {
    let configurations = engine.find_configurations(preferences);

    let text = if configurations.is_empty() {
        "No configuration meets your preferences.".to_string()
    } else {
        configurations
            .iter()
            .enumerate()
            .map(|(i, configuration)| {
                format!(
                    "PC {} - CPU: {} {};",
                    i + 1,
                    name(engine, &configuration.cpu),
                    name(engine, &configuration.motherboard)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    Report {
        text,
        json: json!({
            "preferences": preferences,
            "configurations": configurations,
        }),
    }
}

pub fn check(engine: &CompatEngine, cpu: Option<&str>, board: Option<&str>) -> Report {
    let cpu = cpu.and_then(Token::parse_optional);
    let board = board.and_then(Token::parse_optional);
    let compatible = engine.check_compatible(cpu.as_ref(), board.as_ref());

    Report {
        text: if compatible {
            "These components are compatible!".to_string()
        } else {
            "This build is not compatible!".to_string()
        },
        json: json!({ "cpu": cpu, "motherboard": board, "compatible": compatible }),
    }
}

pub fn recommend(
    engine: &CompatEngine,
    cpu: Option<&str>,
    board: Option<&str>,
    component: Option<&str>,
) -> Report {
    let target = match (
        cpu.and_then(Token::parse_optional),
        board.and_then(Token::parse_optional),
        component.and_then(Token::parse_optional),
    ) {
        (Some(cpu), _, _) => Some((cpu, ComponentKind::Cpu)),
        (None, Some(board), _) => Some((board, ComponentKind::MotherBoard)),
        (None, None, Some(component)) => engine
            .kind_of(&component)
            .map(|kind| (component, kind)),
        (None, None, None) => None,
    };

    let Some((component, kind)) = target else {
        return Report {
            text: "Please name at least one known component to base the recommendation on."
                .to_string(),
            json: json!({ "recommendations": [] }),
        };
    };

    let recommendations = engine.recommend(&component, kind);
    let text = if recommendations.is_empty() {
        "No compatible component found.".to_string()
    } else {
        let lines = recommendations
            .iter()
            .map(|recommendation| format!("\n- {}", name(engine, recommendation)));
        std::iter::once("Compatible components:".to_string()).chain(lines).collect()
    };

    Report {
        text,
        json: json!({
            "component": component,
            "kind": kind,
            "recommendations": recommendations,
        }),
    }
}

pub fn upgrades(engine: &CompatEngine, cpu: &str, board: Option<&str>) -> Report {
    let cpu = Token::parse_optional(cpu);
    let board = board.and_then(Token::parse_optional);
    let candidates = engine.rank_upgrades(cpu.as_ref(), board.as_ref());

    let text = if candidates.is_empty() {
        "No compatible upgrade found.".to_string()
    } else {
        let lines = candidates.iter().map(|candidate| {
            format!(
                "\n- {} ({} cores / {} threads)",
                name(engine, &candidate.cpu),
                candidate.cores,
                candidate.threads
            )
        });
        std::iter::once("Compatible upgrades:".to_string()).chain(lines).collect()
    };

    Report {
        text,
        json: json!({ "cpu": cpu, "motherboard": board, "upgrades": candidates }),
    }
}

pub fn describe(engine: &CompatEngine, component: &str) -> Report {
    let component = Token::from_display(component);
    let facts = engine.store().facts_about(&component);

    let mut text = name(engine, &component);
    if facts.is_empty() {
        text.push_str(": unknown component");
    }
    text.extend(
        facts
            .iter()
            .map(|fact| format!("\n  {} {}", fact.predicate, fact.object)),
    );

    Report {
        text,
        json: json!({
            "component": component,
            "name": engine.name_of(&component),
            "facts": facts,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compat_core::MemoryStore;
    use parts_catalog::{Catalog, CpuRecord, MotherboardRecord, PerformanceTier};
    use pretty_assertions::assert_eq;

    fn engine() -> CompatEngine {
        let tier = PerformanceTier::Intermediate;
        let catalog = Catalog::new()
            .with_cpu(CpuRecord::new("Ryzen_5_5600X", "AMD", "AM4", tier, 6, 12))
            .with_cpu(CpuRecord::new("Ryzen_7_5800X", "AMD", "AM4", tier, 8, 16))
            .with_motherboard(MotherboardRecord::new("B450_Tomahawk", "MSI", "AM4", tier));
        CompatEngine::new(MemoryStore::from_catalog(&catalog)).unwrap()
    }

    #[test]
    fn test_configure_text() {
        let report = configure(&engine(), &Preferences::from_raw("", "", "", "", "8", ""));
        assert_eq!(
            report.text,
            "PC 1 - CPU: AMD Ryzen 7 5800X MSI B450 Tomahawk;"
        );
        assert_eq!(report.json["configurations"][0]["cpu"], "Ryzen_7_5800X");
    }

    #[test]
    fn test_configure_lists_one_line_per_pc() {
        let report = configure(&engine(), &Preferences::from_raw("", "", "", "", "", ""));
        assert_eq!(
            report.text,
            "PC 1 - CPU: AMD Ryzen 5 5600X MSI B450 Tomahawk;\n\
             PC 2 - CPU: AMD Ryzen 7 5800X MSI B450 Tomahawk;"
        );
    }

    #[test]
    fn test_configure_empty() {
        let report = configure(&engine(), &Preferences::from_raw("Intel", "", "", "", "", ""));
        assert_eq!(report.text, "No configuration meets your preferences.");
    }

    #[test]
    fn test_check_accepts_spaces() {
        let report = check(&engine(), Some("Ryzen 5 5600X"), Some("B450 Tomahawk"));
        assert_eq!(report.json["compatible"], true);
        assert_eq!(report.text, "These components are compatible!");
    }

    #[test]
    fn test_recommend_by_detected_kind() {
        let report = recommend(&engine(), None, None, Some("B450 Tomahawk"));
        assert_eq!(
            report.text,
            "Compatible components:\n- AMD Ryzen 5 5600X\n- AMD Ryzen 7 5800X"
        );

        let unknown = recommend(&engine(), None, None, Some("Pentium 4"));
        assert!(unknown.text.starts_with("Please name"));
    }

    #[test]
    fn test_upgrades_text() {
        let report = upgrades(&engine(), "Ryzen 5 5600X", Some("B450 Tomahawk"));
        assert_eq!(
            report.text,
            "Compatible upgrades:\n- AMD Ryzen 7 5800X (8 cores / 16 threads)"
        );
    }

    #[test]
    fn test_describe_unknown() {
        let report = describe(&engine(), "Pentium 4");
        assert_eq!(report.text, "Pentium 4: unknown component");
    }
}
