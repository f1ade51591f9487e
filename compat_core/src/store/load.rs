//! Conversion of catalog records into facts.

use parts_catalog::{Catalog, ComponentKind, RawObject};

use super::{Fact, Predicate, Term};

/// Expand every record of a catalog into the facts describing it.
///
/// CPU records yield type, socket, tier, core, thread and manufacturer facts;
/// motherboard records yield type, socket, tier and manufacturer facts. Free-form
/// facts are appended as written.
pub fn catalog_facts(catalog: &Catalog) -> Vec<Fact> {
    let mut facts = Vec::with_capacity(catalog.cpus.len() * 6 + catalog.motherboards.len() * 4 + catalog.facts.len());

    for cpu in &catalog.cpus {
        facts.push(Fact::typed(cpu.name.clone(), ComponentKind::Cpu.as_token()));
        facts.push(Fact::new(cpu.name.clone(), Predicate::UsesSocket, cpu.socket.clone()));
        facts.push(Fact::new(cpu.name.clone(), Predicate::PerformanceTier, cpu.tier.clone()));
        facts.push(Fact::new(cpu.name.clone(), Predicate::CoreCount, cpu.cores));
        facts.push(Fact::new(cpu.name.clone(), Predicate::ThreadCount, cpu.threads));
        facts.push(Fact::manufactures(cpu.manufacturer.clone(), cpu.name.clone()));
    }

    for mb in &catalog.motherboards {
        facts.push(Fact::typed(mb.name.clone(), ComponentKind::MotherBoard.as_token()));
        facts.push(Fact::new(mb.name.clone(), Predicate::HasSocket, mb.socket.clone()));
        facts.push(Fact::new(mb.name.clone(), Predicate::PerformanceTier, mb.tier.clone()));
        facts.push(Fact::manufactures(mb.manufacturer.clone(), mb.name.clone()));
    }

    for raw in &catalog.facts {
        let object = match &raw.object {
            RawObject::Integer(value) => Term::Integer(*value),
            RawObject::Token(token) => Term::Node(token.clone()),
        };
        facts.push(Fact::new(raw.subject.clone(), Predicate::from_name(&raw.predicate), object));
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_catalog::{CpuRecord, MotherboardRecord, PerformanceTier, RawFact, Token};

    #[test]
    fn test_cpu_record_expansion() {
        let catalog = Catalog::new().with_cpu(CpuRecord::new(
            "Ryzen_5_5600X",
            "AMD",
            "AM4",
            PerformanceTier::Intermediate,
            6,
            12,
        ));
        let facts = catalog_facts(&catalog);

        assert_eq!(facts.len(), 6);
        assert!(facts.contains(&Fact::new("Ryzen_5_5600X", Predicate::UsesSocket, Term::node("AM4"))));
        assert!(facts.contains(&Fact::new("Ryzen_5_5600X", Predicate::ThreadCount, Term::Integer(12))));
        assert!(facts.contains(&Fact::manufactures("AMD", "Ryzen_5_5600X")));
    }

    #[test]
    fn test_motherboard_uses_has_socket() {
        let catalog = Catalog::new().with_motherboard(MotherboardRecord::new(
            "B450_Tomahawk",
            "MSI",
            "AM4",
            PerformanceTier::Intermediate,
        ));
        let facts = catalog_facts(&catalog);

        assert_eq!(facts.len(), 4);
        assert!(facts.contains(&Fact::new("B450_Tomahawk", Predicate::HasSocket, Term::node("AM4"))));
        assert!(!facts.iter().any(|f| f.predicate == Predicate::UsesSocket));
    }

    #[test]
    fn test_raw_facts_pass_through() {
        let catalog = Catalog::new()
            .with_fact(RawFact::new("ASRock", "manufactures", RawObject::Token(Token::new("B450_Tomahawk"))))
            .with_fact(RawFact::new("Ryzen_5_5600X", "tdpWatts", RawObject::Integer(65)));
        let facts = catalog_facts(&catalog);

        assert_eq!(facts[0], Fact::manufactures("ASRock", "B450_Tomahawk"));
        assert_eq!(
            facts[1],
            Fact::new("Ryzen_5_5600X", Predicate::Custom("tdpWatts".into()), Term::Integer(65))
        );
    }
}
