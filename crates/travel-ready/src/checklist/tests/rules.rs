use std::collections::HashSet;

use super::common::*;
use crate::checklist::domain::{AgeGroup, Climate, TravelMode, TravelType};
use crate::checklist::registry::CandidateRegistry;
use crate::checklist::rules::{
    apply_rule_groups, climate_items, travel_mode_items, travel_type_items, traveler_items,
    CORE_DOCUMENTS, DURATION_RULES,
};

const MODES: [TravelMode; 4] = [
    TravelMode::Air,
    TravelMode::Car,
    TravelMode::Train,
    TravelMode::Cruise,
];
const TYPES: [TravelType; 5] = [
    TravelType::Business,
    TravelType::Leisure,
    TravelType::Adventure,
    TravelType::Family,
    TravelType::Backpacking,
];
const CLIMATES: [Climate; 4] = [
    Climate::Tropical,
    Climate::Cold,
    Climate::Desert,
    Climate::Temperate,
];

#[test]
fn keyed_tables_have_expected_sizes() {
    assert_eq!(CORE_DOCUMENTS.len(), 9);
    for mode in MODES {
        let size = travel_mode_items(mode).len();
        assert!((4..=5).contains(&size), "{mode:?} has {size} items");
    }
    for travel_type in TYPES {
        let size = travel_type_items(travel_type).len();
        assert!((6..=7).contains(&size), "{travel_type:?} has {size} items");
    }
    for climate in CLIMATES {
        let size = climate_items(climate).len();
        assert!((4..=5).contains(&size), "{climate:?} has {size} items");
    }
}

#[test]
fn table_names_are_unique_within_each_table() {
    let tables = MODES
        .iter()
        .map(|mode| travel_mode_items(*mode))
        .chain(TYPES.iter().map(|kind| travel_type_items(*kind)))
        .chain(CLIMATES.iter().map(|climate| climate_items(*climate)))
        .chain(std::iter::once(CORE_DOCUMENTS));

    for table in tables {
        let names: HashSet<String> = table.iter().map(|item| item.name.to_lowercase()).collect();
        assert_eq!(names.len(), table.len());
    }
}

#[test]
fn duration_thresholds_are_independent() {
    for (days, expected) in [(6, 0), (7, 1), (14, 2), (30, 3)] {
        let unlocked = DURATION_RULES
            .iter()
            .filter(|(threshold, _)| days >= *threshold)
            .count();
        assert_eq!(unlocked, expected, "{days} day trip");
    }
}

#[test]
fn special_needs_senior_triggers_both_tables() {
    let tables = traveler_items(&traveler(AgeGroup::Senior, true));
    let names: Vec<&str> = tables
        .iter()
        .flat_map(|table| table.iter().map(|item| item.name))
        .collect();

    assert_eq!(
        names,
        vec![
            "Mobility aids or comfort cushions",
            "Prescription list copies",
            "Accessibility documentation",
            "Specialized equipment backups",
        ]
    );
    assert!(traveler_items(&traveler(AgeGroup::Teen, false)).is_empty());
}

#[test]
fn modest_attire_only_for_desert_and_tropical_destinations() {
    for climate in CLIMATES {
        let mut params = short_trip();
        params.destination_climate = climate;
        let mut registry = CandidateRegistry::new(&params);
        apply_rule_groups(&mut registry, &params);

        let expected = matches!(climate, Climate::Desert | Climate::Tropical);
        assert_eq!(
            registry.get("modest attire options").is_some(),
            expected,
            "{climate:?}"
        );
        assert!(registry.get("local etiquette notes").is_some());
        assert!(registry.get("key phrases in local language").is_some());
    }
}

#[test]
fn child_traveler_adds_comfort_items() {
    let mut params = short_trip();
    params.traveler_demographics = vec![traveler(AgeGroup::Child, false)];
    let mut registry = CandidateRegistry::new(&params);
    apply_rule_groups(&mut registry, &params);

    let headphones = registry.get("child headphones").expect("child rule applied");
    assert_eq!(headphones.category, "Entertainment");
    assert!(registry.get("comfort blanket or plush").is_some());
    assert!(registry.get("mobility aids or comfort cushions").is_none());
}
