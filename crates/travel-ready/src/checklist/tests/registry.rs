use super::common::*;
use crate::checklist::domain::Climate;
use crate::checklist::registry::{title_case, CandidateRegistry};

#[test]
fn adjustment_tiers_stack_for_long_trips() {
    let mut params = short_trip();
    assert_close(CandidateRegistry::new(&params).adjustment(), 0.0);

    params.duration_days = 10;
    assert_close(CandidateRegistry::new(&params).adjustment(), 0.2);

    params.duration_days = 21;
    assert_close(CandidateRegistry::new(&params).adjustment(), 0.6);

    params.origin_climate = Climate::Tropical;
    assert_close(CandidateRegistry::new(&params).adjustment(), 0.5);
}

#[test]
fn merge_keeps_highest_score_in_either_order() {
    let params = short_trip();

    let mut ascending = CandidateRegistry::new(&params);
    ascending.add_item("Rain shell", "Clothing", 0.4, &["light showers"]);
    ascending.add_item("Rain shell", "Clothing", 0.7, &["monsoon season"]);

    let mut descending = CandidateRegistry::new(&params);
    descending.add_item("Rain shell", "Clothing", 0.7, &["monsoon season"]);
    descending.add_item("Rain shell", "Clothing", 0.4, &["light showers"]);

    for registry in [&ascending, &descending] {
        let candidate = registry.get("rain shell").expect("candidate registered");
        assert_close(candidate.score, 0.7);
        assert_eq!(candidate.rationale.len(), 2);
        assert!(candidate.rationale.iter().any(|note| note == "light showers"));
        assert!(candidate.rationale.iter().any(|note| note == "monsoon season"));
    }
    assert_eq!(ascending.len(), 1);
}

#[test]
fn names_merge_case_insensitively_and_keep_first_category() {
    let params = short_trip();
    let mut registry = CandidateRegistry::new(&params);

    registry.add_item("Travel Pillow", "Comfort", 0.4, &["Neck support"]);
    registry.add_item("travel pillow", "Sleep", 0.6, &["Neck support", "Red-eye flights"]);

    let candidate = registry.get("TRAVEL PILLOW").expect("candidate registered");
    assert_eq!(candidate.category, "Comfort");
    assert_close(candidate.score, 0.6);
    assert_eq!(
        candidate.rationale,
        vec!["Neck support".to_string(), "Red-eye flights".to_string()]
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn category_counter_tracks_first_insertions_only() {
    let params = short_trip();
    let mut registry = CandidateRegistry::new(&params);

    registry.add_item("Sunscreen", "Health", 0.9, &["UV"]);
    registry.add_item("Sunscreen", "Personal Care", 0.9, &["UV"]);
    registry.add_item("Insect repellent", "Health", 0.8, &["Bugs"]);

    assert_eq!(registry.category_counts().get("Health"), Some(&2));
    assert_eq!(registry.category_counts().get("Personal Care"), None);
}

#[test]
fn prioritized_output_is_sorted_and_stable_for_ties() {
    let params = short_trip();
    let mut registry = CandidateRegistry::new(&params);

    registry.add_item("first tie", "Misc", 0.5, &[]);
    registry.add_item("top item", "Misc", 0.95, &[]);
    registry.add_item("second tie", "Misc", 0.5, &[]);

    let items = registry.into_prioritized();
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Top Item", "First Tie", "Second Tie"]);
}

#[test]
fn rounding_happens_before_priority_bucketing() {
    let mut params = short_trip();
    params.duration_days = 10;
    let mut registry = CandidateRegistry::new(&params);

    registry.add_item("Prescription list copies", "Health", 0.7, &[]);

    let items = registry.into_prioritized();
    assert_eq!(items[0].score, 0.9);
    assert_eq!(items[0].priority.label(), "critical");
}

#[test]
fn title_case_capitalizes_after_any_non_letter() {
    assert_eq!(title_case("tsa-compliant liquids bag"), "Tsa-Compliant Liquids Bag");
    assert_eq!(title_case("sim card or esim plan"), "Sim Card Or Esim Plan");
    assert_eq!(title_case("extra rotation of outfits"), "Extra Rotation Of Outfits");
}
