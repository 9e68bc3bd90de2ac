use super::common::*;
use crate::checklist::domain::{AgeGroup, Priority};
use crate::checklist::{ChecklistConfig, ChecklistEngine};

#[test]
fn analysis_reports_category_counts_for_every_item() {
    let analysis = engine().analyze(&trip());

    let counted: usize = analysis.category_counts.values().sum();
    assert_eq!(counted, analysis.items.len());
    assert_eq!(analysis.category_counts.get("Gear"), Some(&1));
}

#[test]
fn priorities_follow_score_thresholds() {
    let items = engine().generate(&trip());

    for item in &items {
        let expected = if item.score >= 0.9 {
            Priority::Critical
        } else if item.score >= 0.75 {
            Priority::High
        } else if item.score >= 0.5 {
            Priority::Medium
        } else {
            Priority::NiceToHave
        };
        assert_eq!(item.priority, expected, "{}", item.name);
    }
}

#[test]
fn long_trip_bonus_lifts_core_documents() {
    let items = engine().generate(&trip());

    let passport = items
        .iter()
        .find(|item| item.name == "Passport Or Government Id")
        .expect("core document present");
    assert_eq!(passport.score, 1.2);
    assert_eq!(passport.category, "Documents");
    assert_eq!(passport.priority, Priority::Critical);
}

#[test]
fn zero_day_trip_with_no_travelers_still_generates() {
    let mut params = short_trip();
    params.duration_days = 0;

    let items = engine().generate(&params);

    assert!(items.len() >= 50);
    assert!(!items.iter().any(|item| item.name == "Laundry Kit Or Detergent"));
}

#[test]
fn configured_bounds_are_respected() {
    let engine = ChecklistEngine::new(ChecklistConfig {
        minimum_items: 35,
        maximum_items: 35,
    });

    let items = engine.generate(&trip());

    assert_eq!(items.len(), 35);
    assert_eq!(engine.config().maximum_items, 35);
}

#[test]
fn rationale_accumulates_across_travelers() {
    let mut params = short_trip();
    params.traveler_demographics = vec![
        traveler(AgeGroup::Senior, false),
        traveler(AgeGroup::Child, true),
    ];

    let items = engine().generate(&params);

    let documentation = items
        .iter()
        .find(|item| item.name == "Accessibility Documentation")
        .expect("special needs rule applied");
    assert_eq!(
        documentation.rationale,
        vec!["Coordinate accommodations and assistance".to_string()]
    );
    assert!(items.iter().any(|item| item.name == "Child Headphones"));
    assert!(items
        .iter()
        .any(|item| item.name == "Mobility Aids Or Comfort Cushions"));
}
