use super::domain::{AgeGroup, Climate, TravelMode, TravelType, TravelerProfile, TripParameters};
use super::registry::CandidateRegistry;

/// Static proposal contributed by a rule group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleItem {
    pub name: &'static str,
    pub category: &'static str,
    pub score: f64,
    pub rationale: &'static [&'static str],
}

pub(crate) const fn item(
    name: &'static str,
    category: &'static str,
    score: f64,
    rationale: &'static [&'static str],
) -> RuleItem {
    RuleItem {
        name,
        category,
        score,
        rationale,
    }
}

pub const CORE_DOCUMENTS: &[RuleItem] = &[
    item("Passport or government ID", "Documents", 1.0, &["Required for identification and border control"]),
    item("Boarding passes or tickets", "Documents", 1.0, &["Needed for transit checkpoints"]),
    item("Travel insurance details", "Documents", 0.9, &["Supports emergencies"]),
    item("Payment cards and local currency", "Finance", 0.9, &["Covers purchases across modes"]),
    item("Mobile phone and charger", "Electronics", 0.95, &["Core communication device"]),
    item("Medications and prescriptions", "Health", 0.95, &["Maintain health regimen"]),
    item("Basic toiletries", "Personal Care", 0.85, &["Daily hygiene essentials"]),
    item("Reusable water bottle", "Health", 0.65, &["Hydration on the go"]),
    item("Weather-ready outerwear", "Clothing", 0.8, &["Quick adaptation to changing conditions"]),
];

const AIR_ITEMS: &[RuleItem] = &[
    item("TSA-compliant liquids bag", "Documents", 0.8, &["Airport security ready"]),
    item("Passport and ID holder", "Documents", 0.85, &["Speed through checkpoints"]),
    item("Neck pillow and eye mask", "Comfort", 0.65, &["Rest on flight"]),
    item("Charging cables for airport", "Electronics", 0.7, &["Leverage terminal outlets"]),
    item("Offline boarding passes", "Documents", 0.75, &["Access without connectivity"]),
];

const CAR_ITEMS: &[RuleItem] = &[
    item("Road trip snacks", "Food", 0.55, &["Sustain energy while driving"]),
    item("Car charger and mounts", "Electronics", 0.6, &["Navigation power"]),
    item("Emergency car kit", "Safety", 0.8, &["Breakdown readiness"]),
    item("Spare tire check and tools", "Safety", 0.7, &["Road safety"]),
    item("Cooler for perishables", "Food", 0.55, &["Keep items fresh"]),
];

const TRAIN_ITEMS: &[RuleItem] = &[
    item("Comfortable walking shoes", "Clothing", 0.65, &["Station transfers"]),
    item("Motion sickness medication", "Health", 0.6, &["Comfort on curves"]),
    item("Cabin-friendly layers", "Clothing", 0.55, &["Varying car temperatures"]),
    item("Power strip for shared outlets", "Electronics", 0.6, &["Limited sockets"]),
];

const CRUISE_ITEMS: &[RuleItem] = &[
    item("Motion sickness bands or meds", "Health", 0.7, &["Open water stability"]),
    item("Cruise casual and formal wear", "Clothing", 0.65, &["Theme nights"]),
    item("Cabin power strip", "Electronics", 0.6, &["Few outlets"]),
    item("Deck-friendly footwear", "Clothing", 0.6, &["Non-slip surfaces"]),
];

const BUSINESS_ITEMS: &[RuleItem] = &[
    item("Tailored suits or professional outfits", "Clothing", 0.95, &["Align with formal meetings"]),
    item("Dress shirts per meeting", "Clothing", 0.9, &["Fresh attire for each session"]),
    item("Formal shoes and belt", "Clothing", 0.85, &["Completes professional look"]),
    item("Laptop with charger", "Electronics", 1.0, &["Work execution and presentations"]),
    item("Presentation clicker and adapters", "Electronics", 0.8, &["Smooth presentation delivery"]),
    item("Business cards and portfolio", "Documents", 0.9, &["Networking support"]),
    item("Printed contracts and meeting notes", "Documents", 0.85, &["Reference materials"]),
];

const LEISURE_ITEMS: &[RuleItem] = &[
    item("Comfortable casual outfits", "Clothing", 0.85, &["Relaxed exploration"]),
    item("Walking sneakers", "Clothing", 0.8, &["Long city days"]),
    item("Camera or smartphone gimbal", "Electronics", 0.75, &["Capture experiences"]),
    item("Books or games", "Entertainment", 0.6, &["Downtime enjoyment"]),
    item("Snacks for transit", "Food", 0.55, &["Maintain energy en route"]),
    item("Souvenir budget tracker", "Finance", 0.5, &["Manage discretionary spending"]),
];

const ADVENTURE_ITEMS: &[RuleItem] = &[
    item("Activity-specific gear", "Gear", 1.0, &["Core for adventure goals"]),
    item("Hiking boots with grip", "Clothing", 0.95, &["Rough terrain stability"]),
    item("Comprehensive first aid kit", "Health", 0.95, &["Respond to injuries"]),
    item("Weatherproof technical layers", "Clothing", 0.9, &["Protection from elements"]),
    item("GPS device and offline maps", "Navigation", 0.85, &["Route-finding"]),
    item("Emergency whistle and multi-tool", "Safety", 0.85, &["Rapid response"]),
    item("Headlamp or flashlight", "Safety", 0.8, &["Low-light visibility"]),
];

const FAMILY_ITEMS: &[RuleItem] = &[
    item("Diapers or pull-ups", "Childcare", 0.95, &["Young child essentials"]),
    item("Formula and baby bottles", "Childcare", 0.9, &["Infant feeding"]),
    item("Toys and comfort items", "Childcare", 0.75, &["Reduce travel stress"]),
    item("Snacks and baby food", "Food", 0.85, &["Keep children fed"]),
    item("Stroller or carrier", "Childcare", 0.8, &["Mobility support"]),
    item("Child-safe medications", "Health", 0.85, &["Address minor ailments"]),
    item("Car seat or booster", "Childcare", 0.8, &["Safety for transport"]),
];

const BACKPACKING_ITEMS: &[RuleItem] = &[
    item("Ultralight backpack", "Gear", 0.9, &["Comfort over distance"]),
    item("Hostel lock and sleep sheet", "Safety", 0.8, &["Shared lodging security"]),
    item("Compact toiletries", "Personal Care", 0.7, &["Space efficiency"]),
    item("Multi-use clothing layers", "Clothing", 0.8, &["Versatility"]),
    item("Budget tracking app", "Finance", 0.65, &["Control expenses"]),
    item("Microfiber towel", "Personal Care", 0.7, &["Quick dry travel"]),
    item("Water purification tablets", "Health", 0.75, &["Safe hydration"]),
];

const TROPICAL_ITEMS: &[RuleItem] = &[
    item("Broad-spectrum sunscreen", "Health", 0.9, &["UV protection"]),
    item("Light breathable clothing", "Clothing", 0.8, &["Heat management"]),
    item("Insect repellent", "Health", 0.85, &["Mosquito-heavy regions"]),
    item("Packable rain jacket", "Clothing", 0.75, &["Sudden showers"]),
    item("Humidity-safe toiletries", "Personal Care", 0.65, &["Prevent discomfort"]),
];

const COLD_ITEMS: &[RuleItem] = &[
    item("Insulated jacket", "Clothing", 0.95, &["Thermal protection"]),
    item("Base layers and thermals", "Clothing", 0.9, &["Effective layering"]),
    item("Gloves and knit hat", "Clothing", 0.85, &["Protect extremities"]),
    item("Moisturizer and lip balm", "Personal Care", 0.7, &["Prevent dryness"]),
    item("Snow traction accessories", "Safety", 0.65, &["Icy surfaces"]),
];

const DESERT_ITEMS: &[RuleItem] = &[
    item("Sun hood or wide-brim hat", "Clothing", 0.9, &["Direct sun protection"]),
    item("Breathable long sleeves", "Clothing", 0.8, &["Minimize heat gain"]),
    item("Hydration bladder", "Health", 0.85, &["Carry sufficient water"]),
    item("Electrolyte tablets", "Health", 0.7, &["Prevent dehydration"]),
    item("Cooling towel", "Personal Care", 0.65, &["Temperature relief"]),
];

const TEMPERATE_ITEMS: &[RuleItem] = &[
    item("Layerable mid-weight jacket", "Clothing", 0.8, &["Adaptable conditions"]),
    item("Compact umbrella", "Clothing", 0.65, &["Unpredictable showers"]),
    item("Versatile footwear", "Clothing", 0.7, &["City and trail ready"]),
    item("Neutral accessories", "Clothing", 0.55, &["Blend with varied outfits"]),
];

/// Minimum trip length paired with the item it unlocks.
pub const DURATION_RULES: &[(u32, RuleItem)] = &[
    (7, item("Laundry kit or detergent", "Personal Care", 0.55, &["Wash clothing during longer stays"])),
    (14, item("Extra rotation of outfits", "Clothing", 0.65, &["Reduce wear frequency"])),
    (21, item("Supplemental medication supply", "Health", 0.7, &["Maintain regimen for long trips"])),
];

const SENIOR_ITEMS: &[RuleItem] = &[
    item("Mobility aids or comfort cushions", "Accessibility", 0.7, &["Support for senior travelers"]),
    item("Prescription list copies", "Health", 0.75, &["Share with medical staff if needed"]),
];

const SPECIAL_NEEDS_ITEMS: &[RuleItem] = &[
    item("Accessibility documentation", "Accessibility", 0.8, &["Coordinate accommodations and assistance"]),
    item("Specialized equipment backups", "Accessibility", 0.78, &["Redundancy for critical aids"]),
];

const CHILD_ITEMS: &[RuleItem] = &[
    item("Comfort blanket or plush", "Childcare", 0.7, &["Reduce anxiety during transit"]),
    item("Child headphones", "Entertainment", 0.6, &["Protect hearing while providing media"]),
];

const MODEST_ATTIRE: RuleItem = item(
    "Modest attire options",
    "Cultural",
    0.6,
    &["Respectful clothing for cultural norms"],
);

const CULTURAL_BASICS: &[RuleItem] = &[
    item("Local etiquette notes", "Cultural", 0.55, &["Prepared for greetings and tipping norms"]),
    item("Key phrases in local language", "Cultural", 0.6, &["Smooth daily interactions"]),
];

pub fn travel_mode_items(mode: TravelMode) -> &'static [RuleItem] {
    match mode {
        TravelMode::Air => AIR_ITEMS,
        TravelMode::Car => CAR_ITEMS,
        TravelMode::Train => TRAIN_ITEMS,
        TravelMode::Cruise => CRUISE_ITEMS,
    }
}

pub fn travel_type_items(travel_type: TravelType) -> &'static [RuleItem] {
    match travel_type {
        TravelType::Business => BUSINESS_ITEMS,
        TravelType::Leisure => LEISURE_ITEMS,
        TravelType::Adventure => ADVENTURE_ITEMS,
        TravelType::Family => FAMILY_ITEMS,
        TravelType::Backpacking => BACKPACKING_ITEMS,
    }
}

pub fn climate_items(climate: Climate) -> &'static [RuleItem] {
    match climate {
        Climate::Tropical => TROPICAL_ITEMS,
        Climate::Cold => COLD_ITEMS,
        Climate::Desert => DESERT_ITEMS,
        Climate::Temperate => TEMPERATE_ITEMS,
    }
}

/// Tables triggered by a single traveler, in evaluation order.
pub fn traveler_items(traveler: &TravelerProfile) -> Vec<&'static [RuleItem]> {
    let mut tables = Vec::new();
    if traveler.age_group == AgeGroup::Senior {
        tables.push(SENIOR_ITEMS);
    }
    if traveler.has_special_needs {
        tables.push(SPECIAL_NEEDS_ITEMS);
    }
    if traveler.age_group == AgeGroup::Child {
        tables.push(CHILD_ITEMS);
    }
    tables
}

fn requires_modest_attire(climate: Climate) -> bool {
    matches!(climate, Climate::Desert | Climate::Tropical)
}

/// Runs every rule group against the registry in their fixed order.
pub(crate) fn apply_rule_groups(registry: &mut CandidateRegistry<'_>, params: &TripParameters) {
    registry.register_all(CORE_DOCUMENTS);
    registry.register_all(travel_mode_items(params.travel_mode));
    registry.register_all(travel_type_items(params.travel_type));
    registry.register_all(climate_items(params.destination_climate));

    for (threshold, rule) in DURATION_RULES {
        if params.duration_days >= *threshold {
            registry.register(rule);
        }
    }

    for traveler in &params.traveler_demographics {
        for table in traveler_items(traveler) {
            registry.register_all(table);
        }
    }

    if requires_modest_attire(params.destination_climate) {
        registry.register(&MODEST_ATTIRE);
    }
    registry.register_all(CULTURAL_BASICS);
}
