use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Climate profile of a trip origin or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Climate {
    Tropical,
    Cold,
    Desert,
    Temperate,
}

impl Climate {
    pub fn label(self) -> &'static str {
        match self {
            Climate::Tropical => "tropical",
            Climate::Cold => "cold",
            Climate::Desert => "desert",
            Climate::Temperate => "temperate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Purpose of the trip, driving the travel-type rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelType {
    Business,
    Leisure,
    Adventure,
    Family,
    Backpacking,
}

/// Primary means of transport, driving the travel-mode rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Air,
    Car,
    Train,
    Cruise,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Child,
    Teen,
    #[default]
    Adult,
    Senior,
}

/// One member of the travelling party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age_group: AgeGroup,
    #[serde(default)]
    pub has_special_needs: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Validated description of a trip handed to the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub origin_climate: Climate,
    pub destination_climate: Climate,
    pub duration_days: u32,
    pub season: Season,
    pub travel_type: TravelType,
    pub travel_mode: TravelMode,
    #[serde(default)]
    pub traveler_demographics: Vec<TravelerProfile>,
    #[serde(default)]
    pub travel_start: Option<NaiveDate>,
}

impl TripParameters {
    /// Request-level checks that the type system cannot express.
    ///
    /// The engine itself accepts a zero-day trip; only intake rejects it.
    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.duration_days == 0 {
            return Err(TripValidationError::NonPositiveDuration);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripValidationError {
    #[error("duration_days must be greater than zero")]
    NonPositiveDuration,
}

/// Importance bucket shown next to every checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    NiceToHave,
}

impl Priority {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Priority::Critical
        } else if score >= 0.75 {
            Priority::High
        } else if score >= 0.5 {
            Priority::Medium
        } else {
            Priority::NiceToHave
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::NiceToHave => "nice-to-have",
        }
    }
}

/// Final, immutable checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub category: String,
    pub score: f64,
    pub rationale: Vec<String>,
    pub priority: Priority,
}

/// Payload returned to API callers and persisted alongside the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub destination: Climate,
    pub trip_type: TravelType,
    pub travel_mode: TravelMode,
    pub climate: Climate,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistResponse {
    pub fn new(params: &TripParameters, items: Vec<ChecklistItem>) -> Self {
        Self {
            destination: params.destination_climate,
            trip_type: params.travel_type,
            travel_mode: params.travel_mode,
            climate: params.destination_climate,
            items,
        }
    }
}
