use std::sync::{Arc, Mutex};

use crate::checklist::domain::{
    AgeGroup, Climate, Season, TravelMode, TravelType, TravelerProfile, TripParameters,
};
use crate::checklist::repository::{ChecklistRecord, ChecklistRepository, RepositoryError};
use crate::checklist::{ChecklistConfig, ChecklistEngine, ChecklistService};

pub(super) fn trip() -> TripParameters {
    TripParameters {
        origin_climate: Climate::Cold,
        destination_climate: Climate::Tropical,
        duration_days: 14,
        season: Season::Summer,
        travel_type: TravelType::Adventure,
        travel_mode: TravelMode::Air,
        traveler_demographics: Vec::new(),
        travel_start: None,
    }
}

pub(super) fn short_trip() -> TripParameters {
    TripParameters {
        duration_days: 3,
        ..trip()
    }
}

pub(super) fn traveler(age_group: AgeGroup, has_special_needs: bool) -> TravelerProfile {
    TravelerProfile {
        name: None,
        age_group,
        has_special_needs,
        notes: None,
    }
}

pub(super) fn engine() -> ChecklistEngine {
    ChecklistEngine::new(ChecklistConfig::default())
}

#[derive(Default)]
pub(super) struct RecordingRepository {
    records: Mutex<Vec<ChecklistRecord>>,
    fail_with: Option<String>,
}

impl RecordingRepository {
    pub(super) fn failing(reason: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    pub(super) fn records(&self) -> Vec<ChecklistRecord> {
        self.records.lock().expect("records mutex poisoned").clone()
    }
}

impl ChecklistRepository for RecordingRepository {
    fn save(&self, record: ChecklistRecord) -> Result<(), RepositoryError> {
        if let Some(reason) = &self.fail_with {
            return Err(RepositoryError::Unavailable(reason.clone()));
        }
        self.records
            .lock()
            .expect("records mutex poisoned")
            .push(record);
        Ok(())
    }
}

pub(super) fn service(
    repository: Arc<RecordingRepository>,
) -> Arc<ChecklistService<RecordingRepository>> {
    Arc::new(ChecklistService::new(repository, ChecklistConfig::default()))
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
