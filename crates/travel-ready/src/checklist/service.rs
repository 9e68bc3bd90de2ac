use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ChecklistResponse, TripParameters, TripValidationError};
use super::repository::{ChecklistRecord, ChecklistRepository, RepositoryError};
use super::{ChecklistConfig, ChecklistEngine};

/// Service validating trips, running the engine, and recording the result.
pub struct ChecklistService<R> {
    engine: Arc<ChecklistEngine>,
    repository: Arc<R>,
}

impl<R> ChecklistService<R>
where
    R: ChecklistRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ChecklistConfig) -> Self {
        Self {
            engine: Arc::new(ChecklistEngine::new(config)),
            repository,
        }
    }

    /// Build a checklist without touching the repository.
    pub fn preview(
        &self,
        trip: &TripParameters,
    ) -> Result<ChecklistResponse, ChecklistServiceError> {
        trip.validate()?;
        let items = self.engine.generate(trip);
        Ok(ChecklistResponse::new(trip, items))
    }

    /// Build a checklist and persist the trip/response pair.
    pub fn generate(
        &self,
        trip: TripParameters,
    ) -> Result<ChecklistResponse, ChecklistServiceError> {
        let response = self.preview(&trip)?;

        info!(
            destination = trip.destination_climate.label(),
            duration_days = trip.duration_days,
            items = response.items.len(),
            "checklist generated"
        );

        self.repository.save(ChecklistRecord {
            trip,
            response: response.clone(),
            generated_at: Utc::now(),
        })?;

        Ok(response)
    }
}

/// Error raised by the checklist service.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistServiceError {
    #[error(transparent)]
    InvalidTrip(#[from] TripValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
