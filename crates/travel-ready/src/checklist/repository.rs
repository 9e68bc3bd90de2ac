use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ChecklistResponse, TripParameters};

/// Trip input paired with the checklist generated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistRecord {
    pub trip: TripParameters,
    pub response: ChecklistResponse,
    pub generated_at: DateTime<Utc>,
}

/// Write-only store port for generated checklists.
pub trait ChecklistRepository: Send + Sync {
    fn save(&self, record: ChecklistRecord) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
