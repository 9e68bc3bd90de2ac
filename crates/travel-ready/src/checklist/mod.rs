//! Packing checklist rule engine and the service plumbing around it.

mod config;
pub mod domain;
mod padding;
mod registry;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::{ChecklistConfig, DEFAULT_MAXIMUM_ITEMS, DEFAULT_MINIMUM_ITEMS};
pub use domain::{
    AgeGroup, ChecklistItem, ChecklistResponse, Climate, Priority, Season, TravelMode,
    TravelType, TravelerProfile, TripParameters, TripValidationError,
};
pub use padding::PADDING_POOL;
pub use repository::{ChecklistRecord, ChecklistRepository, RepositoryError};
pub use router::checklist_router;
pub use service::{ChecklistService, ChecklistServiceError};

use std::collections::BTreeMap;

use registry::CandidateRegistry;
use tracing::debug;

/// Stateless engine expanding trip parameters into a ranked checklist.
#[derive(Debug, Clone, Default)]
pub struct ChecklistEngine {
    config: ChecklistConfig,
}

impl ChecklistEngine {
    pub fn new(config: ChecklistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    pub fn generate(&self, params: &TripParameters) -> Vec<ChecklistItem> {
        self.analyze(params).items
    }

    /// Runs the pipeline and keeps the per-category counts alongside the items.
    pub fn analyze(&self, params: &TripParameters) -> ChecklistAnalysis {
        let mut registry = CandidateRegistry::new(params);

        rules::apply_rule_groups(&mut registry, params);
        let rule_items = registry.len();

        padding::ensure_minimum_items(&mut registry, &self.config);
        debug!(
            rule_items,
            total_items = registry.len(),
            destination = params.destination_climate.label(),
            "checklist candidates registered"
        );

        let category_counts = registry.category_counts().clone();
        ChecklistAnalysis {
            items: registry.into_prioritized(),
            category_counts,
        }
    }
}

/// Engine output together with the number of distinct items per category.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistAnalysis {
    pub items: Vec<ChecklistItem>,
    pub category_counts: BTreeMap<String, usize>,
}
