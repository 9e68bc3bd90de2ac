use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use travel_ready::checklist::{ChecklistRecord, ChecklistRepository, RepositoryError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local checklist store; durable persistence lives outside this service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryChecklistRepository {
    records: Arc<Mutex<Vec<ChecklistRecord>>>,
}

impl ChecklistRepository for InMemoryChecklistRepository {
    fn save(&self, record: ChecklistRecord) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("checklist store poisoned".to_string()))?;
        guard.push(record);
        Ok(())
    }
}

impl InMemoryChecklistRepository {
    #[cfg(test)]
    pub(crate) fn records(&self) -> Vec<ChecklistRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
