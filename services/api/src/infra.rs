use maison_talent::pipeline::{MatchKey, MatchRepository, RepositoryError, UpsertOutcome};
use maison_talent::scoring::{Match, TalentId};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

type Records = HashMap<MatchKey, Match>;

/// Process-local match store keyed by talent/opportunity pair.
#[derive(Default, Clone)]
pub(crate) struct InMemoryMatchRepository {
    records: Arc<Mutex<Records>>,
}

impl InMemoryMatchRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Records>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("match store lock poisoned".to_string()))
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn upsert(&self, record: Match) -> Result<UpsertOutcome, RepositoryError> {
        let mut guard = self.lock()?;
        match guard.insert(MatchKey::of(&record), record) {
            Some(_) => Ok(UpsertOutcome::Updated),
            None => Ok(UpsertOutcome::Inserted),
        }
    }

    fn remove(&self, key: &MatchKey) -> Result<bool, RepositoryError> {
        let mut guard = self.lock()?;
        Ok(guard.remove(key).is_some())
    }

    fn fetch(&self, key: &MatchKey) -> Result<Option<Match>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(key).cloned())
    }

    fn for_talent(&self, talent_id: &TalentId) -> Result<Vec<Match>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .values()
            .filter(|record| &record.talent_id == talent_id)
            .cloned()
            .collect())
    }
}
