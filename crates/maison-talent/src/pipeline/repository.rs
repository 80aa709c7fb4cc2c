use serde::{Deserialize, Serialize};

use crate::scoring::{Match, OpportunityId, TalentId};

/// Composite key enforcing one persisted match per pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    pub talent_id: TalentId,
    pub opportunity_id: OpportunityId,
}

impl MatchKey {
    pub fn new(talent_id: TalentId, opportunity_id: OpportunityId) -> Self {
        Self {
            talent_id,
            opportunity_id,
        }
    }

    pub fn of(record: &Match) -> Self {
        Self::new(record.talent_id.clone(), record.opportunity_id.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Storage abstraction for match records. Implementations must upsert on
/// [`MatchKey`] so that a pair never has more than one record.
pub trait MatchRepository: Send + Sync {
    fn upsert(&self, record: Match) -> Result<UpsertOutcome, RepositoryError>;
    fn remove(&self, key: &MatchKey) -> Result<bool, RepositoryError>;
    fn fetch(&self, key: &MatchKey) -> Result<Option<Match>, RepositoryError>;
    fn for_talent(&self, talent_id: &TalentId) -> Result<Vec<Match>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
