use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::pipeline::repository::{MatchKey, MatchRepository, RepositoryError, UpsertOutcome};
use crate::pipeline::{matching_router, TalentMatchingService};
use crate::scoring::{
    CareerPreferences, CompetencyScores, Division, ExperienceBlock, ExperienceBlockType, Match,
    MatchConfig, MobilityRadius, Opportunity, OpportunityId, RoleLevel, Store, StoreTier, Talent,
    TalentId, TimelineStance,
};

pub(super) fn talent() -> Talent {
    Talent {
        id: TalentId("tal-100".to_string()),
        current_role_level: Some(RoleLevel::L2),
        current_store_tier: Some(StoreTier::T2),
        divisions_expertise: BTreeSet::from([Division::LeatherGoods]),
        years_in_luxury: 5.0,
        current_location: Some("London".to_string()),
        assessment_summary: None,
        career_preferences: Some(CareerPreferences {
            timeline: TimelineStance::ActivelyLooking,
            target_role_levels: BTreeSet::from([RoleLevel::L3]),
            target_store_tiers: BTreeSet::from([StoreTier::T2]),
            target_divisions: BTreeSet::from([Division::LeatherGoods]),
            target_locations: Vec::new(),
            mobility: Some(MobilityRadius::Regional),
            compensation_expectation: None,
        }),
        experience_blocks: vec![ExperienceBlock {
            block_type: ExperienceBlockType::Clienteling,
            title: "Client Advisor".to_string(),
            employer: None,
            years: Some(3.0),
        }],
    }
}

pub(super) fn opportunity(id: &str, role_level: RoleLevel, city: &str) -> Opportunity {
    Opportunity {
        id: OpportunityId(id.to_string()),
        role_level,
        division: Some(Division::LeatherGoods),
        required_experience_years: None,
        compensation_range: None,
        store: Some(Store {
            tier: StoreTier::T2,
            city: city.to_string(),
            region: "Europe".to_string(),
        }),
    }
}

/// One strong fit (L3 in London) and one far-off senior role.
pub(super) fn opportunities() -> Vec<Opportunity> {
    vec![
        opportunity("opp-london", RoleLevel::L3, "London"),
        Opportunity {
            division: Some(Division::HighJewelry),
            store: Some(Store {
                tier: StoreTier::T5,
                city: "Dubai".to_string(),
                region: "Middle East".to_string(),
            }),
            ..opportunity("opp-dubai", RoleLevel::L7, "Dubai")
        },
    ]
}

pub(super) type MemoryService = TalentMatchingService<MemoryRepository>;

pub(super) fn build_service() -> (MemoryService, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = TalentMatchingService::new(repository.clone(), MatchConfig::default())
        .expect("default config is valid");
    (service, repository)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    matching_router(Arc::new(service))
}

pub(super) fn uniform_scores(score: u8) -> CompetencyScores {
    CompetencyScores::uniform(score)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<MatchKey, Match>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard.len()
    }
}

impl MatchRepository for MemoryRepository {
    fn upsert(&self, record: Match) -> Result<UpsertOutcome, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.insert(MatchKey::of(&record), record) {
            Some(_) => Ok(UpsertOutcome::Updated),
            None => Ok(UpsertOutcome::Inserted),
        }
    }

    fn remove(&self, key: &MatchKey) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.remove(key).is_some())
    }

    fn fetch(&self, key: &MatchKey) -> Result<Option<Match>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn for_talent(&self, talent_id: &TalentId) -> Result<Vec<Match>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.talent_id == talent_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableRepository;

impl MatchRepository for UnavailableRepository {
    fn upsert(&self, _record: Match) -> Result<UpsertOutcome, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _key: &MatchKey) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _key: &MatchKey) -> Result<Option<Match>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_talent(&self, _talent_id: &TalentId) -> Result<Vec<Match>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Accepts a fixed number of writes, then reports the store as offline.
pub(super) struct FlakyRepository {
    inner: MemoryRepository,
    writes_left: Mutex<usize>,
}

impl FlakyRepository {
    pub(super) fn new(inner: MemoryRepository, writes: usize) -> Self {
        Self {
            inner,
            writes_left: Mutex::new(writes),
        }
    }

    pub(super) fn restore(&self) {
        *self.writes_left.lock().expect("budget mutex poisoned") = usize::MAX;
    }

    fn take_write(&self) -> Result<(), RepositoryError> {
        let mut left = self.writes_left.lock().expect("budget mutex poisoned");
        if *left == 0 {
            return Err(RepositoryError::Unavailable("database offline".to_string()));
        }
        *left -= 1;
        Ok(())
    }
}

impl MatchRepository for FlakyRepository {
    fn upsert(&self, record: Match) -> Result<UpsertOutcome, RepositoryError> {
        self.take_write()?;
        self.inner.upsert(record)
    }

    fn remove(&self, key: &MatchKey) -> Result<bool, RepositoryError> {
        self.take_write()?;
        self.inner.remove(key)
    }

    fn fetch(&self, key: &MatchKey) -> Result<Option<Match>, RepositoryError> {
        self.inner.fetch(key)
    }

    fn for_talent(&self, talent_id: &TalentId) -> Result<Vec<Match>, RepositoryError> {
        self.inner.for_talent(talent_id)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
