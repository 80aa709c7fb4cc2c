//! Talent x opportunity compatibility scoring.
//!
//! Seven independent rule-based sub-scores are combined through
//! [`MatchWeights`]. A separate compensation check tags how the talent's
//! expectation sits against the opportunity's internal pay band.

mod compensation;
mod config;
mod rules;

pub use compensation::{compensation_alignment, CompensationAlignment};
pub use config::{MatchConfig, MatchConfigError, MatchWeights, MATCH_WEIGHTS, MIN_MATCH_SCORE};

use serde::{Deserialize, Serialize};

use super::domain::{Opportunity, OpportunityId, Talent, TalentId};

pub const MATCH_ENGINE_VERSION: &str = "match-v1";

/// Named 0-100 sub-scores behind a match total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role_fit: u8,
    pub division_fit: u8,
    pub store_context: u8,
    pub capability_fit: u8,
    pub geography: u8,
    pub experience_block: u8,
    pub preference: u8,
}

/// Scored pair, ready to be upserted on `(talent_id, opportunity_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub talent_id: TalentId,
    pub opportunity_id: OpportunityId,
    pub score_total: u8,
    pub score_breakdown: ScoreBreakdown,
    pub compensation_alignment: CompensationAlignment,
    pub engine_version: String,
}

/// Stateless scorer applying an injected weight table.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    config: MatchConfig,
}

impl MatchScorer {
    pub fn new(config: MatchConfig) -> Result<Self, MatchConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn score(&self, talent: &Talent, opportunity: &Opportunity) -> Match {
        let breakdown = ScoreBreakdown {
            role_fit: rules::role_fit(talent, opportunity),
            division_fit: rules::division_fit(talent, opportunity),
            store_context: rules::store_context(talent, opportunity),
            capability_fit: rules::capability_fit(talent),
            geography: rules::geography(talent, opportunity),
            experience_block: rules::experience_block(talent, opportunity),
            preference: rules::preference(talent, opportunity),
        };

        Match {
            talent_id: talent.id.clone(),
            opportunity_id: opportunity.id.clone(),
            score_total: weighted_total(&self.config.weights, &breakdown),
            score_breakdown: breakdown,
            compensation_alignment: compensation_alignment(
                talent,
                opportunity.compensation_range.as_ref(),
            ),
            engine_version: MATCH_ENGINE_VERSION.to_string(),
        }
    }

    pub fn meets_threshold(&self, score: u8) -> bool {
        score >= self.config.minimum_score
    }
}

fn weighted_total(weights: &MatchWeights, breakdown: &ScoreBreakdown) -> u8 {
    let pairs = [
        (weights.role_fit, breakdown.role_fit),
        (weights.division_fit, breakdown.division_fit),
        (weights.store_context, breakdown.store_context),
        (weights.capability_fit, breakdown.capability_fit),
        (weights.geography, breakdown.geography),
        (weights.experience_block, breakdown.experience_block),
        (weights.preference, breakdown.preference),
    ];
    let weighted: u32 = pairs
        .iter()
        .map(|(weight, score)| u32::from(*weight) * u32::from(*score))
        .sum();
    // weights are percentages; round half up back onto 0-100
    ((weighted + 50) / 100).min(100) as u8
}

/// Score one pair with the default weight table.
pub fn calculate_match(talent: &Talent, opportunity: &Opportunity) -> Match {
    MatchScorer::default().score(talent, opportunity)
}

pub fn meets_threshold(score: u8) -> bool {
    score >= MIN_MATCH_SCORE
}
