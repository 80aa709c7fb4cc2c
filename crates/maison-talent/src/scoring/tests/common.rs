use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use crate::scoring::assessment::{AssessmentAnswers, QUESTION_BANK};
use crate::scoring::domain::{
    AssessmentSummary, CareerPreferences, CompensationExpectation, CompensationRange,
    CompetencyScores, Division, ExperienceBlock, ExperienceBlockType, MobilityRadius, Opportunity,
    OpportunityId, RoleLevel, Store, StoreTier, Talent, TalentId, TimelineStance,
};

pub(super) fn scores(
    service: u8,
    clienteling: u8,
    operations: u8,
    leadership: u8,
) -> CompetencyScores {
    CompetencyScores {
        service,
        clienteling,
        operations,
        leadership,
    }
}

pub(super) fn assessment(scores: CompetencyScores) -> AssessmentSummary {
    AssessmentSummary {
        scores,
        completed_at: Utc
            .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn block(block_type: ExperienceBlockType, title: &str) -> ExperienceBlock {
    ExperienceBlock {
        block_type,
        title: title.to_string(),
        employer: Some("Maison Lumiere".to_string()),
        years: Some(2.0),
    }
}

pub(super) fn preferences() -> CareerPreferences {
    CareerPreferences {
        timeline: TimelineStance::ActivelyLooking,
        target_role_levels: BTreeSet::from([RoleLevel::L3]),
        target_store_tiers: BTreeSet::from([StoreTier::T3]),
        target_divisions: BTreeSet::from([Division::Fashion]),
        target_locations: vec!["Paris".to_string()],
        mobility: Some(MobilityRadius::National),
        compensation_expectation: Some(CompensationExpectation {
            base: Some(48_000),
            currency: Some("EUR".to_string()),
        }),
    }
}

/// L2 fashion advisor in a Paris T3 boutique with 4 years and all scores at 80.
pub(super) fn talent() -> Talent {
    Talent {
        id: TalentId("tal-001".to_string()),
        current_role_level: Some(RoleLevel::L2),
        current_store_tier: Some(StoreTier::T3),
        divisions_expertise: BTreeSet::from([Division::Fashion]),
        years_in_luxury: 4.0,
        current_location: Some("Paris".to_string()),
        assessment_summary: Some(assessment(CompetencyScores::uniform(80))),
        career_preferences: Some(preferences()),
        experience_blocks: vec![
            block(ExperienceBlockType::FrontOfHouse, "Senior Sales Advisor"),
            block(ExperienceBlockType::Clienteling, "VIC portfolio"),
        ],
    }
}

/// Bare profile: only an id, everything optional left empty.
pub(super) fn sparse_talent() -> Talent {
    Talent {
        id: TalentId("tal-sparse".to_string()),
        current_role_level: None,
        current_store_tier: None,
        divisions_expertise: BTreeSet::new(),
        years_in_luxury: 0.0,
        current_location: None,
        assessment_summary: None,
        career_preferences: None,
        experience_blocks: Vec::new(),
    }
}

pub(super) fn store(tier: StoreTier, city: &str, region: &str) -> Store {
    Store {
        tier,
        city: city.to_string(),
        region: region.to_string(),
    }
}

/// L3 fashion opening in a Paris T3 boutique.
pub(super) fn opportunity() -> Opportunity {
    Opportunity {
        id: OpportunityId("opp-001".to_string()),
        role_level: RoleLevel::L3,
        division: Some(Division::Fashion),
        required_experience_years: Some(3.0),
        compensation_range: Some(CompensationRange {
            min_base: Some(45_000),
            max_base: Some(55_000),
            variable_pct: Some(15.0),
            currency: Some("EUR".to_string()),
        }),
        store: Some(store(StoreTier::T3, "Paris", "Ile-de-France")),
    }
}

/// Every question answered with its best option.
pub(super) fn best_answers() -> AssessmentAnswers {
    QUESTION_BANK
        .iter()
        .map(|question| {
            let best = question
                .options
                .iter()
                .max_by(|left, right| left.score.total_cmp(&right.score))
                .expect("question has options");
            (question.id.to_string(), best.id.to_string())
        })
        .collect()
}

/// Every question answered with its weakest option.
pub(super) fn worst_answers() -> AssessmentAnswers {
    QUESTION_BANK
        .iter()
        .map(|question| {
            let worst = question
                .options
                .iter()
                .min_by(|left, right| left.score.total_cmp(&right.score))
                .expect("question has options");
            (question.id.to_string(), worst.id.to_string())
        })
        .collect()
}
