//! Career projection: next-role readiness, timeline, gaps and experiences.

mod progression;

pub use progression::{
    progression_for, requirement_for, LevelRequirement, RoleProgression, LEVEL_REQUIREMENTS,
    ROLE_PROGRESSION,
};

use serde::{Deserialize, Serialize};

use super::domain::{CompetencyDimension, CompetencyScores, RoleLevel};
use progression::{base_experiences, gap_experience, EXECUTIVE_DEVELOPMENT};

pub const PROJECTION_ENGINE_VERSION: &str = "projection-v1";

const MAX_RECOMMENDED_EXPERIENCES: usize = 5;

/// The three fields a projection depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub level: RoleLevel,
    pub years_in_luxury: f64,
    #[serde(default)]
    pub scores: Option<CompetencyScores>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    ReadyNow,
    ReadySoon,
    Developing,
}

impl Readiness {
    pub const fn label(self) -> &'static str {
        match self {
            Readiness::ReadyNow => "ready_now",
            Readiness::ReadySoon => "ready_soon",
            Readiness::Developing => "developing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRole {
    pub level: RoleLevel,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextRole {
    pub level: RoleLevel,
    pub candidate_titles: Vec<String>,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEstimate {
    pub min_months: u16,
    pub max_months: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub current_role: CurrentRole,
    pub next_role: NextRole,
    pub timeline: TimelineEstimate,
    pub capability_gaps: Vec<String>,
    pub recommended_experiences: Vec<String>,
    pub engine_version: String,
}

pub fn generate_career_projection(input: &ProjectionInput) -> ProjectionResult {
    let step = progression_for(input.level);
    let current_role = CurrentRole {
        level: input.level,
        title: input.level.title().to_string(),
    };

    if step.next == input.level {
        return ProjectionResult {
            current_role,
            next_role: NextRole {
                level: step.next,
                candidate_titles: titles(step),
                readiness: Readiness::ReadyNow,
            },
            timeline: TimelineEstimate {
                min_months: 0,
                max_months: 0,
            },
            capability_gaps: Vec::new(),
            recommended_experiences: EXECUTIVE_DEVELOPMENT
                .iter()
                .map(|item| item.to_string())
                .collect(),
            engine_version: PROJECTION_ENGINE_VERSION.to_string(),
        };
    }

    let scores = input.scores.unwrap_or(CompetencyScores::uniform(0));
    let mean = input
        .scores
        .as_ref()
        .map(CompetencyScores::mean)
        .unwrap_or(0.0);
    let readiness = classify_readiness(input.years_in_luxury, step.typical_years, mean);
    let gaps = capability_gaps(step.next, &scores);

    ProjectionResult {
        current_role,
        next_role: NextRole {
            level: step.next,
            candidate_titles: titles(step),
            readiness,
        },
        timeline: estimate_timeline(step, readiness),
        capability_gaps: gaps
            .iter()
            .map(|gap| {
                format!(
                    "{}: current {}, target {}",
                    gap.dimension.label(),
                    gap.current,
                    gap.target
                )
            })
            .collect(),
        recommended_experiences: recommended_experiences(step.next, &gaps),
        engine_version: PROJECTION_ENGINE_VERSION.to_string(),
    }
}

fn titles(step: &RoleProgression) -> Vec<String> {
    step.candidate_titles
        .iter()
        .map(|title| title.to_string())
        .collect()
}

pub(crate) fn classify_readiness(years: f64, typical_years: f64, mean_score: f64) -> Readiness {
    if years >= typical_years && mean_score >= 70.0 {
        Readiness::ReadyNow
    } else if (years >= 0.75 * typical_years && mean_score >= 60.0)
        || (years >= 0.5 * typical_years && mean_score >= 75.0)
    {
        Readiness::ReadySoon
    } else {
        Readiness::Developing
    }
}

pub(crate) fn estimate_timeline(step: &RoleProgression, readiness: Readiness) -> TimelineEstimate {
    let (min, max) = (step.min_months, step.max_months);
    let (min_months, max_months) = match readiness {
        Readiness::ReadyNow => (min / 2, min),
        Readiness::ReadySoon => (min, (min + max) / 2),
        Readiness::Developing => (max, max + max / 2),
    };
    TimelineEstimate {
        min_months,
        max_months,
    }
}

struct CapabilityGap {
    dimension: CompetencyDimension,
    current: u8,
    target: u8,
}

fn capability_gaps(target: RoleLevel, scores: &CompetencyScores) -> Vec<CapabilityGap> {
    let Some(requirement) = requirement_for(target) else {
        return Vec::new();
    };

    CompetencyDimension::ALL
        .iter()
        .filter_map(|dimension| {
            let current = scores.get(*dimension);
            let target = requirement.minimum.get(*dimension);
            (current < target).then_some(CapabilityGap {
                dimension: *dimension,
                current,
                target,
            })
        })
        .collect()
}

fn recommended_experiences(target: RoleLevel, gaps: &[CapabilityGap]) -> Vec<String> {
    let mut experiences: Vec<String> = base_experiences(target)
        .iter()
        .map(|item| item.to_string())
        .collect();

    experiences.extend(
        gaps.iter()
            .filter_map(|gap| gap_experience(target, gap.dimension))
            .map(str::to_string),
    );
    experiences.truncate(MAX_RECOMMENDED_EXPERIENCES);
    experiences
}
