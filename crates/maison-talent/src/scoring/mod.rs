//! Pure scoring engines. Nothing under this module performs I/O or logs.

pub mod assessment;
pub mod domain;
pub mod matching;
pub mod projection;

#[cfg(test)]
mod tests;

pub use assessment::{
    process_assessment, AssessmentAnswers, AssessmentError, AssessmentOutcome, AssessmentScorer,
    ASSESSMENT_VERSION, QUESTION_BANK,
};
pub use domain::{
    AssessmentSummary, CareerPreferences, CompensationExpectation, CompensationRange,
    CompetencyDimension, CompetencyScores, Division, ExperienceBlock, ExperienceBlockType,
    MobilityRadius, Opportunity, OpportunityId, RoleLevel, Store, StoreTier, Talent, TalentId,
    TimelineStance,
};
pub use matching::{
    calculate_match, meets_threshold, CompensationAlignment, Match, MatchConfig, MatchScorer,
    MatchWeights, ScoreBreakdown, MATCH_ENGINE_VERSION, MATCH_WEIGHTS, MIN_MATCH_SCORE,
};
pub use projection::{
    generate_career_projection, ProjectionInput, ProjectionResult, Readiness, LEVEL_REQUIREMENTS,
    PROJECTION_ENGINE_VERSION, ROLE_PROGRESSION,
};
