//! Orchestration around the scoring engines: batch recompute, the threshold
//! gate, upserts through [`MatchRepository`], and the HTTP surface.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{MatchKey, MatchRepository, RepositoryError, UpsertOutcome};
pub use router::{
    matching_router, OpportunityRecomputeRequest, RecomputeRequest, ScoreAssessmentRequest,
    ScoreMatchRequest, ScoreMatchResponse,
};
pub use service::{MatchingServiceError, RecomputeSummary, TalentMatchingService};
