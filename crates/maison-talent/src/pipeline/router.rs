use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::repository::MatchRepository;
use super::service::{MatchingServiceError, TalentMatchingService};
use crate::scoring::{AssessmentAnswers, Match, Opportunity, ProjectionInput, Talent, TalentId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAssessmentRequest {
    pub answers: AssessmentAnswers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchRequest {
    pub talent: Talent,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchResponse {
    #[serde(rename = "match")]
    pub scored: Match,
    pub meets_threshold: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecomputeRequest {
    pub talent: Talent,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityRecomputeRequest {
    pub opportunity: Opportunity,
    #[serde(default)]
    pub talents: Vec<Talent>,
}

/// Router builder exposing the scoring engines and batch recompute over JSON.
pub fn matching_router<R>(service: Arc<TalentMatchingService<R>>) -> Router
where
    R: MatchRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments/score", post(assessment_handler::<R>))
        .route("/api/v1/projections", post(projection_handler::<R>))
        .route("/api/v1/matches/score", post(score_match_handler::<R>))
        .route("/api/v1/matches/recompute", post(recompute_handler::<R>))
        .route(
            "/api/v1/opportunities/recompute",
            post(opportunity_recompute_handler::<R>),
        )
        .route(
            "/api/v1/talents/:talent_id/matches",
            get(talent_matches_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn assessment_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    axum::Json(request): axum::Json<ScoreAssessmentRequest>,
) -> Response
where
    R: MatchRepository + 'static,
{
    match service.score_assessment(&request.answers) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(MatchingServiceError::Assessment(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn projection_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    axum::Json(input): axum::Json<ProjectionInput>,
) -> Response
where
    R: MatchRepository + 'static,
{
    let projection = service.project(&input);
    (StatusCode::OK, axum::Json(projection)).into_response()
}

pub(crate) async fn score_match_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    axum::Json(request): axum::Json<ScoreMatchRequest>,
) -> Response
where
    R: MatchRepository + 'static,
{
    let scored = service.score_pair(&request.talent, &request.opportunity);
    let meets_threshold = service.meets_threshold(scored.score_total);
    let body = ScoreMatchResponse {
        scored,
        meets_threshold,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn recompute_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    axum::Json(request): axum::Json<RecomputeRequest>,
) -> Response
where
    R: MatchRepository + 'static,
{
    match service.recompute_for_talent(&request.talent, &request.opportunities) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn opportunity_recompute_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    axum::Json(request): axum::Json<OpportunityRecomputeRequest>,
) -> Response
where
    R: MatchRepository + 'static,
{
    match service.recompute_for_opportunity(&request.opportunity, &request.talents) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn talent_matches_handler<R>(
    State(service): State<Arc<TalentMatchingService<R>>>,
    Path(talent_id): Path<String>,
) -> Response
where
    R: MatchRepository + 'static,
{
    let id = TalentId(talent_id);
    match service.matches_for_talent(&id) {
        Ok(matches) => {
            let payload = json!({
                "talent_id": id.0,
                "matches": matches,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: MatchingServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
