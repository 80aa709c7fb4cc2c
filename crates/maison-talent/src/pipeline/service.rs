use std::cmp::Reverse;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::repository::{MatchKey, MatchRepository, RepositoryError, UpsertOutcome};
use crate::scoring::assessment::{AssessmentAnswers, AssessmentError, AssessmentOutcome};
use crate::scoring::matching::{MatchConfig, MatchConfigError, MatchScorer};
use crate::scoring::projection::{generate_career_projection, ProjectionInput, ProjectionResult};
use crate::scoring::{AssessmentScorer, Match, Opportunity, Talent, TalentId, MATCH_ENGINE_VERSION};

/// Counters describing one batch recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeSummary {
    pub evaluated: usize,
    pub inserted: usize,
    pub updated: usize,
    pub discarded: usize,
    pub removed: usize,
    pub engine_version: String,
}

impl RecomputeSummary {
    fn new() -> Self {
        Self {
            engine_version: MATCH_ENGINE_VERSION.to_string(),
            ..Self::default()
        }
    }

    pub fn persisted(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Orchestrates the scoring engines and persists match results.
pub struct TalentMatchingService<R> {
    repository: Arc<R>,
    scorer: MatchScorer,
    assessments: AssessmentScorer,
}

impl<R> TalentMatchingService<R>
where
    R: MatchRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: MatchConfig) -> Result<Self, MatchingServiceError> {
        let scorer = MatchScorer::new(config)?;
        Ok(Self {
            repository,
            scorer,
            assessments: AssessmentScorer::default(),
        })
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn score_pair(&self, talent: &Talent, opportunity: &Opportunity) -> Match {
        self.scorer.score(talent, opportunity)
    }

    pub fn meets_threshold(&self, score: u8) -> bool {
        self.scorer.meets_threshold(score)
    }

    pub fn score_assessment(
        &self,
        answers: &AssessmentAnswers,
    ) -> Result<AssessmentOutcome, MatchingServiceError> {
        match self.assessments.score(answers) {
            Ok(outcome) => {
                debug!(
                    overall = outcome.insights.overall_score,
                    version = %outcome.version,
                    "assessment scored"
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, answered = answers.len(), "assessment rejected");
                Err(err.into())
            }
        }
    }

    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        generate_career_projection(input)
    }

    /// Rescore one talent against every active opportunity, e.g. after an
    /// assessment submission.
    ///
    /// Pairs are written one at a time. A repository error aborts the batch
    /// and leaves the pairs handled before it persisted; rerunning the same
    /// batch converges because every write is an upsert or removal keyed by
    /// the pair.
    pub fn recompute_for_talent(
        &self,
        talent: &Talent,
        opportunities: &[Opportunity],
    ) -> Result<RecomputeSummary, MatchingServiceError> {
        let mut summary = RecomputeSummary::new();
        for opportunity in opportunities {
            let scored = self.scorer.score(talent, opportunity);
            self.apply(scored, &mut summary)?;
        }

        info!(
            talent_id = %talent.id.0,
            evaluated = summary.evaluated,
            persisted = summary.persisted(),
            removed = summary.removed,
            "recomputed matches for talent"
        );
        Ok(summary)
    }

    /// Rescore every talent against one opportunity, e.g. after a publish or edit.
    ///
    /// Failure semantics match [`Self::recompute_for_talent`].
    pub fn recompute_for_opportunity(
        &self,
        opportunity: &Opportunity,
        talents: &[Talent],
    ) -> Result<RecomputeSummary, MatchingServiceError> {
        let mut summary = RecomputeSummary::new();
        for talent in talents {
            let scored = self.scorer.score(talent, opportunity);
            self.apply(scored, &mut summary)?;
        }

        info!(
            opportunity_id = %opportunity.id.0,
            evaluated = summary.evaluated,
            persisted = summary.persisted(),
            removed = summary.removed,
            "recomputed matches for opportunity"
        );
        Ok(summary)
    }

    /// Persisted matches for a talent, best score first.
    pub fn matches_for_talent(
        &self,
        talent_id: &TalentId,
    ) -> Result<Vec<Match>, MatchingServiceError> {
        let mut matches = self.repository.for_talent(talent_id)?;
        matches.sort_by(|left, right| {
            Reverse(left.score_total)
                .cmp(&Reverse(right.score_total))
                .then_with(|| left.opportunity_id.cmp(&right.opportunity_id))
        });
        Ok(matches)
    }

    fn apply(
        &self,
        scored: Match,
        summary: &mut RecomputeSummary,
    ) -> Result<(), MatchingServiceError> {
        summary.evaluated += 1;

        if !self.scorer.meets_threshold(scored.score_total) {
            summary.discarded += 1;
            // a previously persisted match for this pair is now stale
            if self.repository.remove(&MatchKey::of(&scored))? {
                summary.removed += 1;
            }
            debug!(
                talent_id = %scored.talent_id.0,
                opportunity_id = %scored.opportunity_id.0,
                score = scored.score_total,
                "match below threshold"
            );
            return Ok(());
        }

        match self.repository.upsert(scored)? {
            UpsertOutcome::Inserted => summary.inserted += 1,
            UpsertOutcome::Updated => summary.updated += 1,
        }
        Ok(())
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error(transparent)]
    Config(#[from] MatchConfigError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
