//! Self-assessment scoring.
//!
//! Answers are mapped onto the weighted question bank and folded into one
//! 0-100 score per competency dimension. Scoring is pure: the same answers
//! always produce the same outcome for a given `ASSESSMENT_VERSION`.

mod insights;
mod questions;

pub use insights::AssessmentInsights;
pub use questions::{AnswerOption, Question, QUESTION_BANK};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CompetencyDimension, CompetencyScores};
use insights::derive_insights;

/// Literal tag persisted alongside scores so stale results can be rescored.
pub const ASSESSMENT_VERSION: &str = "v1";

/// Selected option per question id.
pub type AssessmentAnswers = BTreeMap<String, String>;

/// Output of a scored assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub scores: CompetencyScores,
    pub insights: AssessmentInsights,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    /// No question of this dimension was answered, so its score is undefined.
    #[error("no answered questions for the {} dimension", .dimension.label())]
    IncompleteDimension { dimension: CompetencyDimension },
}

/// Stateless scorer over a fixed question bank.
#[derive(Debug, Clone, Copy)]
pub struct AssessmentScorer {
    questions: &'static [Question],
}

impl Default for AssessmentScorer {
    fn default() -> Self {
        Self::new(&QUESTION_BANK)
    }
}

impl AssessmentScorer {
    pub fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn score(&self, answers: &AssessmentAnswers) -> Result<AssessmentOutcome, AssessmentError> {
        let scores = self.dimension_scores(answers)?;

        Ok(AssessmentOutcome {
            scores,
            insights: derive_insights(&scores),
            version: ASSESSMENT_VERSION.to_string(),
        })
    }

    fn dimension_scores(
        &self,
        answers: &AssessmentAnswers,
    ) -> Result<CompetencyScores, AssessmentError> {
        let mut weighted = [0.0_f64; 4];
        let mut weights = [0.0_f64; 4];

        for question in self.questions {
            let Some(option) = answers
                .get(question.id)
                .and_then(|option_id| question.option(option_id))
            else {
                continue;
            };

            let slot = dimension_slot(question.dimension);
            weighted[slot] += option.score * question.weight;
            weights[slot] += question.weight;
        }

        let mut resolved = [0_u8; 4];
        for dimension in CompetencyDimension::ALL {
            let slot = dimension_slot(dimension);
            if weights[slot] <= 0.0 {
                return Err(AssessmentError::IncompleteDimension { dimension });
            }
            let score = (100.0 * weighted[slot] / weights[slot]).round();
            resolved[slot] = score.clamp(0.0, 100.0) as u8;
        }

        Ok(CompetencyScores {
            service: resolved[dimension_slot(CompetencyDimension::Service)],
            clienteling: resolved[dimension_slot(CompetencyDimension::Clienteling)],
            operations: resolved[dimension_slot(CompetencyDimension::Operations)],
            leadership: resolved[dimension_slot(CompetencyDimension::Leadership)],
        })
    }
}

const fn dimension_slot(dimension: CompetencyDimension) -> usize {
    match dimension {
        CompetencyDimension::Service => 0,
        CompetencyDimension::Clienteling => 1,
        CompetencyDimension::Operations => 2,
        CompetencyDimension::Leadership => 3,
    }
}

/// Score a submission against the default question bank.
pub fn process_assessment(
    answers: &AssessmentAnswers,
) -> Result<AssessmentOutcome, AssessmentError> {
    AssessmentScorer::default().score(answers)
}
