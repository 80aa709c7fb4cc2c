use serde::{Deserialize, Serialize};

/// Minimum `score_total` for a match to be worth persisting.
pub const MIN_MATCH_SCORE: u8 = 40;

/// Per-dimension weights as integer percentages. Percentages keep the
/// "weights sum to 1.0" invariant exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub role_fit: u8,
    pub division_fit: u8,
    pub store_context: u8,
    pub capability_fit: u8,
    pub geography: u8,
    pub experience_block: u8,
    pub preference: u8,
}

pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    role_fit: 20,
    division_fit: 20,
    store_context: 15,
    capability_fit: 15,
    geography: 10,
    experience_block: 10,
    preference: 10,
};

impl MatchWeights {
    pub const fn total_percent(&self) -> u16 {
        self.role_fit as u16
            + self.division_fit as u16
            + self.store_context as u16
            + self.capability_fit as u16
            + self.geography as u16
            + self.experience_block as u16
            + self.preference as u16
    }

    /// Weights as fractions of 1.0, in breakdown order.
    pub fn as_fractions(&self) -> [(&'static str, f64); 7] {
        let percents = [
            ("role_fit", self.role_fit),
            ("division_fit", self.division_fit),
            ("store_context", self.store_context),
            ("capability_fit", self.capability_fit),
            ("geography", self.geography),
            ("experience_block", self.experience_block),
            ("preference", self.preference),
        ];
        percents.map(|(name, percent)| (name, f64::from(percent) / 100.0))
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}

/// Scoring configuration injected into [`super::MatchScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    pub minimum_score: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: MATCH_WEIGHTS,
            minimum_score: MIN_MATCH_SCORE,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), MatchConfigError> {
        let total = self.weights.total_percent();
        if total != 100 {
            return Err(MatchConfigError::WeightsDoNotSumToOne {
                total_percent: total,
            });
        }
        if self.minimum_score > 100 {
            return Err(MatchConfigError::ThresholdOutOfRange(self.minimum_score));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchConfigError {
    #[error("match weights sum to {total_percent}%, expected 100%")]
    WeightsDoNotSumToOne { total_percent: u16 },
    #[error("minimum match score {0} exceeds 100")]
    ThresholdOutOfRange(u8),
}
