use serde::{Deserialize, Serialize};

use crate::scoring::domain::{CompensationRange, Talent};

/// Coarse position of a talent's expectation against the internal pay band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationAlignment {
    WithinRange,
    AboveRange,
    BelowRange,
    Unknown,
}

impl CompensationAlignment {
    pub const fn label(self) -> &'static str {
        match self {
            CompensationAlignment::WithinRange => "within_range",
            CompensationAlignment::AboveRange => "above_range",
            CompensationAlignment::BelowRange => "below_range",
            CompensationAlignment::Unknown => "unknown",
        }
    }
}

/// Compares base amounts only. Both sides are assumed to share one currency;
/// currency fields are never read and no conversion happens here.
pub fn compensation_alignment(
    talent: &Talent,
    range: Option<&CompensationRange>,
) -> CompensationAlignment {
    let expected = talent
        .career_preferences
        .as_ref()
        .and_then(|prefs| prefs.compensation_expectation.as_ref())
        .and_then(|expectation| expectation.base);

    let (Some(expected), Some(range)) = (expected, range) else {
        return CompensationAlignment::Unknown;
    };

    match (range.min_base, range.max_base) {
        (None, None) => CompensationAlignment::Unknown,
        (Some(min), _) if expected < min => CompensationAlignment::BelowRange,
        (_, Some(max)) if expected > max => CompensationAlignment::AboveRange,
        _ => CompensationAlignment::WithinRange,
    }
}
