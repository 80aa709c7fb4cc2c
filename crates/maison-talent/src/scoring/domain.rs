use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for talent profiles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TalentId(pub String);

/// Identifier wrapper for published opportunities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OpportunityId(pub String);

/// Ordinal seniority ladder from Sales Advisor (L1) to Regional Director (L8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleLevel {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
    L8,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 8] = [
        RoleLevel::L1,
        RoleLevel::L2,
        RoleLevel::L3,
        RoleLevel::L4,
        RoleLevel::L5,
        RoleLevel::L6,
        RoleLevel::L7,
        RoleLevel::L8,
    ];

    pub const fn rank(self) -> u8 {
        match self {
            RoleLevel::L1 => 1,
            RoleLevel::L2 => 2,
            RoleLevel::L3 => 3,
            RoleLevel::L4 => 4,
            RoleLevel::L5 => 5,
            RoleLevel::L6 => 6,
            RoleLevel::L7 => 7,
            RoleLevel::L8 => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RoleLevel::L1 => "L1",
            RoleLevel::L2 => "L2",
            RoleLevel::L3 => "L3",
            RoleLevel::L4 => "L4",
            RoleLevel::L5 => "L5",
            RoleLevel::L6 => "L6",
            RoleLevel::L7 => "L7",
            RoleLevel::L8 => "L8",
        }
    }

    /// Canonical title used when describing someone currently at this level.
    pub const fn title(self) -> &'static str {
        match self {
            RoleLevel::L1 => "Sales Advisor",
            RoleLevel::L2 => "Senior Sales Advisor",
            RoleLevel::L3 => "Team Leader",
            RoleLevel::L4 => "Assistant Store Manager",
            RoleLevel::L5 => "Store Manager",
            RoleLevel::L6 => "Flagship Director",
            RoleLevel::L7 => "Area Manager",
            RoleLevel::L8 => "Regional Director",
        }
    }

    /// Openings at L4 and above are treated as management roles.
    pub const fn is_senior(self) -> bool {
        self.rank() >= RoleLevel::L4.rank()
    }
}

/// Ordinal store-complexity classification from global flagship (T1) to outlet (T5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoreTier {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl StoreTier {
    pub const fn rank(self) -> u8 {
        match self {
            StoreTier::T1 => 1,
            StoreTier::T2 => 2,
            StoreTier::T3 => 3,
            StoreTier::T4 => 4,
            StoreTier::T5 => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StoreTier::T1 => "global flagship",
            StoreTier::T2 => "flagship",
            StoreTier::T3 => "core boutique",
            StoreTier::T4 => "satellite boutique",
            StoreTier::T5 => "outlet / travel retail",
        }
    }
}

/// Luxury product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Division {
    Fashion,
    LeatherGoods,
    Shoes,
    Beauty,
    Fragrance,
    Watches,
    HighJewelry,
    Eyewear,
    Accessories,
}

impl Division {
    pub const ALL: [Division; 9] = [
        Division::Fashion,
        Division::LeatherGoods,
        Division::Shoes,
        Division::Beauty,
        Division::Fragrance,
        Division::Watches,
        Division::HighJewelry,
        Division::Eyewear,
        Division::Accessories,
    ];

    /// Divisions whose selling and product knowledge transfer to this one.
    pub const fn related(self) -> &'static [Division] {
        match self {
            Division::Fashion => &[
                Division::LeatherGoods,
                Division::Shoes,
                Division::Accessories,
            ],
            Division::LeatherGoods => &[Division::Fashion, Division::Accessories, Division::Shoes],
            Division::Shoes => &[Division::Fashion, Division::LeatherGoods],
            Division::Beauty => &[Division::Fragrance],
            Division::Fragrance => &[Division::Beauty],
            Division::Watches => &[Division::HighJewelry],
            Division::HighJewelry => &[Division::Watches],
            Division::Eyewear => &[Division::Accessories],
            Division::Accessories => {
                &[Division::Fashion, Division::LeatherGoods, Division::Eyewear]
            }
        }
    }

    pub fn is_related_to(self, other: Division) -> bool {
        self.related().contains(&other)
    }
}

/// Typed segment of a talent's work history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBlockType {
    FrontOfHouse,
    BackOfHouse,
    Leadership,
    Clienteling,
    Operations,
    Business,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBlock {
    pub block_type: ExperienceBlockType,
    pub title: String,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub years: Option<f64>,
}

/// The four competencies measured by the self-assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyDimension {
    Service,
    Clienteling,
    Operations,
    Leadership,
}

impl CompetencyDimension {
    /// Fixed ordering used for tie-breaks and gap reporting.
    pub const ALL: [CompetencyDimension; 4] = [
        CompetencyDimension::Service,
        CompetencyDimension::Clienteling,
        CompetencyDimension::Operations,
        CompetencyDimension::Leadership,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CompetencyDimension::Service => "Service",
            CompetencyDimension::Clienteling => "Clienteling",
            CompetencyDimension::Operations => "Operations",
            CompetencyDimension::Leadership => "Leadership",
        }
    }
}

/// Four 0-100 competency scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyScores {
    pub service: u8,
    pub clienteling: u8,
    pub operations: u8,
    pub leadership: u8,
}

impl CompetencyScores {
    pub const fn uniform(score: u8) -> Self {
        Self {
            service: score,
            clienteling: score,
            operations: score,
            leadership: score,
        }
    }

    pub const fn get(&self, dimension: CompetencyDimension) -> u8 {
        match dimension {
            CompetencyDimension::Service => self.service,
            CompetencyDimension::Clienteling => self.clienteling,
            CompetencyDimension::Operations => self.operations,
            CompetencyDimension::Leadership => self.leadership,
        }
    }

    pub fn mean(&self) -> f64 {
        let total: u32 = CompetencyDimension::ALL
            .iter()
            .map(|dimension| u32::from(self.get(*dimension)))
            .sum();
        f64::from(total) / CompetencyDimension::ALL.len() as f64
    }

    /// Scores paired with their dimension, in dimension order.
    pub fn entries(&self) -> [(CompetencyDimension, u8); 4] {
        CompetencyDimension::ALL.map(|dimension| (dimension, self.get(dimension)))
    }
}

/// Persisted result of the latest completed self-assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub scores: CompetencyScores,
    pub completed_at: DateTime<Utc>,
}

/// How actively a talent is looking for a new role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStance {
    ActivelyLooking,
    OpenToOpportunities,
    NotLooking,
}

/// Stated willingness to relocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityRadius {
    Local,
    Regional,
    National,
    International,
}

/// Expected base pay. No currency conversion is ever applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationExpectation {
    #[serde(default)]
    pub base: Option<u32>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPreferences {
    pub timeline: TimelineStance,
    #[serde(default)]
    pub target_role_levels: BTreeSet<RoleLevel>,
    #[serde(default)]
    pub target_store_tiers: BTreeSet<StoreTier>,
    #[serde(default)]
    pub target_divisions: BTreeSet<Division>,
    #[serde(default)]
    pub target_locations: Vec<String>,
    #[serde(default)]
    pub mobility: Option<MobilityRadius>,
    #[serde(default)]
    pub compensation_expectation: Option<CompensationExpectation>,
}

/// Candidate profile as read from storage by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: TalentId,
    #[serde(default)]
    pub current_role_level: Option<RoleLevel>,
    #[serde(default)]
    pub current_store_tier: Option<StoreTier>,
    #[serde(default)]
    pub divisions_expertise: BTreeSet<Division>,
    #[serde(default)]
    pub years_in_luxury: f64,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub assessment_summary: Option<AssessmentSummary>,
    #[serde(default)]
    pub career_preferences: Option<CareerPreferences>,
    #[serde(default)]
    pub experience_blocks: Vec<ExperienceBlock>,
}

impl Talent {
    pub fn competency_scores(&self) -> Option<&CompetencyScores> {
        self.assessment_summary
            .as_ref()
            .map(|summary| &summary.scores)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub tier: StoreTier,
    pub city: String,
    pub region: String,
}

/// Internal pay band for an opportunity. Never shown to candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationRange {
    #[serde(default)]
    pub min_base: Option<u32>,
    #[serde(default)]
    pub max_base: Option<u32>,
    #[serde(default)]
    pub variable_pct: Option<f32>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Job posting. Brand-level postings carry no store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub role_level: RoleLevel,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub required_experience_years: Option<f64>,
    #[serde(default)]
    pub compensation_range: Option<CompensationRange>,
    #[serde(default)]
    pub store: Option<Store>,
}
