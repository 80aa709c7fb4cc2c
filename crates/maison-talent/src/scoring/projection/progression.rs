use serde::Serialize;

use crate::scoring::domain::{CompetencyDimension, CompetencyScores, RoleLevel};

/// One step on the promotion ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleProgression {
    pub from: RoleLevel,
    pub next: RoleLevel,
    pub candidate_titles: [&'static str; 2],
    pub typical_years: f64,
    pub min_months: u16,
    pub max_months: u16,
}

/// Promotion ladder keyed by current level. L8 maps onto itself.
pub static ROLE_PROGRESSION: [RoleProgression; 8] = [
    step(
        RoleLevel::L1,
        RoleLevel::L2,
        ["Senior Sales Advisor", "Client Advisor"],
        2.0,
        12,
        24,
    ),
    step(
        RoleLevel::L2,
        RoleLevel::L3,
        ["Team Leader", "Department Supervisor"],
        3.0,
        18,
        36,
    ),
    step(
        RoleLevel::L3,
        RoleLevel::L4,
        ["Assistant Store Manager", "Department Manager"],
        3.0,
        24,
        36,
    ),
    step(
        RoleLevel::L4,
        RoleLevel::L5,
        ["Store Manager", "Boutique Manager"],
        4.0,
        24,
        48,
    ),
    step(
        RoleLevel::L5,
        RoleLevel::L6,
        ["Flagship Director", "Senior Store Manager"],
        4.0,
        36,
        60,
    ),
    step(
        RoleLevel::L6,
        RoleLevel::L7,
        ["Area Manager", "Multi-Store Manager"],
        5.0,
        36,
        60,
    ),
    step(
        RoleLevel::L7,
        RoleLevel::L8,
        ["Regional Director", "Retail Director"],
        5.0,
        48,
        72,
    ),
    step(
        RoleLevel::L8,
        RoleLevel::L8,
        ["Regional Director", "Retail Director"],
        0.0,
        0,
        0,
    ),
];

const fn step(
    from: RoleLevel,
    next: RoleLevel,
    candidate_titles: [&'static str; 2],
    typical_years: f64,
    min_months: u16,
    max_months: u16,
) -> RoleProgression {
    RoleProgression {
        from,
        next,
        candidate_titles,
        typical_years,
        min_months,
        max_months,
    }
}

pub fn progression_for(level: RoleLevel) -> &'static RoleProgression {
    // table is indexed by rank
    &ROLE_PROGRESSION[usize::from(level.rank() - 1)]
}

/// Minimum competency scores expected at a target level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelRequirement {
    pub level: RoleLevel,
    pub minimum: CompetencyScores,
}

pub static LEVEL_REQUIREMENTS: [LevelRequirement; 7] = [
    requirement(RoleLevel::L2, 60, 55, 40, 30),
    requirement(RoleLevel::L3, 65, 60, 50, 50),
    requirement(RoleLevel::L4, 70, 65, 60, 60),
    requirement(RoleLevel::L5, 70, 70, 70, 70),
    requirement(RoleLevel::L6, 75, 75, 70, 75),
    requirement(RoleLevel::L7, 75, 70, 75, 80),
    requirement(RoleLevel::L8, 75, 75, 80, 85),
];

const fn requirement(
    level: RoleLevel,
    service: u8,
    clienteling: u8,
    operations: u8,
    leadership: u8,
) -> LevelRequirement {
    LevelRequirement {
        level,
        minimum: CompetencyScores {
            service,
            clienteling,
            operations,
            leadership,
        },
    }
}

pub fn requirement_for(level: RoleLevel) -> Option<&'static LevelRequirement> {
    LEVEL_REQUIREMENTS
        .iter()
        .find(|requirement| requirement.level == level)
}

pub(crate) fn base_experiences(target: RoleLevel) -> &'static [&'static str] {
    match target {
        RoleLevel::L1 | RoleLevel::L2 => &[
            "Build a personal client book of at least 50 active clients",
            "Complete product certification for your division",
            "Shadow a senior advisor during private appointments",
        ],
        RoleLevel::L3 => &[
            "Lead the morning briefing once a week",
            "Onboard and buddy a new sales advisor",
            "Own a product category's sell-through targets",
        ],
        RoleLevel::L4 => &[
            "Manage the floor schedule for a full season",
            "Run a quarterly inventory count",
            "Act as duty manager during store manager absences",
            "Lead a VIC event from guest list to follow-up",
        ],
        RoleLevel::L5 => &[
            "Own the store P&L review with the area manager",
            "Lead recruitment for an open advisor position",
            "Deliver a store-wide clienteling action plan",
        ],
        RoleLevel::L6 => &[
            "Run a flagship opening or major renovation project",
            "Manage a team of department managers",
            "Present the annual business plan to brand leadership",
        ],
        RoleLevel::L7 => &[
            "Take interim responsibility for a second store",
            "Lead a cross-store talent review",
            "Partner with merchandising on regional assortment",
        ],
        RoleLevel::L8 => &[
            "Own a multi-store budget cycle",
            "Sponsor a regional clienteling program",
            "Mentor store managers across markets",
        ],
    }
}

/// Extra suggestion offered when the talent is below the target requirement.
pub(crate) fn gap_experience(
    target: RoleLevel,
    dimension: CompetencyDimension,
) -> Option<&'static str> {
    use CompetencyDimension as D;

    match (target, dimension) {
        (RoleLevel::L2, D::Clienteling) => Some("Follow up every purchase within 48 hours"),
        (RoleLevel::L3, D::Leadership) => {
            Some("Ask to co-lead team huddles alongside your manager")
        }
        (RoleLevel::L4, D::Operations) => {
            Some("Shadow the stock controller for a replenishment cycle")
        }
        (RoleLevel::L4, D::Leadership) => Some("Coach two advisors through a quarterly objective"),
        (RoleLevel::L5, D::Operations) => Some("Take ownership of the weekly KPI review"),
        (RoleLevel::L6, D::Clienteling) => Some("Personally manage a portfolio of top VICs"),
        (RoleLevel::L7, D::Leadership) => Some("Join a leadership development program"),
        (RoleLevel::L8, D::Operations) => Some("Lead a supply chain improvement initiative"),
        _ => None,
    }
}

pub(crate) const EXECUTIVE_DEVELOPMENT: [&str; 3] = [
    "Join the brand's executive leadership program",
    "Mentor area managers and build a succession bench",
    "Sponsor a cross-market strategic initiative",
];
