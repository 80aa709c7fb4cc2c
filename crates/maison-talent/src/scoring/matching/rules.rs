use crate::scoring::domain::{
    ExperienceBlockType, MobilityRadius, Opportunity, Talent, TimelineStance,
};

const NEUTRAL: u8 = 50;

pub(crate) fn role_fit(talent: &Talent, opportunity: &Opportunity) -> u8 {
    let Some(current) = talent.current_role_level else {
        return NEUTRAL;
    };

    let diff = i16::from(opportunity.role_level.rank()) - i16::from(current.rank());
    match diff {
        0 => 100,
        1 => 85,
        -1 => 70,
        2 | -2 => 40,
        _ => 0,
    }
}

pub(crate) fn division_fit(talent: &Talent, opportunity: &Opportunity) -> u8 {
    let Some(division) = opportunity.division else {
        return 80;
    };

    if talent.divisions_expertise.contains(&division) {
        100
    } else if talent
        .divisions_expertise
        .iter()
        .any(|expertise| expertise.is_related_to(division))
    {
        60
    } else {
        20
    }
}

pub(crate) fn store_context(talent: &Talent, opportunity: &Opportunity) -> u8 {
    let (Some(current), Some(store)) = (talent.current_store_tier, opportunity.store.as_ref())
    else {
        return NEUTRAL;
    };

    match current.rank().abs_diff(store.tier.rank()) {
        0 => 100,
        1 => 60,
        _ => 30,
    }
}

pub(crate) fn capability_fit(talent: &Talent) -> u8 {
    let Some(scores) = talent.competency_scores() else {
        return 40;
    };

    let mean = scores.mean();
    if mean >= 75.0 {
        100
    } else if mean >= 60.0 {
        70
    } else {
        50
    }
}

pub(crate) fn geography(talent: &Talent, opportunity: &Opportunity) -> u8 {
    let Some(store) = opportunity.store.as_ref() else {
        return NEUTRAL;
    };
    let city = normalize(&store.city);
    if city.is_empty() {
        return NEUTRAL;
    }

    let location = talent
        .current_location
        .as_deref()
        .map(normalize)
        .unwrap_or_default();
    if location == city {
        return 100;
    }

    let preferences = talent.career_preferences.as_ref();
    if preferences.is_some_and(|prefs| {
        prefs
            .target_locations
            .iter()
            .any(|target| normalize(target) == city)
    }) {
        return 90;
    }

    let region = normalize(&store.region);
    if !region.is_empty() && !location.is_empty() && location.contains(&region) {
        return 50;
    }

    match preferences.and_then(|prefs| prefs.mobility) {
        Some(MobilityRadius::International) => 60,
        Some(MobilityRadius::National) => 40,
        Some(MobilityRadius::Regional) => 30,
        Some(MobilityRadius::Local) | None => 10,
    }
}

pub(crate) fn experience_block(talent: &Talent, opportunity: &Opportunity) -> u8 {
    if talent.experience_blocks.is_empty() {
        return 20;
    }

    let has = |block_type: ExperienceBlockType| {
        talent
            .experience_blocks
            .iter()
            .any(|block| block.block_type == block_type)
    };

    if opportunity.role_level.is_senior() {
        if has(ExperienceBlockType::Leadership) || has(ExperienceBlockType::Business) {
            100
        } else if has(ExperienceBlockType::Operations) {
            70
        } else {
            20
        }
    } else if has(ExperienceBlockType::FrontOfHouse) || has(ExperienceBlockType::Clienteling) {
        100
    } else if has(ExperienceBlockType::Operations) {
        70
    } else if has(ExperienceBlockType::BackOfHouse) {
        40
    } else {
        20
    }
}

pub(crate) fn preference(talent: &Talent, opportunity: &Opportunity) -> u8 {
    let Some(prefs) = talent.career_preferences.as_ref() else {
        return NEUTRAL;
    };

    let mut score: u16 = match prefs.timeline {
        TimelineStance::ActivelyLooking => 40,
        TimelineStance::OpenToOpportunities => 28,
        TimelineStance::NotLooking => 8,
    };

    if prefs.target_role_levels.contains(&opportunity.role_level) {
        score += 30;
    }
    if opportunity
        .store
        .as_ref()
        .is_some_and(|store| prefs.target_store_tiers.contains(&store.tier))
    {
        score += 20;
    }
    if opportunity
        .division
        .is_some_and(|division| prefs.target_divisions.contains(&division))
    {
        score += 10;
    }

    score.min(100) as u8
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
