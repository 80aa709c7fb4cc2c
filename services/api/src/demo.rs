use crate::infra::InMemoryMatchRepository;
use chrono::Utc;
use clap::Args;
use maison_talent::error::AppError;
use maison_talent::pipeline::{ScoreMatchResponse, TalentMatchingService};
use maison_talent::scoring::{
    AssessmentAnswers, AssessmentScorer, AssessmentSummary, CareerPreferences,
    CompensationExpectation, CompensationRange, Division, ExperienceBlock, ExperienceBlockType,
    MatchConfig, MobilityRadius, Opportunity, OpportunityId, ProjectionInput, RoleLevel, Store,
    StoreTier, Talent, TalentId, TimelineStance,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the minimum total score a match needs to be persisted
    #[arg(long)]
    pub(crate) minimum_score: Option<u8>,
    /// Print the seven sub-scores for every persisted match
    #[arg(long)]
    pub(crate) show_breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON document describing the talent
    #[arg(long)]
    pub(crate) talent: PathBuf,
    /// JSON document describing the opportunity
    #[arg(long)]
    pub(crate) opportunity: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let talent: Talent = serde_json::from_str(&std::fs::read_to_string(&args.talent)?)?;
    let opportunity: Opportunity =
        serde_json::from_str(&std::fs::read_to_string(&args.opportunity)?)?;

    let service = TalentMatchingService::new(
        Arc::new(InMemoryMatchRepository::default()),
        MatchConfig::default(),
    )?;
    let scored = service.score_pair(&talent, &opportunity);
    let response = ScoreMatchResponse {
        meets_threshold: service.meets_threshold(scored.score_total),
        scored,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        minimum_score,
        show_breakdown,
    } = args;

    let mut config = MatchConfig::default();
    if let Some(minimum_score) = minimum_score {
        config.minimum_score = minimum_score;
    }
    let repository = Arc::new(InMemoryMatchRepository::default());
    let service = TalentMatchingService::new(repository, config)?;

    println!("Luxury retail talent demo");
    let mut talent = sample_talent();

    let outcome = service.score_assessment(&sample_answers())?;
    println!("\nAssessment ({})", outcome.version);
    for (dimension, score) in outcome.scores.entries() {
        println!("- {}: {score}", dimension.label());
    }
    println!("- overall: {}", outcome.insights.overall_score);
    println!(
        "- strengths: {}",
        join_labels(outcome.insights.strengths.iter().map(|d| d.label()))
    );
    println!(
        "- development areas: {}",
        join_labels(outcome.insights.development_areas.iter().map(|d| d.label()))
    );
    println!(
        "- recommended paths: {}",
        outcome.insights.recommended_paths.join(", ")
    );

    talent.assessment_summary = Some(AssessmentSummary {
        scores: outcome.scores,
        completed_at: Utc::now(),
    });

    let level = talent.current_role_level.unwrap_or(RoleLevel::L1);
    let projection = service.project(&ProjectionInput {
        level,
        years_in_luxury: talent.years_in_luxury,
        scores: Some(outcome.scores),
    });
    println!("\nCareer projection ({})", projection.engine_version);
    println!(
        "- current: {} {}",
        projection.current_role.level.label(),
        projection.current_role.title
    );
    println!(
        "- next: {} ({}) | {}",
        projection.next_role.level.label(),
        projection.next_role.candidate_titles.join(" / "),
        projection.next_role.readiness.label()
    );
    println!(
        "- timeline: {}-{} months",
        projection.timeline.min_months, projection.timeline.max_months
    );
    for gap in &projection.capability_gaps {
        println!("- gap: {gap}");
    }
    for experience in &projection.recommended_experiences {
        println!("- try: {experience}");
    }

    let summary = service.recompute_for_talent(&talent, &sample_opportunities())?;
    println!(
        "\nMatching ({}) | {} evaluated | {} persisted | {} below {}",
        summary.engine_version,
        summary.evaluated,
        summary.persisted(),
        summary.discarded,
        service.scorer().config().minimum_score
    );
    for record in service.matches_for_talent(&talent.id)? {
        println!(
            "- {}: {} | compensation {}",
            record.opportunity_id.0,
            record.score_total,
            record.compensation_alignment.label()
        );
        if show_breakdown {
            let b = &record.score_breakdown;
            println!(
                "    role {} | division {} | store {} | capability {}",
                b.role_fit, b.division_fit, b.store_context, b.capability_fit
            );
            println!(
                "    geography {} | experience {} | preference {}",
                b.geography, b.experience_block, b.preference
            );
        }
    }

    Ok(())
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined = labels.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

/// Picks the third option of every question, a solid but imperfect profile.
fn sample_answers() -> AssessmentAnswers {
    AssessmentScorer::default()
        .questions()
        .iter()
        .filter_map(|question| {
            question
                .options
                .get(2)
                .map(|option| (question.id.to_string(), option.id.to_string()))
        })
        .collect()
}

fn sample_talent() -> Talent {
    Talent {
        id: TalentId("demo-talent".to_string()),
        current_role_level: Some(RoleLevel::L3),
        current_store_tier: Some(StoreTier::T2),
        divisions_expertise: BTreeSet::from([Division::Watches, Division::HighJewelry]),
        years_in_luxury: 6.0,
        current_location: Some("Milan".to_string()),
        assessment_summary: None,
        career_preferences: Some(CareerPreferences {
            timeline: TimelineStance::OpenToOpportunities,
            target_role_levels: BTreeSet::from([RoleLevel::L4]),
            target_store_tiers: BTreeSet::from([StoreTier::T1, StoreTier::T2]),
            target_divisions: BTreeSet::from([Division::Watches]),
            target_locations: vec!["Milan".to_string(), "Geneva".to_string()],
            mobility: Some(MobilityRadius::International),
            compensation_expectation: Some(CompensationExpectation {
                base: Some(62_000),
                currency: Some("EUR".to_string()),
            }),
        }),
        experience_blocks: vec![
            ExperienceBlock {
                block_type: ExperienceBlockType::Clienteling,
                title: "Senior Client Advisor".to_string(),
                employer: Some("Maison Orologi".to_string()),
                years: Some(3.5),
            },
            ExperienceBlock {
                block_type: ExperienceBlockType::Leadership,
                title: "Team Leader".to_string(),
                employer: Some("Maison Orologi".to_string()),
                years: Some(2.0),
            },
        ],
    }
}

fn sample_opportunities() -> Vec<Opportunity> {
    let opportunity = |id: &str,
                       role_level: RoleLevel,
                       division: Division,
                       tier: StoreTier,
                       city: &str,
                       region: &str,
                       band: Option<(u32, u32)>| {
        Opportunity {
            id: OpportunityId(id.to_string()),
            role_level,
            division: Some(division),
            required_experience_years: Some(5.0),
            compensation_range: band.map(|(min, max)| CompensationRange {
                min_base: Some(min),
                max_base: Some(max),
                variable_pct: Some(15.0),
                currency: Some("EUR".to_string()),
            }),
            store: Some(Store {
                tier,
                city: city.to_string(),
                region: region.to_string(),
            }),
        }
    };

    vec![
        opportunity(
            "milan-watches-asm",
            RoleLevel::L4,
            Division::Watches,
            StoreTier::T1,
            "Milan",
            "Southern Europe",
            Some((58_000, 70_000)),
        ),
        opportunity(
            "geneva-jewelry-asm",
            RoleLevel::L4,
            Division::HighJewelry,
            StoreTier::T2,
            "Geneva",
            "Switzerland",
            Some((65_000, 80_000)),
        ),
        opportunity(
            "outlet-beauty-advisor",
            RoleLevel::L1,
            Division::Beauty,
            StoreTier::T5,
            "Serravalle",
            "Southern Europe",
            None,
        ),
    ]
}
