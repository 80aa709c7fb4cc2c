use serde::{Deserialize, Serialize};

use crate::scoring::domain::{CompetencyDimension, CompetencyScores};

const MAX_RECOMMENDED_PATHS: usize = 5;
const BALANCED_PROFILE_MAX_STD_DEV: f64 = 10.0;

const FALLBACK_PATHS: [&str; 2] = ["Senior Sales Advisor", "Product Specialist"];

/// Human-readable interpretation of a set of competency scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInsights {
    pub strengths: Vec<CompetencyDimension>,
    pub development_areas: Vec<CompetencyDimension>,
    pub overall_score: u8,
    pub recommended_paths: Vec<String>,
}

pub(crate) fn derive_insights(scores: &CompetencyScores) -> AssessmentInsights {
    let mut ranked = scores.entries().to_vec();
    // stable: equal scores keep dimension order
    ranked.sort_by(|left, right| right.1.cmp(&left.1));

    let strengths = ranked
        .iter()
        .take(2)
        .map(|(dimension, _)| *dimension)
        .collect();
    let development_areas = ranked
        .iter()
        .skip(ranked.len().saturating_sub(2))
        .map(|(dimension, _)| *dimension)
        .collect();

    let overall_score = scores.mean().round() as u8;

    AssessmentInsights {
        strengths,
        development_areas,
        overall_score,
        recommended_paths: recommended_paths(scores, overall_score),
    }
}

fn recommended_paths(scores: &CompetencyScores, overall_score: u8) -> Vec<String> {
    let mut paths: Vec<&'static str> = Vec::new();

    if scores.clienteling >= 75 && scores.service >= 70 {
        paths.extend([
            "Client Advisor",
            "VIC Relationship Manager",
            "Clienteling Lead",
        ]);
    }

    if scores.leadership >= 70 {
        paths.extend(["Assistant Store Manager", "Department Manager"]);
        if scores.operations >= 65 {
            paths.push("Store Manager");
        }
    }

    if scores.operations >= 75 {
        paths.extend([
            "Operations Manager",
            "Stock & Logistics Manager",
            "Visual Merchandising Manager",
        ]);
    }

    if scores.service >= 80 {
        paths.extend(["Client Experience Specialist", "Product Expert"]);
    }

    if standard_deviation(scores) <= BALANCED_PROFILE_MAX_STD_DEV && overall_score >= 70 {
        paths.extend(["Boutique Manager", "Floor Manager"]);
    }

    if paths.is_empty() {
        return FALLBACK_PATHS.iter().map(|path| path.to_string()).collect();
    }

    let mut unique: Vec<String> = Vec::with_capacity(MAX_RECOMMENDED_PATHS);
    for path in paths {
        if unique.len() == MAX_RECOMMENDED_PATHS {
            break;
        }
        if !unique.iter().any(|existing| existing == path) {
            unique.push(path.to_string());
        }
    }
    unique
}

fn standard_deviation(scores: &CompetencyScores) -> f64 {
    let mean = scores.mean();
    let entries = scores.entries();
    let variance = entries
        .iter()
        .map(|(_, score)| {
            let delta = f64::from(*score) - mean;
            delta * delta
        })
        .sum::<f64>()
        / entries.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(service: u8, clienteling: u8, operations: u8, leadership: u8) -> CompetencyScores {
        CompetencyScores {
            service,
            clienteling,
            operations,
            leadership,
        }
    }

    #[test]
    fn strengths_and_development_areas_partition_dimensions() {
        let insights = derive_insights(&scores(55, 90, 70, 40));

        assert_eq!(
            insights.strengths,
            vec![
                CompetencyDimension::Clienteling,
                CompetencyDimension::Operations,
            ]
        );
        assert_eq!(
            insights.development_areas,
            vec![
                CompetencyDimension::Service,
                CompetencyDimension::Leadership,
            ]
        );
        for dimension in CompetencyDimension::ALL {
            let in_strengths = insights.strengths.contains(&dimension);
            let in_development = insights.development_areas.contains(&dimension);
            assert!(
                in_strengths ^ in_development,
                "{dimension:?} must be in one bucket"
            );
        }
    }

    #[test]
    fn ties_keep_dimension_order() {
        let insights = derive_insights(&CompetencyScores::uniform(60));

        assert_eq!(
            insights.strengths,
            vec![
                CompetencyDimension::Service,
                CompetencyDimension::Clienteling,
            ]
        );
        assert_eq!(
            insights.development_areas,
            vec![
                CompetencyDimension::Operations,
                CompetencyDimension::Leadership,
            ]
        );
    }

    #[test]
    fn overall_score_rounds_the_mean() {
        // mean 62.5
        let insights = derive_insights(&scores(60, 65, 60, 65));
        assert_eq!(insights.overall_score, 63);
    }

    #[test]
    fn falls_back_when_no_rule_fires() {
        let insights = derive_insights(&scores(50, 50, 50, 50));
        assert_eq!(
            insights.recommended_paths,
            vec!["Senior Sales Advisor", "Product Specialist"]
        );
    }

    #[test]
    fn leadership_adds_store_manager_with_strong_operations() {
        let insights = derive_insights(&scores(40, 40, 66, 72));
        assert_eq!(
            insights.recommended_paths,
            vec![
                "Assistant Store Manager",
                "Department Manager",
                "Store Manager",
            ]
        );
    }

    #[test]
    fn paths_are_truncated_to_five() {
        let insights = derive_insights(&CompetencyScores::uniform(100));
        assert_eq!(
            insights.recommended_paths,
            vec![
                "Client Advisor",
                "VIC Relationship Manager",
                "Clienteling Lead",
                "Assistant Store Manager",
                "Department Manager",
            ]
        );
    }

    #[test]
    fn balanced_high_profile_gets_generalist_paths() {
        // only the balanced rule fires: stdev ~1.3, overall 71
        let insights = derive_insights(&scores(72, 72, 72, 69));
        assert_eq!(
            insights.recommended_paths,
            vec!["Boutique Manager", "Floor Manager"]
        );
    }
}
