use std::fs;
use std::io::Read;
use std::path::Path;

use coverly_core::config::{AppConfig, LoadOptions};
use coverly_core::{PlanBenefits, ProductRecommendation, RawAnswers};

use super::{build_engine, CommandResult};

pub fn run(collection: &str, answers_path: &Path, json: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::failure("quote", "config_validation", error.to_string(), 2),
    };

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(error) => return CommandResult::failure("quote", "catalog_load", error, 3),
    };

    let answers = match read_answers(answers_path) {
        Ok(answers) => answers,
        Err(error) => return CommandResult::failure("quote", "answers_load", error, 4),
    };

    let recommendations = match engine.recommend(&answers, collection) {
        Ok(recommendations) => recommendations,
        Err(error) => return CommandResult::failure("quote", "domain", error.to_string(), 1),
    };

    if json {
        let output = serde_json::to_string_pretty(&recommendations)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
        return CommandResult { exit_code: 0, output };
    }

    if recommendations.is_empty() {
        return CommandResult::success(
            "quote",
            format!("no recommendation available for collection `{collection}`"),
        );
    }

    CommandResult { exit_code: 0, output: render_human(collection, &recommendations) }
}

fn read_answers(path: &Path) -> Result<RawAnswers, String> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|error| format!("could not read answers from stdin: {error}"))?;
        buffer
    } else {
        fs::read_to_string(path)
            .map_err(|error| format!("could not read answers file `{}`: {error}", path.display()))?
    };

    serde_json::from_str(&raw).map_err(|error| format!("could not parse answers JSON: {error}"))
}

fn render_human(collection: &str, recommendations: &[ProductRecommendation]) -> String {
    let mut lines = vec![format!("recommendation for {collection}:")];

    for recommendation in recommendations {
        lines.push(format!("- product: {}", recommendation.product.name));
        if !recommendation.product.sku.is_empty() {
            lines.push(format!("  sku: {}", recommendation.product.sku));
        }
        lines.push(format!("  monthly premium: ${}", recommendation.price));
        lines.push(format!("  reason: {}", recommendation.reason));

        if let Some(benefits) = &recommendation.benefits {
            lines.push("  benefits:".to_string());
            lines.extend(render_benefits(benefits));
        }
    }

    lines.join("\n")
}

fn render_benefits(benefits: &PlanBenefits) -> Vec<String> {
    match benefits {
        PlanBenefits::Accident(plan) => vec![
            format!("    hospital admission: {}", plan.hospital_admission),
            format!("    hospital confinement: {}", plan.hospital_confinement),
            format!("    emergency room: {}", plan.emergency_room),
            format!("    doctor visits: {}", plan.doctor_visits),
            format!("    wellness benefit: {}", plan.wellness_benefit),
        ],
        PlanBenefits::Cancer(plan) => vec![
            format!("    {}", plan.covered_members),
            format!("    invasive cancer (insured): {}", plan.invasive_cancer.insured),
            format!("    invasive cancer (spouse): {}", plan.invasive_cancer.spouse),
            format!("    invasive cancer (children): {}", plan.invasive_cancer.children),
            format!("    skin cancer (insured): {}", plan.skin_cancer.insured),
        ],
        PlanBenefits::HospitalIndemnity(plan) => vec![
            format!("    hospital admission: {}", plan.hospital_admission),
            format!(
                "    hospital per day: {} ({})",
                plan.hospital_per_day.amount, plan.hospital_per_day.max_days
            ),
            format!(
                "    emergency room: {} ({})",
                plan.emergency_room.amount, plan.emergency_room.max_visits
            ),
        ],
        PlanBenefits::CriticalIllness(plan) => {
            let mut lines = vec![format!(
                "    insured: face ${}, max benefit ${}",
                plan.insured.face_amount, plan.insured.max_benefit
            )];
            if let Some(spouse) = &plan.spouse {
                lines.push(format!(
                    "    spouse: face ${}, max benefit ${}",
                    spouse.face_amount, spouse.max_benefit
                ));
            }
            if let Some(children) = &plan.children {
                lines.push(format!(
                    "    children: face ${}, max benefit ${}",
                    children.face_amount, children.max_benefit
                ));
            }
            lines
        }
        PlanBenefits::ShortTerm(plan) => {
            vec![format!("    daily benefit: {}", plan.daily_benefit)]
        }
    }
}
