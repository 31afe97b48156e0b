use coverly_core::config::{AppConfig, LoadOptions};
use coverly_core::rating::short_term::{BenefitPeriod, DailyBenefit};
use coverly_core::rating::{self, CoverageTier, PlanCode, ShortTermAgeBracket};
use coverly_core::{InsuranceLine, RecommendationEngine};
use rust_decimal::Decimal;
use serde::Serialize;

use super::build_engine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });

            match build_engine(&config) {
                Ok(engine) => {
                    checks.push(check_catalog_integrity(&engine));
                    checks.push(check_rating_smoke());
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "catalog_integrity",
                        status: CheckStatus::Fail,
                        details: error,
                    });
                    checks.push(DoctorCheck {
                        name: "rating_smoke",
                        status: CheckStatus::Skipped,
                        details: "skipped because catalogs did not load".to_string(),
                    });
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "catalog_integrity",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "rating_smoke",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_catalog_integrity(engine: &RecommendationEngine) -> DoctorCheck {
    let mut problems = Vec::new();

    for line in InsuranceLine::ALL {
        let name = line.collection_name();
        match engine.product_catalog().collection(name) {
            Some(collection) if collection.products.is_empty() => {
                problems.push(format!("collection `{name}` has no products"));
            }
            Some(collection) => {
                for product in &collection.products {
                    if product.selector.is_none() {
                        problems.push(format!(
                            "product `{}` in `{name}` has no selector",
                            product.name
                        ));
                    }
                }
            }
            None => problems.push(format!("collection `{name}` is missing")),
        }

        if engine.question_catalog().collection(name).is_none() {
            problems.push(format!("question collection `{name}` is missing"));
        }
    }

    if problems.is_empty() {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Pass,
            details: "all five lines have products, selectors, and questions".to_string(),
        }
    } else {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

fn check_rating_smoke() -> DoctorCheck {
    let accident = rating::accident::monthly_premium(PlanCode::A, CoverageTier::Individual);
    let short_term = rating::short_term::monthly_premium(
        BenefitPeriod::FourteenDay,
        ShortTermAgeBracket::of(55),
        DailyBenefit::Daily100,
    );

    let accident_ok = accident == Decimal::new(1403, 2);
    let short_term_ok = short_term == Decimal::new(3804, 2);

    if accident_ok && short_term_ok {
        DoctorCheck {
            name: "rating_smoke",
            status: CheckStatus::Pass,
            details: format!(
                "accident Plan A/Individual rated at {accident}, short term $100/Day 14-Day at {short_term}"
            ),
        }
    } else {
        DoctorCheck {
            name: "rating_smoke",
            status: CheckStatus::Fail,
            details: format!(
                "unexpected rates: accident {accident} (want 14.03), short term {short_term} (want 38.04)"
            ),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = vec![report.summary.clone()];
    for check in &report.checks {
        let status = match check.status {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skipped",
        };
        lines.push(format!("- {}: {} ({})", check.name, status, check.details));
    }
    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
