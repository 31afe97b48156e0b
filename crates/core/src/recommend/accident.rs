//! Accident insurance selection: plan level and coverage tier.

use crate::benefits;
use crate::domain::answers::UserAnswers;
use crate::domain::product::{ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::rating::{self, CoverageTier, PlanCode};

use super::{fallback_product, match_product, recommendation};

const GENERIC_BENEFITS: &[&str] = &[
    "Hospital admission and confinement benefits",
    "Emergency room and doctor visit benefits",
    "Fracture and surgery benefits",
];

pub(super) fn recommend(
    answers: &UserAnswers,
    collection: &ProductCollection,
) -> Vec<ProductRecommendation> {
    if collection.products.is_empty() {
        return Vec::new();
    }

    let (plan, plan_reason) = select_plan(answers.plan_choice.as_deref());
    let (tier, tier_reason) = CoverageTier::from_answer(answers.coverage_type.as_deref());

    let price = rating::accident::monthly_premium(plan, tier);
    let benefits = PlanBenefits::Accident(benefits::accident::schedule(plan));
    let reason = format!("{plan_reason}. {tier_reason}.");

    let derived = ProductSelector {
        plan: Some(plan.label().to_owned()),
        tier: Some(tier.label().to_owned()),
        ..ProductSelector::default()
    };
    let product = match match_product(collection, &derived) {
        Some(product) => product.clone(),
        None => fallback_product(
            collection,
            format!("{} - {}, {}", collection.name, plan.label(), tier.label()),
            GENERIC_BENEFITS,
        ),
    };

    vec![recommendation(product, price, reason, benefits)]
}

/// Plan choice resolves by the keywords the plan options carry; anything
/// else takes Plan A.
fn select_plan(answer: Option<&str>) -> (PlanCode, &'static str) {
    if let Some(choice) = answer {
        if choice.contains("Plan A") || choice.contains("Higher reimbursements") {
            return (
                PlanCode::A,
                "Plan A selected - Higher reimbursements for hospital stays, surgeries, and doctor visits",
            );
        }
        if choice.contains("Plan B") || choice.contains("budget-friendly") {
            return (PlanCode::B, "Plan B selected - Lower reimbursements, but more budget-friendly");
        }
    }
    (
        PlanCode::A,
        "Default selection - Higher reimbursements for hospital stays, surgeries, and doctor visits",
    )
}

#[cfg(test)]
mod tests {
    use super::select_plan;
    use crate::rating::PlanCode;

    #[test]
    fn plan_keywords_resolve_either_plan() {
        assert_eq!(select_plan(Some("Plan A - Higher reimbursements")).0, PlanCode::A);
        assert_eq!(select_plan(Some("I want the budget-friendly one")).0, PlanCode::B);
        assert_eq!(select_plan(Some("Plan B")).0, PlanCode::B);
    }

    #[test]
    fn unrecognized_or_missing_choices_default_to_plan_a() {
        let (plan, reason) = select_plan(Some("the shiny one"));
        assert_eq!(plan, PlanCode::A);
        assert!(reason.starts_with("Default selection"));
        assert_eq!(select_plan(None).0, PlanCode::A);
    }
}
