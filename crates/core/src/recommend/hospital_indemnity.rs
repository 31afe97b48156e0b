//! Hospital indemnity selection: plan level, tier, and age band.

use crate::benefits;
use crate::domain::answers::UserAnswers;
use crate::domain::product::{ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::rating::{self, AgeBracket, CoverageTier, PlanCode};

use super::{fallback_product, match_product, recommendation, DEFAULT_AGE};

const GENERIC_BENEFITS: &[&str] = &[
    "Daily hospital benefit",
    "Outpatient surgery benefit",
    "Emergency room benefit",
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
    let age = answers.age.unwrap_or(DEFAULT_AGE);

    let price = rating::hospital_indemnity::monthly_premium(plan, AgeBracket::of(age), tier);
    let benefits = PlanBenefits::HospitalIndemnity(benefits::hospital_indemnity::schedule(plan));
    let reason = format!("{plan_reason}. {tier_reason}. Based on age {age}.");

    let derived = ProductSelector {
        plan: Some(plan.label().to_owned()),
        tier: Some(tier.label().to_owned()),
        ..ProductSelector::default()
    };
    let product = match match_product(collection, &derived) {
        Some(product) => product.clone(),
        None => fallback_product(
            collection,
            format!("Hospital Indemnity - {}, {}", plan.label(), tier.label()),
            GENERIC_BENEFITS,
        ),
    };

    vec![recommendation(product, price, reason, benefits)]
}

/// Plan choice resolves by keyword; "basic"/"lower" land on Plan A,
/// "enhanced"/"comprehensive" on Plan B, anything else on Plan A.
fn select_plan(answer: Option<&str>) -> (PlanCode, &'static str) {
    if let Some(choice) = answer {
        if choice.contains("Plan A") || choice.contains("basic") || choice.contains("lower") {
            return (
                PlanCode::A,
                "Plan A selected - Basic hospital indemnity coverage with lower premiums",
            );
        }
        if choice.contains("Plan B") || choice.contains("enhanced") || choice.contains("comprehensive")
        {
            return (
                PlanCode::B,
                "Plan B selected - Enhanced hospital indemnity coverage with higher benefits",
            );
        }
    }
    (PlanCode::A, "Plan A selected - Basic hospital indemnity coverage")
}

#[cfg(test)]
mod tests {
    use super::select_plan;
    use crate::rating::PlanCode;

    #[test]
    fn keyword_variants_select_the_expected_plan() {
        assert_eq!(select_plan(Some("Plan A")).0, PlanCode::A);
        assert_eq!(select_plan(Some("the basic one with lower premiums")).0, PlanCode::A);
        assert_eq!(select_plan(Some("enhanced coverage please")).0, PlanCode::B);
        assert_eq!(select_plan(Some("comprehensive")).0, PlanCode::B);
    }

    #[test]
    fn plan_a_keywords_win_when_both_plans_are_mentioned() {
        // "basic" is checked before "enhanced", matching the stated
        // first-match-wins default order.
        assert_eq!(select_plan(Some("basic or enhanced")).0, PlanCode::A);
    }

    #[test]
    fn missing_choice_defaults_to_plan_a() {
        let (plan, reason) = select_plan(None);
        assert_eq!(plan, PlanCode::A);
        assert_eq!(reason, "Plan A selected - Basic hospital indemnity coverage");
    }
}
