//! Cancer insurance selection: coverage amount, tier, and age band.

use crate::benefits;
use crate::domain::answers::UserAnswers;
use crate::domain::product::{ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::rating::cancer::CoverageAmountBand;
use crate::rating::{self, AgeBracket, CoverageTier};

use super::{fallback_product, match_product, recommendation, DEFAULT_AGE};

const GENERIC_BENEFITS: &[&str] = &[
    "Cancer diagnosis benefit",
    "Lump sum payment",
    "No waiting period for accidents",
];

pub(super) fn recommend(
    answers: &UserAnswers,
    collection: &ProductCollection,
) -> Vec<ProductRecommendation> {
    if collection.products.is_empty() {
        return Vec::new();
    }

    let (band, amount_reason) = CoverageAmountBand::select(answers.coverage_amount.as_deref());
    let (tier, tier_reason) = CoverageTier::from_answer(answers.coverage_type.as_deref());
    let age = answers.age.unwrap_or(DEFAULT_AGE);

    let price = rating::cancer::monthly_premium(band, AgeBracket::of(age), tier);
    let benefits =
        PlanBenefits::Cancer(benefits::cancer::schedule(band, answers.coverage_type.as_deref()));
    let reason = format!("{amount_reason}. {tier_reason}. Based on age {age}.");

    let derived = ProductSelector {
        tier: Some(tier.label().to_owned()),
        coverage_amount: Some(band.label().to_owned()),
        ..ProductSelector::default()
    };
    let product = match match_product(collection, &derived) {
        Some(product) => product.clone(),
        None => fallback_product(
            collection,
            format!("{} - {}, {}", collection.name, tier.label(), band.label()),
            GENERIC_BENEFITS,
        ),
    };

    vec![recommendation(product, price, reason, benefits)]
}
