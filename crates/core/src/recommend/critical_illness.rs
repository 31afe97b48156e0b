//! Critical illness selection: face amount, tier, age band, and tobacco
//! status. The only line whose recommendation can fail: building the
//! benefit schedule requires a coverage type.

use crate::benefits;
use crate::domain::answers::UserAnswers;
use crate::domain::product::{ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::errors::DomainError;
use crate::rating::critical_illness::CriticalAmountBand;
use crate::rating::{self, AgeBracket, CoverageTier, TobaccoStatus};

use super::{fallback_product, match_product, recommendation, DEFAULT_AGE};

const GENERIC_BENEFITS: &[&str] = &[
    "Lump sum benefit for critical illness diagnosis",
    "Coverage for major illnesses",
    "No restrictions on benefit use",
];

pub(super) fn recommend(
    answers: &UserAnswers,
    collection: &ProductCollection,
) -> Result<Vec<ProductRecommendation>, DomainError> {
    if collection.products.is_empty() {
        return Ok(Vec::new());
    }

    let (band, amount_reason) = CriticalAmountBand::select(answers.coverage_amount.as_deref());
    let (tier, tier_reason) = CoverageTier::from_answer(answers.coverage_type.as_deref());
    let age = answers.age.unwrap_or(DEFAULT_AGE);
    let status = TobaccoStatus::from_flag(answers.tobacco_use);
    let tobacco_reason = match status {
        TobaccoStatus::Tobacco => "Tobacco user rates applied",
        TobaccoStatus::NonTobacco => "Non-tobacco user rates applied",
    };

    let price =
        rating::critical_illness::monthly_premium(status, AgeBracket::of(age), tier, band.value());
    let benefits = PlanBenefits::CriticalIllness(benefits::critical_illness::schedule(
        answers.coverage_type.as_deref(),
        band.value(),
    )?);
    let reason = format!("{amount_reason}. {tier_reason}. Based on age {age}. {tobacco_reason}.");

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

    Ok(vec![recommendation(product, price, reason, benefits)])
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::ProductCatalog;
    use crate::domain::answers::UserAnswers;
    use crate::errors::DomainError;

    use super::recommend;

    fn answers(coverage_type: Option<&str>, amount: Option<&str>, tobacco: bool) -> UserAnswers {
        UserAnswers {
            coverage_type: coverage_type.map(str::to_owned),
            coverage_amount: amount.map(str::to_owned),
            tobacco_use: tobacco,
            age: Some(35),
            ..UserAnswers::default()
        }
    }

    #[test]
    fn tobacco_rates_apply_when_the_flag_is_set() {
        let catalog = ProductCatalog::builtin();
        let collection = catalog.collection("Critical Illness Insurance").expect("collection");

        let results = recommend(&answers(Some("Just me"), Some("$5,000"), true), collection)
            .expect("recommend");
        assert_eq!(results.len(), 1);
        // Tobacco, 30-39, individual at the base face amount.
        assert_eq!(results[0].price, Decimal::new(638, 2));
        assert!(results[0].reason.contains("Tobacco user rates applied"));
    }

    #[test]
    fn the_missing_coverage_type_failure_propagates() {
        let catalog = ProductCatalog::builtin();
        let collection = catalog.collection("Critical Illness Insurance").expect("collection");

        let error = recommend(&answers(None, Some("$25,000"), false), collection)
            .expect_err("missing coverage type");
        assert_eq!(error, DomainError::MissingCoverageType);
    }

    #[test]
    fn the_top_band_scales_the_base_rate_five_fold() {
        let catalog = ProductCatalog::builtin();
        let collection = catalog.collection("Critical Illness Insurance").expect("collection");

        let results = recommend(&answers(Some("Just me"), Some("$25,000"), false), collection)
            .expect("recommend");
        // Non-tobacco, 30-39, individual: 3.74 base at $5,000, times five.
        assert_eq!(results[0].price, Decimal::new(1870, 2));
    }
}
