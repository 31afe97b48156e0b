//! Short term accident/sickness pay selection: daily benefit, benefit
//! period, and age band.

use rust_decimal::Decimal;

use crate::benefits;
use crate::domain::answers::UserAnswers;
use crate::domain::product::{ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::rating::short_term::{BenefitPeriod, DailyBenefit};
use crate::rating::{self, ShortTermAgeBracket};

use super::{fallback_product, match_product, recommendation, DEFAULT_AGE};

const GENERIC_BENEFITS: &[&str] = &[
    "Daily benefit for accident or sickness",
    "Short-term income replacement",
    "No waiting period for accidents",
];

pub(super) fn recommend(
    answers: &UserAnswers,
    collection: &ProductCollection,
) -> Vec<ProductRecommendation> {
    if collection.products.is_empty() {
        return Vec::new();
    }

    let age = answers.age.unwrap_or(DEFAULT_AGE);

    // The raw answer drives both display and pricing; "$50" without the
    // "/Day" suffix (the legacy default) prices to zero and displays as
    // $0/Day rather than guessing an amount.
    let raw_daily = answers.daily_benefit.as_deref().unwrap_or("$50");
    let normalized_daily = raw_daily.replace("/day", "/Day");
    let daily = DailyBenefit::parse(&normalized_daily);
    let daily_reason = format!("Selected daily benefit of {normalized_daily}");

    let (period, period_reason) = BenefitPeriod::select(answers.benefit_period.as_deref());

    let price = match daily {
        Some(daily) => {
            rating::short_term::monthly_premium(period, ShortTermAgeBracket::of(age), daily)
        }
        None => Decimal::ZERO,
    };
    let benefits = PlanBenefits::ShortTerm(benefits::short_term::schedule(raw_daily));
    let reason = format!("{daily_reason}. {period_reason}. Based on age {age}.");

    let derived = ProductSelector {
        benefit_period: Some(period.label().to_owned()),
        daily_benefit: daily.map(|daily| daily.label().to_owned()),
        ..ProductSelector::default()
    };
    let product = match match_product(collection, &derived) {
        Some(product) => product.clone(),
        None => fallback_product(
            collection,
            format!("{} - {}, {}", collection.name, period.label(), normalized_daily),
            GENERIC_BENEFITS,
        ),
    };

    vec![recommendation(product, price, reason, benefits)]
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::ProductCatalog;
    use crate::domain::answers::UserAnswers;
    use crate::domain::recommendation::PlanBenefits;

    use super::recommend;

    fn answers(daily: Option<&str>, period: Option<&str>, age: Option<i64>) -> UserAnswers {
        UserAnswers {
            daily_benefit: daily.map(str::to_owned),
            benefit_period: period.map(str::to_owned),
            age,
            ..UserAnswers::default()
        }
    }

    #[test]
    fn sixty_day_period_and_top_daily_benefit_price_from_the_card() {
        let catalog = ProductCatalog::builtin();
        let collection =
            catalog.collection("Short Term Accident/Sickness Pay").expect("collection");

        let results = recommend(
            &answers(Some("$200/Day"), Some("60-Day Benefit Period"), Some(63)),
            collection,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, Decimal::new(36387, 2));
        assert_eq!(results[0].product.name, "Short Term Pay - $200/Day, 60-Day");
    }

    #[test]
    fn an_unanswered_daily_benefit_prices_to_zero_and_displays_zero_per_day() {
        let catalog = ProductCatalog::builtin();
        let collection =
            catalog.collection("Short Term Accident/Sickness Pay").expect("collection");

        let results = recommend(&answers(None, None, Some(40)), collection);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, Decimal::ZERO);
        assert!(results[0].reason.contains("Selected daily benefit of $50"));
        match results[0].benefits.as_ref().expect("benefits") {
            PlanBenefits::ShortTerm(benefits) => assert_eq!(benefits.daily_benefit, "$0/Day"),
            other => panic!("unexpected benefits variant: {other:?}"),
        }
        // No product matches a missing daily benefit; the first product
        // stands in.
        assert_eq!(results[0].product.product_id, collection.products[0].product_id);
    }
}
