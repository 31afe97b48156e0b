//! Compiled-in catalog seeds. Display prices carry the youngest-bracket
//! rate for the variant; the engine always overwrites them with the rated
//! premium at recommendation time.

use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductCollection, ProductSelector};
use crate::domain::question::{Question, QuestionCollection, QuestionType};
use crate::intake::names;

use super::{ProductCatalog, QuestionCatalog};

#[derive(Clone, Copy, Debug)]
struct ProductSeed {
    product_id: u64,
    name: &'static str,
    sku: &'static str,
    sku_id: u64,
    variant_id: u64,
    price_cents: i64,
    plan: Option<&'static str>,
    tier: Option<&'static str>,
    amount: Option<&'static str>,
    period: Option<&'static str>,
    daily: Option<&'static str>,
}

const fn plan_tier(
    product_id: u64,
    name: &'static str,
    sku: &'static str,
    sku_id: u64,
    variant_id: u64,
    price_cents: i64,
    plan: &'static str,
    tier: &'static str,
) -> ProductSeed {
    ProductSeed {
        product_id,
        name,
        sku,
        sku_id,
        variant_id,
        price_cents,
        plan: Some(plan),
        tier: Some(tier),
        amount: None,
        period: None,
        daily: None,
    }
}

const fn tier_amount(
    product_id: u64,
    name: &'static str,
    sku: &'static str,
    sku_id: u64,
    variant_id: u64,
    price_cents: i64,
    tier: &'static str,
    amount: &'static str,
) -> ProductSeed {
    ProductSeed {
        product_id,
        name,
        sku,
        sku_id,
        variant_id,
        price_cents,
        plan: None,
        tier: Some(tier),
        amount: Some(amount),
        period: None,
        daily: None,
    }
}

const fn tier_only(
    product_id: u64,
    name: &'static str,
    sku: &'static str,
    sku_id: u64,
    variant_id: u64,
    price_cents: i64,
    tier: &'static str,
) -> ProductSeed {
    ProductSeed {
        product_id,
        name,
        sku,
        sku_id,
        variant_id,
        price_cents,
        plan: None,
        tier: Some(tier),
        amount: None,
        period: None,
        daily: None,
    }
}

const fn period_daily(
    product_id: u64,
    name: &'static str,
    sku: &'static str,
    sku_id: u64,
    variant_id: u64,
    price_cents: i64,
    period: &'static str,
    daily: &'static str,
) -> ProductSeed {
    ProductSeed {
        product_id,
        name,
        sku,
        sku_id,
        variant_id,
        price_cents,
        plan: None,
        tier: None,
        amount: None,
        period: Some(period),
        daily: Some(daily),
    }
}

const ACCIDENT_SEEDS: &[ProductSeed] = &[
    plan_tier(101, "Accident Insurance - Plan A, Individual", "ACC-A-IND", 9101, 7101, 1403, "Plan A", "Individual"),
    plan_tier(102, "Accident Insurance - Plan A, Individual+1", "ACC-A-IND1", 9102, 7102, 2959, "Plan A", "Individual+1"),
    plan_tier(103, "Accident Insurance - Plan A, Family", "ACC-A-FAM", 9103, 7103, 4283, "Plan A", "Family"),
    plan_tier(104, "Accident Insurance - Plan B, Individual", "ACC-B-IND", 9104, 7104, 2097, "Plan B", "Individual"),
    plan_tier(105, "Accident Insurance - Plan B, Individual+1", "ACC-B-IND1", 9105, 7105, 4343, "Plan B", "Individual+1"),
    plan_tier(106, "Accident Insurance - Plan B, Family", "ACC-B-FAM", 9106, 7106, 6378, "Plan B", "Family"),
];

const CANCER_SEEDS: &[ProductSeed] = &[
    tier_amount(201, "Cancer Insurance - Individual, $5000", "CAN-IND-5", 9201, 7201, 182, "Individual", "$5000"),
    tier_amount(202, "Cancer Insurance - Individual, $10000", "CAN-IND-10", 9202, 7202, 361, "Individual", "$10000"),
    tier_amount(203, "Cancer Insurance - Individual, $15000", "CAN-IND-15", 9203, 7203, 540, "Individual", "$15000"),
    tier_amount(204, "Cancer Insurance - Individual, $20000", "CAN-IND-20", 9204, 7204, 719, "Individual", "$20000"),
    tier_amount(205, "Cancer Insurance - Individual+1, $5000", "CAN-IND1-5", 9205, 7205, 298, "Individual+1", "$5000"),
    tier_amount(206, "Cancer Insurance - Individual+1, $10000", "CAN-IND1-10", 9206, 7206, 591, "Individual+1", "$10000"),
    tier_amount(207, "Cancer Insurance - Individual+1, $15000", "CAN-IND1-15", 9207, 7207, 883, "Individual+1", "$15000"),
    tier_amount(208, "Cancer Insurance - Individual+1, $20000", "CAN-IND1-20", 9208, 7208, 1176, "Individual+1", "$20000"),
    tier_amount(209, "Cancer Insurance - Family, $5000", "CAN-FAM-5", 9209, 7209, 443, "Family", "$5000"),
    tier_amount(210, "Cancer Insurance - Family, $10000", "CAN-FAM-10", 9210, 7210, 879, "Family", "$10000"),
    tier_amount(211, "Cancer Insurance - Family, $15000", "CAN-FAM-15", 9211, 7211, 1314, "Family", "$15000"),
    tier_amount(212, "Cancer Insurance - Family, $20000", "CAN-FAM-20", 9212, 7212, 1749, "Family", "$20000"),
];

const HOSPITAL_SEEDS: &[ProductSeed] = &[
    plan_tier(301, "Hospital Indemnity - Plan A, Individual", "HSP-A-IND", 9301, 7301, 1519, "Plan A", "Individual"),
    plan_tier(302, "Hospital Indemnity - Plan A, Individual+1", "HSP-A-IND1", 9302, 7302, 3039, "Plan A", "Individual+1"),
    plan_tier(303, "Hospital Indemnity - Plan A, Family", "HSP-A-FAM", 9303, 7303, 4540, "Plan A", "Family"),
    plan_tier(304, "Hospital Indemnity - Plan B, Individual", "HSP-B-IND", 9304, 7304, 2291, "Plan B", "Individual"),
    plan_tier(305, "Hospital Indemnity - Plan B, Individual+1", "HSP-B-IND1", 9305, 7305, 4698, "Plan B", "Individual+1"),
    plan_tier(306, "Hospital Indemnity - Plan B, Family", "HSP-B-FAM", 9306, 7306, 6988, "Plan B", "Family"),
];

// Critical illness is sold per tier; the face amount is an election on the
// policy rather than a separate SKU, so the amount dimension stays open.
const CRITICAL_SEEDS: &[ProductSeed] = &[
    tier_only(401, "Critical Illness Insurance - Individual", "CRI-IND", 9401, 7401, 191, "Individual"),
    tier_only(402, "Critical Illness Insurance - Individual+1", "CRI-IND1", 9402, 7402, 250, "Individual+1"),
    tier_only(403, "Critical Illness Insurance - Family", "CRI-FAM", 9403, 7403, 291, "Family"),
];

const SHORT_TERM_SEEDS: &[ProductSeed] = &[
    period_daily(501, "Short Term Pay - $50/Day, 14-Day", "STP-50-14", 9501, 7501, 777, "14-Day", "$50/Day"),
    period_daily(502, "Short Term Pay - $100/Day, 14-Day", "STP-100-14", 9502, 7502, 1544, "14-Day", "$100/Day"),
    period_daily(503, "Short Term Pay - $150/Day, 14-Day", "STP-150-14", 9503, 7503, 2323, "14-Day", "$150/Day"),
    period_daily(504, "Short Term Pay - $200/Day, 14-Day", "STP-200-14", 9504, 7504, 3086, "14-Day", "$200/Day"),
    period_daily(505, "Short Term Pay - $50/Day, 30-Day", "STP-50-30", 9505, 7505, 1431, "30-Day", "$50/Day"),
    period_daily(506, "Short Term Pay - $100/Day, 30-Day", "STP-100-30", 9506, 7506, 2882, "30-Day", "$100/Day"),
    period_daily(507, "Short Term Pay - $150/Day, 30-Day", "STP-150-30", 9507, 7507, 4295, "30-Day", "$150/Day"),
    period_daily(508, "Short Term Pay - $200/Day, 30-Day", "STP-200-30", 9508, 7508, 5733, "30-Day", "$200/Day"),
    period_daily(509, "Short Term Pay - $50/Day, 60-Day", "STP-50-60", 9509, 7509, 2223, "60-Day", "$50/Day"),
    period_daily(510, "Short Term Pay - $100/Day, 60-Day", "STP-100-60", 9510, 7510, 4438, "60-Day", "$100/Day"),
    period_daily(511, "Short Term Pay - $150/Day, 60-Day", "STP-150-60", 9511, 7511, 6656, "60-Day", "$150/Day"),
    period_daily(512, "Short Term Pay - $200/Day, 60-Day", "STP-200-60", 9512, 7512, 8874, "60-Day", "$200/Day"),
];

struct CollectionSeed {
    id: u64,
    name: &'static str,
    description: &'static str,
    common_benefits: &'static [&'static str],
    product_benefits: &'static [&'static str],
    products: &'static [ProductSeed],
}

const COLLECTION_SEEDS: &[CollectionSeed] = &[
    CollectionSeed {
        id: 1,
        name: "Accident Insurance",
        description: "Cash benefits for covered injuries, from ER visits to fractures.",
        common_benefits: &[
            "Pays in addition to other coverage",
            "No deductibles or networks",
            "Guaranteed issue",
        ],
        product_benefits: &[
            "Hospital admission and confinement benefits",
            "Emergency room and doctor visit benefits",
            "Fracture and surgery benefits",
        ],
        products: ACCIDENT_SEEDS,
    },
    CollectionSeed {
        id: 2,
        name: "Cancer Insurance",
        description: "Lump-sum benefits on first diagnosis, for the whole household.",
        common_benefits: &[
            "Lump sum paid directly to you",
            "Covers invasive and skin cancer",
            "Recurrence benefit after treatment-free years",
        ],
        product_benefits: &[
            "Cancer diagnosis benefit",
            "Lump sum payment",
            "No waiting period for accidents",
        ],
        products: CANCER_SEEDS,
    },
    CollectionSeed {
        id: 3,
        name: "Hospital Indemnity Insurance",
        description: "Fixed daily cash benefits for hospital stays and outpatient care.",
        common_benefits: &[
            "Flat benefit per admission and per day",
            "Use the cash however you need",
            "No health questions at enrollment",
        ],
        product_benefits: &[
            "Daily hospital benefit",
            "Outpatient surgery benefit",
            "Emergency room benefit",
        ],
        products: HOSPITAL_SEEDS,
    },
    CollectionSeed {
        id: 4,
        name: "Critical Illness Insurance",
        description: "A lump sum on diagnosis of a covered critical illness.",
        common_benefits: &[
            "Face amounts from $5,000 to $25,000",
            "Spouse and child coverage available",
            "Maximum benefit of three times the face amount",
        ],
        product_benefits: &[
            "Lump sum benefit for critical illness diagnosis",
            "Coverage for major illnesses",
            "No restrictions on benefit use",
        ],
        products: CRITICAL_SEEDS,
    },
    CollectionSeed {
        id: 5,
        name: "Short Term Accident/Sickness Pay",
        description: "Daily income replacement while you recover from an accident or sickness.",
        common_benefits: &[
            "Daily benefit from $50 to $200",
            "Benefit periods of 14, 30, or 60 days",
            "Pays regardless of other income",
        ],
        product_benefits: &[
            "Daily benefit for accident or sickness",
            "Short-term income replacement",
            "No waiting period for accidents",
        ],
        products: SHORT_TERM_SEEDS,
    },
];

fn build_product(seed: &ProductSeed, product_benefits: &[&str]) -> Product {
    Product {
        product_id: seed.product_id,
        name: seed.name.to_owned(),
        price: Decimal::new(seed.price_cents, 2),
        sku: seed.sku.to_owned(),
        sku_id: seed.sku_id,
        variant_id: seed.variant_id,
        product_benefits: product_benefits.iter().map(|benefit| (*benefit).to_owned()).collect(),
        selector: Some(ProductSelector {
            plan: seed.plan.map(str::to_owned),
            tier: seed.tier.map(str::to_owned),
            coverage_amount: seed.amount.map(str::to_owned),
            benefit_period: seed.period.map(str::to_owned),
            daily_benefit: seed.daily.map(str::to_owned),
        }),
    }
}

pub(super) fn product_catalog() -> ProductCatalog {
    ProductCatalog {
        collections: COLLECTION_SEEDS
            .iter()
            .map(|seed| ProductCollection {
                id: seed.id,
                name: seed.name.to_owned(),
                description: seed.description.to_owned(),
                common_benefits: seed
                    .common_benefits
                    .iter()
                    .map(|benefit| (*benefit).to_owned())
                    .collect(),
                products: seed
                    .products
                    .iter()
                    .map(|product| build_product(product, seed.product_benefits))
                    .collect(),
            })
            .collect(),
    }
}

struct QuestionSeed {
    id: &'static str,
    prompt: &'static str,
    name: Option<&'static str>,
    kind: QuestionType,
    options: &'static [&'static str],
    required: bool,
}

const COVERAGE_TYPE_OPTIONS: &[&str] = &["Just me", "Me + 1", "My Family"];

const ACCIDENT_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "accident-age",
        prompt: "What is your age?",
        name: Some(names::AGE),
        kind: QuestionType::Text,
        options: &[],
        required: true,
    },
    QuestionSeed {
        id: "accident-coverage-type",
        prompt: "Who needs coverage?",
        name: Some(names::COVERAGE_TYPE),
        kind: QuestionType::SingleChoice,
        options: COVERAGE_TYPE_OPTIONS,
        required: true,
    },
    QuestionSeed {
        id: "accident-plan-choice",
        prompt: "Which plan level fits you best?",
        name: Some(names::PLAN_CHOICE),
        kind: QuestionType::SingleChoice,
        options: &[
            "Plan A - Higher reimbursements for hospital stays, surgeries, and doctor visits",
            "Plan B - Lower reimbursements, but more budget-friendly",
        ],
        required: true,
    },
];

const CANCER_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "cancer-age",
        prompt: "What is your age?",
        name: Some(names::AGE),
        kind: QuestionType::Text,
        options: &[],
        required: true,
    },
    QuestionSeed {
        id: "cancer-coverage-type",
        prompt: "Who needs coverage?",
        name: Some(names::COVERAGE_TYPE),
        kind: QuestionType::SingleChoice,
        options: COVERAGE_TYPE_OPTIONS,
        required: true,
    },
    QuestionSeed {
        id: "cancer-coverage-amount",
        prompt: "How much coverage would you like?",
        name: Some(names::COVERAGE_AMOUNT),
        kind: QuestionType::SingleChoice,
        options: &["$5,000", "$10,000", "$15,000", "$20,000"],
        required: true,
    },
];

const HOSPITAL_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "hospital-age",
        prompt: "What is your age?",
        name: Some(names::AGE),
        kind: QuestionType::Text,
        options: &[],
        required: true,
    },
    QuestionSeed {
        id: "hospital-coverage-type",
        prompt: "Who needs coverage?",
        name: Some(names::COVERAGE_TYPE),
        kind: QuestionType::SingleChoice,
        options: COVERAGE_TYPE_OPTIONS,
        required: true,
    },
    QuestionSeed {
        id: "hospital-plan-choice",
        prompt: "Which plan level fits you best?",
        name: Some(names::PLAN_CHOICE),
        kind: QuestionType::SingleChoice,
        options: &[
            "Plan A - basic coverage with lower premiums",
            "Plan B - enhanced coverage with higher benefits",
        ],
        required: true,
    },
];

const CRITICAL_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "critical-age",
        prompt: "What is your age?",
        name: Some(names::AGE),
        kind: QuestionType::Text,
        options: &[],
        required: true,
    },
    QuestionSeed {
        id: "critical-coverage-type",
        prompt: "Who needs coverage?",
        name: Some(names::COVERAGE_TYPE),
        kind: QuestionType::SingleChoice,
        options: COVERAGE_TYPE_OPTIONS,
        required: true,
    },
    QuestionSeed {
        id: "critical-coverage-amount",
        prompt: "What face amount would you like?",
        name: Some(names::COVERAGE_AMOUNT),
        kind: QuestionType::SingleChoice,
        options: &["$5,000", "$10,000", "$15,000", "$20,000", "$25,000"],
        required: true,
    },
    QuestionSeed {
        id: "critical-tobacco",
        prompt: "Have you used tobacco products in the last 12 months?",
        name: Some(names::TOBACCO_USE),
        kind: QuestionType::SingleChoice,
        options: &["Yes", "No"],
        required: true,
    },
];

const SHORT_TERM_QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "short-term-age",
        prompt: "What is your age?",
        name: Some(names::AGE),
        kind: QuestionType::Text,
        options: &[],
        required: true,
    },
    QuestionSeed {
        id: "short-term-salary",
        prompt: "What is your annual salary?",
        name: Some(names::ANNUAL_SALARY),
        kind: QuestionType::Text,
        options: &[],
        required: false,
    },
    QuestionSeed {
        id: "short-term-daily-benefit",
        prompt: "How much would you like to receive per day?",
        name: Some(names::DAILY_BENEFIT),
        kind: QuestionType::SingleChoice,
        options: &["$50/Day", "$100/Day", "$150/Day", "$200/Day"],
        required: true,
    },
    QuestionSeed {
        id: "short-term-benefit-period",
        prompt: "How long should the benefit pay out?",
        name: Some(names::BENEFIT_PERIOD),
        kind: QuestionType::SingleChoice,
        options: &[
            "14-Day Benefit Period",
            "30-Day Benefit Period",
            "60-Day Benefit Period",
        ],
        required: true,
    },
];

const QUESTION_COLLECTION_SEEDS: &[(&str, &[QuestionSeed])] = &[
    ("Accident Insurance", ACCIDENT_QUESTIONS),
    ("Cancer Insurance", CANCER_QUESTIONS),
    ("Hospital Indemnity Insurance", HOSPITAL_QUESTIONS),
    ("Critical Illness Insurance", CRITICAL_QUESTIONS),
    ("Short Term Accident/Sickness Pay", SHORT_TERM_QUESTIONS),
];

fn build_question(seed: &QuestionSeed) -> Question {
    Question {
        id: seed.id.to_owned(),
        question: seed.prompt.to_owned(),
        question_name: seed.name.map(str::to_owned),
        kind: seed.kind,
        options: (!seed.options.is_empty())
            .then(|| seed.options.iter().map(|option| (*option).to_owned()).collect()),
        required: seed.required,
    }
}

pub(super) fn question_catalog() -> QuestionCatalog {
    QuestionCatalog {
        collections: QUESTION_COLLECTION_SEEDS
            .iter()
            .map(|(name, questions)| QuestionCollection {
                collection_name: (*name).to_owned(),
                questions: questions.iter().map(build_question).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{product_catalog, question_catalog};

    #[test]
    fn product_ids_and_skus_are_unique_across_the_catalog() {
        let catalog = product_catalog();
        let mut ids = HashSet::new();
        let mut skus = HashSet::new();

        for collection in &catalog.collections {
            for product in &collection.products {
                assert!(ids.insert(product.product_id), "duplicate id {}", product.product_id);
                assert!(skus.insert(product.sku.clone()), "duplicate sku {}", product.sku);
            }
        }
    }

    #[test]
    fn every_seeded_product_carries_a_selector() {
        for collection in product_catalog().collections {
            for product in collection.products {
                assert!(product.selector.is_some(), "{} has no selector", product.name);
            }
        }
    }

    #[test]
    fn question_ids_are_unique_and_aliases_repeat_across_collections() {
        let catalog = question_catalog();
        let mut ids = HashSet::new();
        let mut age_questions = 0;

        for collection in &catalog.collections {
            for question in &collection.questions {
                assert!(ids.insert(question.id.clone()), "duplicate id {}", question.id);
                if question.question_name.as_deref() == Some(crate::intake::names::AGE) {
                    age_questions += 1;
                }
            }
        }

        // Every line asks for age under its own question id.
        assert_eq!(age_questions, catalog.collections.len());
    }
}
