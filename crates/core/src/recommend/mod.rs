//! The recommendation engine: extracts typed answers, dispatches to the
//! line-specific selection logic, and assembles the rated recommendation.
//!
//! Every categorical input resolves through an explicit default rather
//! than an error; the single hard failure is a critical-illness request
//! with no coverage type at all.

mod accident;
mod cancer;
mod critical_illness;
mod hospital_indemnity;
mod short_term;

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{ProductCatalog, QuestionCatalog};
use crate::domain::answers::{RawAnswers, UserAnswers};
use crate::domain::line::InsuranceLine;
use crate::domain::product::{Product, ProductCollection, ProductSelector};
use crate::domain::recommendation::{PlanBenefits, ProductRecommendation};
use crate::errors::DomainError;
use crate::intake::extract_user_answers;

/// Rating age assumed when the intake never captured one.
pub(crate) const DEFAULT_AGE: i64 = 25;

pub struct RecommendationEngine {
    questions: QuestionCatalog,
    products: ProductCatalog,
}

impl RecommendationEngine {
    pub fn new(questions: QuestionCatalog, products: ProductCatalog) -> Self {
        Self { questions, products }
    }

    pub fn with_builtin_catalogs() -> Self {
        Self::new(QuestionCatalog::builtin(), ProductCatalog::builtin())
    }

    pub fn question_catalog(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn product_catalog(&self) -> &ProductCatalog {
        &self.products
    }

    /// Produces at most one recommendation for the named collection. An
    /// unknown collection or an empty catalog slice yields an empty vec;
    /// the caller treats that as "no recommendation available", not as an
    /// error.
    pub fn recommend(
        &self,
        answers: &RawAnswers,
        collection_name: &str,
    ) -> Result<Vec<ProductRecommendation>, DomainError> {
        let user_answers = extract_user_answers(answers, &self.questions);
        self.recommend_for_answers(&user_answers, collection_name)
    }

    /// Same as [`recommend`](Self::recommend) for callers that already
    /// hold extracted answers.
    pub fn recommend_for_answers(
        &self,
        answers: &UserAnswers,
        collection_name: &str,
    ) -> Result<Vec<ProductRecommendation>, DomainError> {
        let Some(collection) = self.products.collection(collection_name) else {
            debug!(collection_name, "collection not found in product catalog");
            return Ok(Vec::new());
        };
        let Some(line) = InsuranceLine::from_collection_name(collection_name) else {
            debug!(collection_name, "no rating line registered for collection");
            return Ok(Vec::new());
        };

        match line {
            InsuranceLine::Accident => Ok(accident::recommend(answers, collection)),
            InsuranceLine::Cancer => Ok(cancer::recommend(answers, collection)),
            InsuranceLine::HospitalIndemnity => {
                Ok(hospital_indemnity::recommend(answers, collection))
            }
            InsuranceLine::CriticalIllness => critical_illness::recommend(answers, collection),
            InsuranceLine::ShortTermDisability => Ok(short_term::recommend(answers, collection)),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_builtin_catalogs()
    }
}

/// First product whose selector matches the derived dimensions, in catalog
/// order. Products without a selector never match; they are only reachable
/// through the fallback path.
pub(crate) fn match_product<'a>(
    collection: &'a ProductCollection,
    derived: &ProductSelector,
) -> Option<&'a Product> {
    collection
        .products
        .iter()
        .find(|product| product.selector.as_ref().is_some_and(|selector| selector.matches(derived)))
}

/// The collection's first product, or a synthesized placeholder when the
/// slice is empty.
pub(crate) fn fallback_product(
    collection: &ProductCollection,
    placeholder_name: String,
    generic_benefits: &[&str],
) -> Product {
    collection.products.first().cloned().unwrap_or_else(|| Product {
        product_id: 0,
        name: placeholder_name,
        price: Decimal::ZERO,
        sku: String::new(),
        sku_id: 0,
        variant_id: 0,
        product_benefits: generic_benefits.iter().map(|benefit| (*benefit).to_owned()).collect(),
        selector: None,
    })
}

/// Assembles the single recommendation, overriding the catalog price with
/// the rated premium.
pub(crate) fn recommendation(
    mut product: Product,
    price: Decimal,
    reason: String,
    benefits: PlanBenefits,
) -> ProductRecommendation {
    product.price = price;
    ProductRecommendation { product, price, reason, benefits: Some(benefits) }
}
