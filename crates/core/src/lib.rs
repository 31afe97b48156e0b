pub mod benefits;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod domain;
pub mod errors;
pub mod intake;
pub mod rating;
pub mod recommend;

pub use catalog::{CatalogError, ProductCatalog, QuestionCatalog};
pub use checkout::{CartDraft, CartLineItem, CartReceipt, CheckoutGateway};
pub use domain::answers::{AnswerValue, RawAnswers, UserAnswers};
pub use domain::line::InsuranceLine;
pub use domain::product::{Product, ProductCollection, ProductSelector};
pub use domain::question::{Question, QuestionCollection, QuestionType};
pub use domain::recommendation::{PlanBenefits, ProductRecommendation};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use recommend::RecommendationEngine;
