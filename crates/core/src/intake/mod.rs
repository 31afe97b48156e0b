//! Answer extraction: resolves the free-form question-id keyed answer map
//! into the typed [`UserAnswers`] record the rating engine consumes.
//!
//! Question ids differ per collection, so logical facts ("age", "coverage
//! type") are resolved through the question catalog by `question_name`.
//! A logical name may map to several ids (one per collection variant);
//! the first answered id in catalog scan order wins.

use crate::catalog::QuestionCatalog;
use crate::domain::answers::{AnswerValue, RawAnswers, UserAnswers};

/// Logical question names the extractor resolves. Catalogs use these in
/// their `question_name` fields.
pub mod names {
    pub const AGE: &str = "age";
    pub const COVERAGE_TYPE: &str = "coverage_type";
    pub const PLAN_CHOICE: &str = "plan_choice";
    pub const TOBACCO_USE: &str = "tobacco_use";
    pub const COVERAGE_AMOUNT: &str = "coverage_amount";
    pub const ANNUAL_SALARY: &str = "annual_salary";
    pub const DAILY_BENEFIT: &str = "daily_benefit";
    pub const BENEFIT_PERIOD: &str = "benefit_period";
}

/// First question id carrying the logical name, in catalog scan order.
pub fn find_question_id_by_name<'a>(
    catalog: &'a QuestionCatalog,
    question_name: &str,
) -> Option<&'a str> {
    catalog
        .collections
        .iter()
        .flat_map(|collection| collection.questions.iter())
        .find(|question| question.question_name.as_deref() == Some(question_name))
        .map(|question| question.id.as_str())
}

/// Every question id carrying the logical name, in catalog scan order.
pub fn find_all_question_ids_by_name<'a>(
    catalog: &'a QuestionCatalog,
    question_name: &str,
) -> Vec<&'a str> {
    catalog
        .collections
        .iter()
        .flat_map(|collection| collection.questions.iter())
        .filter(|question| question.question_name.as_deref() == Some(question_name))
        .map(|question| question.id.as_str())
        .collect()
}

/// First present answer among the candidate ids; no tie-break beyond
/// first-found.
pub fn answer_from_ids<'a>(answers: &'a RawAnswers, ids: &[&str]) -> Option<&'a AnswerValue> {
    ids.iter().find_map(|id| answers.get(*id))
}

/// First candidate id whose answer parses as a number. Non-numeric answers
/// on earlier ids are skipped, not treated as absent.
pub fn numeric_answer_from_ids(answers: &RawAnswers, ids: &[&str]) -> Option<i64> {
    ids.iter()
        .filter_map(|id| answers.get(*id))
        .filter_map(|answer| answer.as_text())
        .find_map(parse_dollar_number)
}

/// Parses a dollar-ish free-text amount: trims, strips a leading `$` and
/// thousands separators, then reads the leading (optionally signed)
/// integer digit run. `"$45,000"` → 45000, `"45 years"` → 45.
pub fn parse_dollar_number(raw: &str) -> Option<i64> {
    let cleaned: String =
        raw.trim().trim_start_matches('$').chars().filter(|ch| *ch != ',').collect();

    let mut digits_end = 0;
    for (index, ch) in cleaned.char_indices() {
        if ch == '-' && index == 0 {
            digits_end = 1;
            continue;
        }
        if ch.is_ascii_digit() {
            digits_end = index + 1;
        } else {
            break;
        }
    }

    cleaned[..digits_end].parse().ok()
}

/// Builds the typed answer record for one recommendation request. Pure
/// function of the answer map and the question catalog; unmapped raw
/// answers pass through untouched in `raw`.
pub fn extract_user_answers(answers: &RawAnswers, catalog: &QuestionCatalog) -> UserAnswers {
    let age_ids = find_all_question_ids_by_name(catalog, names::AGE);
    let age = numeric_answer_from_ids(answers, &age_ids);

    let coverage_ids = find_all_question_ids_by_name(catalog, names::COVERAGE_TYPE);
    let coverage_type = text_answer(answers, &coverage_ids);

    let plan_ids = find_all_question_ids_by_name(catalog, names::PLAN_CHOICE);
    let plan_choice = text_answer(answers, &plan_ids);

    // Tobacco use only counts when the answer is exactly "Yes"; anything
    // else, including absence, rates as non-tobacco.
    let tobacco_ids = find_all_question_ids_by_name(catalog, names::TOBACCO_USE);
    let tobacco_use = answer_from_ids(answers, &tobacco_ids)
        .and_then(AnswerValue::as_text)
        .map(|answer| answer == "Yes")
        .unwrap_or(false);

    let amount_ids = find_all_question_ids_by_name(catalog, names::COVERAGE_AMOUNT);
    let coverage_amount = text_answer(answers, &amount_ids);

    let salary_ids = find_all_question_ids_by_name(catalog, names::ANNUAL_SALARY);
    let annual_salary = numeric_answer_from_ids(answers, &salary_ids);

    let daily_ids = find_all_question_ids_by_name(catalog, names::DAILY_BENEFIT);
    let daily_benefit = text_answer(answers, &daily_ids);

    let period_ids = find_all_question_ids_by_name(catalog, names::BENEFIT_PERIOD);
    let benefit_period = text_answer(answers, &period_ids);

    UserAnswers {
        age,
        coverage_type,
        plan_choice,
        tobacco_use,
        coverage_amount,
        benefit_period,
        daily_benefit,
        annual_salary,
        raw: answers.clone(),
    }
}

fn text_answer(answers: &RawAnswers, ids: &[&str]) -> Option<String> {
    answer_from_ids(answers, ids).and_then(AnswerValue::as_text).map(str::to_owned)
}
