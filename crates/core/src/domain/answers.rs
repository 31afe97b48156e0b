use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw intake answer as captured by the form layer: either a single
/// string or a multi-choice list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// The single-string view used by every rating dimension. Multi-choice
    /// answers expose their first entry.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value.as_str()),
            AnswerValue::Multi(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_owned())
    }
}

/// Question-id keyed answers exactly as persisted by the surrounding form
/// flow. Ordered map so extraction and serialization stay deterministic.
pub type RawAnswers = BTreeMap<String, AnswerValue>;

/// The typed view of a raw answer map, resolved against the question
/// catalog. Built fresh per recommendation request, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserAnswers {
    pub age: Option<i64>,
    pub coverage_type: Option<String>,
    pub plan_choice: Option<String>,
    pub tobacco_use: bool,
    pub coverage_amount: Option<String>,
    pub benefit_period: Option<String>,
    pub daily_benefit: Option<String>,
    pub annual_salary: Option<i64>,
    /// The untouched raw map, so line-specific answers stay reachable by
    /// question id downstream.
    pub raw: RawAnswers,
}

#[cfg(test)]
mod tests {
    use super::AnswerValue;

    #[test]
    fn multi_choice_answers_expose_their_first_entry_as_text() {
        let answer = AnswerValue::Multi(vec!["Plan A".to_owned(), "Plan B".to_owned()]);
        assert_eq!(answer.as_text(), Some("Plan A"));

        let empty = AnswerValue::Multi(Vec::new());
        assert_eq!(empty.as_text(), None);
    }

    #[test]
    fn answers_deserialize_from_strings_and_lists() {
        let single: AnswerValue = serde_json::from_str("\"Just me\"").expect("string answer");
        assert_eq!(single, AnswerValue::Text("Just me".to_owned()));

        let multi: AnswerValue = serde_json::from_str("[\"a\",\"b\"]").expect("list answer");
        assert_eq!(multi, AnswerValue::Multi(vec!["a".to_owned(), "b".to_owned()]));
    }
}
