use serde::Serialize;

use super::super::domain::Answer;

/// Predicate a recommendation candidate applies to the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "when", content = "values")]
pub enum Condition {
    IsTrue,
    IsFalse,
    IsNotApplicable,
    Equals(&'static str),
    OneOf(&'static [&'static str]),
}

impl Condition {
    /// Multi-select answers match when any selected value satisfies the condition.
    pub fn matches(&self, answer: &Answer) -> bool {
        match answer {
            Answer::Unanswered => false,
            Answer::Bool(value) => match self {
                Condition::IsTrue => *value,
                Condition::IsFalse => !*value,
                _ => false,
            },
            Answer::NotApplicable => matches!(self, Condition::IsNotApplicable),
            Answer::Text(value) => self.matches_value(value),
            Answer::MultiText(values) => values.iter().any(|value| self.matches_value(value)),
        }
    }

    fn matches_value(&self, value: &str) -> bool {
        match self {
            Condition::Equals(expected) => value == *expected,
            Condition::OneOf(expected) => expected.iter().any(|candidate| *candidate == value),
            Condition::IsTrue | Condition::IsFalse | Condition::IsNotApplicable => false,
        }
    }
}
