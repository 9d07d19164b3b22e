mod questions;

use std::collections::HashMap;

use serde::Serialize;

use super::domain::{Dimension, Question, ScoreRule};
use super::recommendations::RuleTable;

/// Ordered, immutable battery of questions.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    index: HashMap<&'static str, usize>,
    duplicates: Vec<&'static str>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self::new(questions::standard_questions())
    }

    pub fn new(definitions: Vec<Question>) -> Self {
        let mut questions = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        let mut duplicates = Vec::new();
        for question in definitions {
            // first definition wins; later ones only surface through `validate`
            if index.contains_key(question.id) {
                duplicates.push(question.id);
                continue;
            }
            index.insert(question.id, questions.len());
            questions.push(question);
        }
        Self {
            questions,
            index,
            duplicates,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|position| &self.questions[*position])
    }

    pub fn questions_for_dimension(&self, dimension: Dimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    /// `{dimension_ordinal}.{position_within_dimension}`, both 1-based.
    pub fn display_number(&self, id: &str) -> Option<String> {
        let question = self.question(id)?;
        let position = self
            .questions
            .iter()
            .filter(|candidate| candidate.dimension == question.dimension)
            .position(|candidate| candidate.id == id)?;
        Some(format!("{}.{}", question.dimension.ordinal(), position + 1))
    }

    /// Largest raw total a respondent can reach.
    pub fn max_score(&self) -> f64 {
        self.questions
            .iter()
            .filter(|question| question.contributes)
            .map(max_contribution)
            .sum()
    }

    /// Static-data checks that should hold for any shipped catalog.
    pub fn validate(&self, rules: &RuleTable) -> Vec<CatalogDefect> {
        let mut defects: Vec<CatalogDefect> = self
            .duplicates
            .iter()
            .copied()
            .map(CatalogDefect::DuplicateQuestion)
            .collect();

        for question in &self.questions {

            if question.contributes {
                match question.scoring {
                    ScoreRule::Unscored => {
                        defects.push(CatalogDefect::MissingScoring(question.id));
                    }
                    ScoreRule::PerOption
                        if question.options.iter().all(|option| option.score.is_none()) =>
                    {
                        defects.push(CatalogDefect::MissingOptionScores(question.id));
                    }
                    _ => {}
                }
            }

            if !question.options.is_empty() && !question.kind.has_options() {
                defects.push(CatalogDefect::UnexpectedOptions(question.id));
            }
        }

        for rule in rules.rules() {
            if self.question(rule.question_id).is_none() {
                defects.push(CatalogDefect::UnknownRuleQuestion(rule.question_id));
            }
        }

        defects
    }

    /// Catalog grouped by dimension with display numbers, for presentation layers.
    pub fn outline(&self) -> Vec<DimensionOutline> {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| {
                let questions = self
                    .questions_for_dimension(dimension)
                    .into_iter()
                    .enumerate()
                    .map(|(position, question)| NumberedQuestion {
                        number: format!("{}.{}", dimension.ordinal(), position + 1),
                        question: question.clone(),
                    })
                    .collect();
                DimensionOutline {
                    dimension,
                    label: dimension.label(),
                    questions,
                }
            })
            .collect()
    }
}

fn max_contribution(question: &Question) -> f64 {
    match question.scoring {
        ScoreRule::Unscored => 0.0,
        ScoreRule::WhenYes(weight) | ScoreRule::WhenNo(weight) | ScoreRule::EitherWay(weight) => {
            weight
        }
        ScoreRule::PerOption => {
            let scores = question.options.iter().filter_map(|option| option.score);
            if question.kind == super::domain::InputKind::MultiSelect {
                scores.filter(|score| *score > 0.0).sum()
            } else {
                scores.fold(0.0, f64::max)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDefect {
    DuplicateQuestion(&'static str),
    MissingScoring(&'static str),
    MissingOptionScores(&'static str),
    UnexpectedOptions(&'static str),
    UnknownRuleQuestion(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionOutline {
    pub dimension: Dimension,
    pub label: &'static str,
    pub questions: Vec<NumberedQuestion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberedQuestion {
    pub number: String,
    #[serde(flatten)]
    pub question: Question,
}
