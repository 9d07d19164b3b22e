//! Static recommendation rules and the matcher that turns answers into a
//! deduplicated, stage-grouped recommendation list.

mod condition;
mod table;

pub use condition::Condition;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::answers::AnswerSheet;
use super::catalog::QuestionCatalog;
use super::domain::Stage;

/// External reading attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub label: &'static str,
    pub url: &'static str,
}

/// One possible recommendation for a question, fired when its condition holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub text: &'static str,
    pub condition: Condition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRule {
    pub question_id: &'static str,
    pub candidates: Vec<Candidate>,
}

/// Rule lookup keyed by question identifier.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<RecommendationRule>,
    index: HashMap<&'static str, usize>,
}

impl RuleTable {
    pub fn standard() -> Self {
        Self::new(table::standard_rules())
    }

    pub fn new(rules: Vec<RecommendationRule>) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            if index.insert(rule.question_id, position).is_some() {
                warn!(
                    question_id = rule.question_id,
                    "duplicate recommendation rule; the later definition wins"
                );
            }
        }
        Self { rules, index }
    }

    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    pub fn rule_for(&self, question_id: &str) -> Option<&RecommendationRule> {
        self.index.get(question_id).map(|position| &self.rules[*position])
    }
}

/// Question and answer that caused a recommendation to fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggeringQuestion {
    pub question_id: &'static str,
    pub number: String,
    pub text: &'static str,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedRecommendation {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    pub stage: Stage,
    pub triggers: Vec<TriggeringQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageRecommendations {
    pub stage: Stage,
    pub stage_label: &'static str,
    pub recommendations: Vec<MatchedRecommendation>,
}

type DedupKey = (Stage, &'static str, Option<&'static str>);

pub struct RecommendationMatcher {
    catalog: Arc<QuestionCatalog>,
    rules: Arc<RuleTable>,
}

impl RecommendationMatcher {
    pub fn new(catalog: Arc<QuestionCatalog>, rules: Arc<RuleTable>) -> Self {
        Self { catalog, rules }
    }

    /// Evaluates every answered question against its rule, merging identical
    /// recommendations within a stage and grouping the result by stage.
    /// Stages with no recommendation are omitted.
    pub fn matches(&self, answers: &AnswerSheet) -> Vec<StageRecommendations> {
        let mut merged: Vec<MatchedRecommendation> = Vec::new();
        let mut positions: HashMap<DedupKey, usize> = HashMap::new();

        for question in self.catalog.questions() {
            let answer = answers.get(question.id);
            if !answer.is_answered() {
                continue;
            }

            let Some(rule) = self.rules.rule_for(question.id) else {
                continue;
            };

            let fired: Vec<&Candidate> = rule
                .candidates
                .iter()
                .filter(|candidate| candidate.condition.matches(answer))
                .collect();
            if fired.is_empty() {
                continue;
            }

            let trigger = TriggeringQuestion {
                question_id: question.id,
                number: self
                    .catalog
                    .display_number(question.id)
                    .unwrap_or_default(),
                text: question.text,
                answer: answer.display(),
            };

            for candidate in fired {
                let key = (
                    question.stage,
                    candidate.text,
                    candidate.resource.map(|resource| resource.url),
                );
                match positions.get(&key) {
                    Some(position) => {
                        let entry = &mut merged[*position];
                        if !entry
                            .triggers
                            .iter()
                            .any(|existing| existing.question_id == question.id)
                        {
                            entry.triggers.push(trigger.clone());
                        }
                    }
                    None => {
                        positions.insert(key, merged.len());
                        merged.push(MatchedRecommendation {
                            text: candidate.text,
                            resource: candidate.resource,
                            stage: question.stage,
                            triggers: vec![trigger.clone()],
                        });
                    }
                }
            }
        }

        debug!(matched = merged.len(), "recommendations matched");

        Stage::ordered()
            .into_iter()
            .filter_map(|stage| {
                let recommendations: Vec<MatchedRecommendation> = merged
                    .iter()
                    .filter(|recommendation| recommendation.stage == stage)
                    .cloned()
                    .collect();
                if recommendations.is_empty() {
                    None
                } else {
                    Some(StageRecommendations {
                        stage,
                        stage_label: stage.label(),
                        recommendations,
                    })
                }
            })
            .collect()
    }
}
