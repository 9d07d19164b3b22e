use super::super::domain::{Answer, InputKind, Question, ScoreRule};

/// Outcome of scoring one question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Contribution {
    Points(f64),
    /// The question is flagged as scored but carries no usable scoring data.
    Defective,
}

pub(crate) fn contribution(question: &Question, answer: &Answer) -> Contribution {
    match question.scoring {
        ScoreRule::Unscored => Contribution::Defective,
        ScoreRule::WhenYes(weight) => Contribution::Points(match answer {
            Answer::Bool(true) => weight,
            _ => 0.0,
        }),
        ScoreRule::WhenNo(weight) => Contribution::Points(match answer {
            Answer::Bool(false) => weight,
            _ => 0.0,
        }),
        ScoreRule::EitherWay(weight) => Contribution::Points(match answer {
            Answer::Bool(_) => weight,
            _ => 0.0,
        }),
        ScoreRule::PerOption => option_points(question, answer),
    }
}

fn option_points(question: &Question, answer: &Answer) -> Contribution {
    if !question.kind.has_options() || question.options.iter().all(|option| option.score.is_none())
    {
        return Contribution::Defective;
    }

    let score_of = |value: &str| {
        question
            .option(value)
            .and_then(|option| option.score)
            .unwrap_or(0.0)
    };

    let points = match (question.kind, answer) {
        (InputKind::Select, Answer::Text(value)) => score_of(value),
        (InputKind::MultiSelect, Answer::MultiText(values)) => {
            values.iter().map(|value| score_of(value)).sum()
        }
        _ => 0.0,
    };
    Contribution::Points(points)
}
