use serde::{Deserialize, Serialize};

/// Thematic risk category a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    General,
    Proportionality,
    Regulatory,
    SocialLicense,
    Governance,
    DataProtection,
    Cybersecurity,
    Equity,
    Transparency,
    Accountability,
}

impl Dimension {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::General,
            Self::Proportionality,
            Self::Regulatory,
            Self::SocialLicense,
            Self::Governance,
            Self::DataProtection,
            Self::Cybersecurity,
            Self::Equity,
            Self::Transparency,
            Self::Accountability,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Proportionality => "Proporcionalidad",
            Self::Regulatory => "Normativa",
            Self::SocialLicense => "Licencia Social",
            Self::Governance => "Gobernanza",
            Self::DataProtection => "Protección de datos",
            Self::Cybersecurity => "Ciberseguridad",
            Self::Equity => "Equidad",
            Self::Transparency => "Transparencia",
            Self::Accountability => "Rendición de cuentas",
        }
    }

    /// 1-based position used in question numbering.
    pub const fn ordinal(self) -> usize {
        self as usize + 1
    }
}

/// Project lifecycle phase used to group recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ConceptualizationAndDesign,
    UseAndMonitoring,
    DataCollectionAndProcessing,
}

impl Stage {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ConceptualizationAndDesign,
            Self::UseAndMonitoring,
            Self::DataCollectionAndProcessing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ConceptualizationAndDesign => "Conceptualización y diseño",
            Self::UseAndMonitoring => "Uso y monitoreo",
            Self::DataCollectionAndProcessing => "Recolección y procesamiento de datos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    LongText,
    Select,
    MultiSelect,
    YesNo,
    YesNoNotApplicable,
}

impl InputKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long text",
            Self::Select => "single select",
            Self::MultiSelect => "multi select",
            Self::YesNo => "yes/no",
            Self::YesNoNotApplicable => "yes/no/not applicable",
        }
    }

    pub const fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

/// A respondent's answer to a single question.
///
/// Serialized as plain JSON values so persisted slots stay readable:
/// text as a string, multi-select as an array, yes/no as a boolean and the
/// not-applicable choice as `null`. `Unanswered` is never written; it is
/// what lookups return for a question the respondent has not touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Text(String),
    MultiText(Vec<String>),
    NotApplicable,
    #[serde(skip)]
    Unanswered,
}

impl Answer {
    pub fn is_answered(&self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Human readable rendering used in reports.
    pub fn display(&self) -> String {
        match self {
            Answer::Bool(true) => "Sí".to_string(),
            Answer::Bool(false) => "No".to_string(),
            Answer::NotApplicable => "No aplica".to_string(),
            Answer::MultiText(values) => values.join(", "),
            Answer::Text(value) => value.clone(),
            Answer::Unanswered => String::new(),
        }
    }
}

/// Selectable option for select and multi-select questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// How a question's answer maps onto a risk contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "weight")]
pub enum ScoreRule {
    Unscored,
    /// Weight applies when the answer is yes.
    WhenYes(f64),
    /// Weight applies when the answer is no.
    WhenNo(f64),
    /// Weight applies to any yes/no answer.
    EitherWay(f64),
    /// Weight comes from the selected options.
    PerOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: InputKind,
    pub dimension: Dimension,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    pub contributes: bool,
    pub scoring: ScoreRule,
}

impl Question {
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Impact band the final score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ImpactLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Bajo impacto",
            Self::Moderate => "Impacto moderado",
            Self::High => "Alto impacto",
            Self::VeryHigh => "Impacto muy alto",
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Low => "El proyecto presenta un bajo impacto en términos éticos y sociales. Continúa monitoreando para asegurar que se mantenga.",
            Self::Moderate => "El proyecto presenta un impacto moderado. Aún existen áreas que podrían fortalecerse. Revisa las recomendaciones.",
            Self::High => "El proyecto presenta un alto impacto. Hay varios aspectos críticos por considerar. Revisa las recomendaciones detalladamente.",
            Self::VeryHigh => "El proyecto presenta un impacto muy alto. Es importante abordar los factores críticos identificados para fortalecer tu proyecto.",
        }
    }
}
