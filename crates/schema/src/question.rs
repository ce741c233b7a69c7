//! Question definitions.
//!
//! A question carries a key, a display label, a type tag with type-specific constraints and
//! default, and an optional visibility condition on another key.

use serde::{Deserialize, Serialize};

/// One question in a stage's ordered question list.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Question {
    /// Answer-set key the collected value is stored under.
    pub key: String,
    /// Display label shown by the UI collaborator.
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ShowIf>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Type tag plus type-specific constraints and default.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Bool {
        #[serde(default)]
        default: bool,
    },
    Text {
        #[serde(default)]
        default: String,
    },
    Int {
        #[serde(default)]
        min: i64,
        #[serde(default = "default_int_max")]
        max: i64,
        #[serde(default)]
        default: i64,
    },
    Select {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Date {
        #[serde(default)]
        default: DateDefault,
    },
}

fn default_int_max() -> i64 {
    10
}

impl QuestionKind {
    /// Short name of the type tag, as written in the schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool { .. } => "bool",
            Self::Text { .. } => "text",
            Self::Int { .. } => "int",
            Self::Select { .. } => "select",
            Self::Date { .. } => "date",
        }
    }
}

/// Relative default for date questions.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateDefault {
    #[default]
    Today,
    Tomorrow,
}

/// Visibility condition: show only when `key` currently matches `rule`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ShowIf {
    pub key: String,
    #[serde(flatten)]
    pub rule: ShowRule,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ShowRule {
    /// The answer must equal this value.
    Equals(ConditionValue),
    /// The answer must be a member of this set.
    In(Vec<ConditionValue>),
}

/// A literal a visibility condition compares an answer against.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ConditionValue {
    Bool(bool),
    Int(i64),
    Text(String),
}
