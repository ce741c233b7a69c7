//! The schema document: cases, stages, stage rules and operative-report templates.
//!
//! Wire shape (YAML shown, JSON is equivalent):
//!
//! ```yaml
//! stages: [Awal, PreOp, POD0, POD1]
//! stage_rules:
//!   PreOp: { allow_paste: true, allow_minlap: true }
//! cases:
//!   Impaksi:
//!     stage:
//!       Awal:
//!         questions:
//!           - { key: laterality, label: Sisi, type: select, options: [kanan, kiri] }
//! laporan_operasi:
//!   Impaksi: "..."
//! ```
//!
//! Unknown top-level keys are ignored so YAML documents can keep anchor holders next to the
//! real content.

use crate::question::{Question, QuestionKind};
use crate::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// The full question schema, validated on load.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QuestionSchema {
    /// Stage names in display order.
    pub stages: Vec<String>,
    #[serde(default)]
    pub stage_rules: BTreeMap<String, StageRule>,
    pub cases: BTreeMap<String, CaseSchema>,
    /// Operative-report template text per case.
    #[serde(default, rename = "laporan_operasi")]
    pub operative_reports: BTreeMap<String, String>,
}

/// Per-case question lists keyed by stage name.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CaseSchema {
    pub stage: BTreeMap<String, StageQuestions>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StageQuestions {
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Which paste inputs a stage accepts.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StageRule {
    #[serde(default)]
    pub allow_paste: bool,
    #[serde(default)]
    pub allow_minlap: bool,
}

impl QuestionSchema {
    /// Parse and validate a schema from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path"
    /// (e.g. `cases.Impaksi.stage.Awal.questions[2]`) to the failing field.
    pub fn parse_yaml(text: &str) -> SchemaResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(text);
        let schema = match serde_path_to_error::deserialize::<_, QuestionSchema>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => return Err(mismatch(err.path().to_string(), err.into_inner())),
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Parse and validate a schema from JSON text.
    pub fn parse_json(text: &str) -> SchemaResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let schema = match serde_path_to_error::deserialize::<_, QuestionSchema>(&mut deserializer)
        {
            Ok(parsed) => parsed,
            Err(err) => return Err(mismatch(err.path().to_string(), err.into_inner())),
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Read a schema file. `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> SchemaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&text)
        } else {
            Self::parse_yaml(&text)
        }
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    /// Ordered questions for a case at a stage, or `None` when either is not defined.
    pub fn questions(&self, case: &str, stage: &str) -> Option<&[Question]> {
        self.cases
            .get(case)?
            .stage
            .get(stage)
            .map(|s| s.questions.as_slice())
    }

    /// Stage rule, defaulting to "no pastes allowed" for stages without an entry.
    pub fn stage_rule(&self, stage: &str) -> StageRule {
        self.stage_rules.get(stage).copied().unwrap_or_default()
    }

    pub fn operative_report(&self, case: &str) -> Option<&str> {
        self.operative_reports.get(case).map(String::as_str)
    }

    fn validate(&self) -> SchemaResult<()> {
        if self.stages.is_empty() {
            return Err(SchemaError::InvalidInput("stages cannot be empty".into()));
        }
        if self.cases.is_empty() {
            return Err(SchemaError::InvalidInput("cases cannot be empty".into()));
        }

        for stage in self.stage_rules.keys() {
            if !self.stages.contains(stage) {
                return Err(SchemaError::InvalidInput(format!(
                    "stage_rules refers to unknown stage '{stage}'"
                )));
            }
        }

        for (case, case_schema) in &self.cases {
            for (stage, stage_questions) in &case_schema.stage {
                if !self.stages.contains(stage) {
                    return Err(SchemaError::InvalidInput(format!(
                        "case '{case}' defines unknown stage '{stage}'"
                    )));
                }
                let mut seen = HashSet::new();
                for question in &stage_questions.questions {
                    let at = format!("{case}/{stage}/{}", question.key);
                    if question.key.trim().is_empty() {
                        return Err(SchemaError::InvalidInput(format!(
                            "{case}/{stage}: question key cannot be empty"
                        )));
                    }
                    if !seen.insert(question.key.as_str()) {
                        return Err(SchemaError::InvalidInput(format!("{at}: duplicate key")));
                    }
                    validate_kind(&at, &question.kind)?;
                }
            }
        }

        Ok(())
    }
}

fn validate_kind(at: &str, kind: &QuestionKind) -> SchemaResult<()> {
    match kind {
        QuestionKind::Int { min, max, default } => {
            if min > max {
                return Err(SchemaError::InvalidInput(format!(
                    "{at}: min {min} exceeds max {max}"
                )));
            }
            if default < min || default > max {
                return Err(SchemaError::InvalidInput(format!(
                    "{at}: default {default} outside [{min}, {max}]"
                )));
            }
        }
        QuestionKind::Select { options, default } => {
            if options.is_empty() {
                return Err(SchemaError::InvalidInput(format!(
                    "{at}: select needs at least one option"
                )));
            }
            if let Some(default) = default {
                if !options.contains(default) {
                    return Err(SchemaError::InvalidInput(format!(
                        "{at}: default '{default}' is not an option"
                    )));
                }
            }
        }
        QuestionKind::Bool { .. } | QuestionKind::Text { .. } | QuestionKind::Date { .. } => {}
    }
    Ok(())
}

fn mismatch(path: String, source: impl std::fmt::Display) -> SchemaError {
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    SchemaError::Mismatch(format!("schema mismatch at {path}: {source}"))
}
