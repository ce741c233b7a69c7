//! Examination lines: one selection plus fixed (+)/(-) qualifiers.

use crate::answers::AnswerSet;
use crate::constants::BULLET;

/// A yes/no finding rendered as `label (+)` or `label (-)`.
pub(crate) struct Qualifier {
    pub key: &'static str,
    pub label: &'static str,
    pub default: bool,
}

impl Qualifier {
    pub(crate) const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            default: false,
        }
    }

    pub(crate) const fn default_on(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            default: true,
        }
    }
}

/// One examination line before rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamLine {
    pub selection: String,
    pub findings: Vec<(String, bool)>,
    /// Free text appended only when at least one finding is positive.
    pub elaboration: String,
}

impl ExamLine {
    /// Line for `selection` with each qualifier read from `answers` and the elaboration taken
    /// from `elaboration_key`.
    pub(crate) fn from_answers(
        answers: &AnswerSet,
        selection: String,
        qualifiers: &[Qualifier],
        elaboration_key: &str,
    ) -> Self {
        Self {
            selection,
            findings: qualifiers
                .iter()
                .map(|q| (q.label.to_string(), answers.flag(q.key, q.default)))
                .collect(),
            elaboration: answers.text(elaboration_key, ""),
        }
    }

    pub fn any_positive(&self) -> bool {
        self.findings.iter().any(|(_, present)| *present)
    }

    /// `• selection dengan a (+), b (-)[, elaboration]`.
    pub fn render(&self) -> String {
        let mut line = format!("{BULLET}{}", self.selection.trim());
        if !self.findings.is_empty() {
            let findings: Vec<String> = self
                .findings
                .iter()
                .map(|(label, present)| format!("{label} {}", if *present { "(+)" } else { "(-)" }))
                .collect();
            line.push_str(" dengan ");
            line.push_str(&findings.join(", "));
        }
        let elaboration = self.elaboration.trim();
        if self.any_positive() && !elaboration.is_empty() {
            line.push_str(", ");
            line.push_str(elaboration);
        }
        line
    }
}
