//! Checklist-to-sentence builders.
//!
//! Each case category turns its initial-visit answers into a Subjective narrative and a set of
//! extraoral/intraoral examination lines. Sentence order is fixed for every case:
//! chief complaint, associated symptoms, radiation, allergy history, systemic history and
//! current infectious-symptom status. Every yes/no clause has one positive and one negative
//! phrasing, so a negative answer still produces an explicit sentence.
//!
//! Post-operative stages use [`post_op`] instead.

mod abscess;
mod cyst;
pub mod examination;
mod fistula;
mod fracture;
mod generic;
pub mod history;
mod impaction;
pub mod post_op;
mod tmd;
mod tumor;

use crate::answers::AnswerSet;
use crate::constants::BULLET;
use examination::ExamLine;
use std::fmt;

/// Case categories with a dedicated builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseCategory {
    Impaction,
    AbscessOrCellulitis,
    Tmd,
    Fracture,
    Tumor,
    Cyst,
    Fistula,
    /// Fallback for any case name without a dedicated builder.
    Generic,
}

impl CaseCategory {
    /// Category for a schema case name; unknown names map to [`CaseCategory::Generic`].
    pub fn from_case_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "impaksi" => CaseCategory::Impaction,
            "abses" | "selulitis" => CaseCategory::AbscessOrCellulitis,
            "tmd" => CaseCategory::Tmd,
            "fraktur" => CaseCategory::Fracture,
            "tumor" => CaseCategory::Tumor,
            "kista" => CaseCategory::Cyst,
            "fistula" => CaseCategory::Fistula,
            _ => CaseCategory::Generic,
        }
    }

    pub fn builder(self) -> &'static dyn CaseBuilder {
        match self {
            CaseCategory::Impaction => &impaction::Impaction,
            CaseCategory::AbscessOrCellulitis => &abscess::Abscess,
            CaseCategory::Tmd => &tmd::Tmd,
            CaseCategory::Fracture => &fracture::Fracture,
            CaseCategory::Tumor => &tumor::Tumor,
            CaseCategory::Cyst => &cyst::Cyst,
            CaseCategory::Fistula => &fistula::Fistula,
            CaseCategory::Generic => &generic::Generic,
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseCategory::Impaction => "Impaksi",
            CaseCategory::AbscessOrCellulitis => "Abses",
            CaseCategory::Tmd => "TMD",
            CaseCategory::Fracture => "Fraktur",
            CaseCategory::Tumor => "Tumor",
            CaseCategory::Cyst => "Kista",
            CaseCategory::Fistula => "Fistula",
            CaseCategory::Generic => "Generic",
        };
        f.write_str(name)
    }
}

/// Builder for the case name as written in the schema.
pub fn builder_for(case_name: &str) -> &'static dyn CaseBuilder {
    CaseCategory::from_case_name(case_name).builder()
}

/// Extraoral and intraoral examination lines, bullet-prefixed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Examination {
    pub extraoral: Vec<String>,
    pub intraoral: Vec<String>,
}

/// Initial-visit narrative builder for one case category.
pub trait CaseBuilder: Send + Sync {
    fn category(&self) -> CaseCategory;

    /// Opening sentence naming the complaint and its duration.
    fn chief_complaint(&self, answers: &AnswerSet) -> String;

    fn associated_symptoms(&self, _answers: &AnswerSet) -> Vec<String> {
        Vec::new()
    }

    /// Radiation or spread of the complaint. `None` when the case does not ask about it.
    fn radiation(&self, answers: &AnswerSet) -> Option<String> {
        Some(pain_radiation(answers))
    }

    fn extraoral_lines(&self, _answers: &AnswerSet) -> Vec<ExamLine> {
        Vec::new()
    }

    fn intraoral_lines(&self, _answers: &AnswerSet) -> Vec<ExamLine> {
        Vec::new()
    }

    /// Full Subjective narrative in the fixed sentence order.
    fn subjective(&self, answers: &AnswerSet) -> String {
        let mut sentences = vec![self.chief_complaint(answers)];
        sentences.extend(self.associated_symptoms(answers));
        sentences.extend(self.radiation(answers));
        sentences.extend(history::history_sentences(answers));
        sentences.join(" ")
    }

    /// Case examination lines followed by the free-text `eo_text` / `io_text` answers.
    fn examination(&self, answers: &AnswerSet) -> Examination {
        let mut extraoral: Vec<String> = self
            .extraoral_lines(answers)
            .iter()
            .map(ExamLine::render)
            .collect();
        let mut intraoral: Vec<String> = self
            .intraoral_lines(answers)
            .iter()
            .map(ExamLine::render)
            .collect();
        extraoral.extend(free_text_lines(&answers.text("eo_text", "")));
        intraoral.extend(free_text_lines(&answers.text("io_text", "")));
        Examination {
            extraoral,
            intraoral,
        }
    }
}

/// A yes/no answer with its two fixed phrasings.
pub(crate) struct Clause {
    pub key: &'static str,
    pub default: bool,
    pub positive: &'static str,
    pub negative: &'static str,
}

impl Clause {
    pub(crate) fn render(&self, answers: &AnswerSet) -> String {
        if answers.flag(self.key, self.default) {
            self.positive.to_string()
        } else {
            self.negative.to_string()
        }
    }
}

pub(crate) fn render_clauses(clauses: &[Clause], answers: &AnswerSet) -> Vec<String> {
    clauses.iter().map(|c| c.render(answers)).collect()
}

/// `"{base} sejak ± {duration}{suffix}."`, or just `"{base}."` without a duration.
pub(crate) fn with_duration(base: &str, answers: &AnswerSet, suffix: &str) -> String {
    let duration = answers.text("durasi", "");
    if duration.is_empty() {
        format!("{base}.")
    } else {
        format!("{base} sejak ± {duration}{suffix}.")
    }
}

/// Pain radiation sentence driven by `menjalar` / `menjalar_ke`.
pub(crate) fn pain_radiation(answers: &AnswerSet) -> String {
    if answers.flag("menjalar", false) {
        format!(
            "Nyeri menjalar hingga ke {}.",
            answers.text_or("menjalar_ke", "kepala")
        )
    } else {
        "Nyeri tidak menjalar.".to_string()
    }
}

/// One bullet line per non-blank line of a free-text answer.
fn free_text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET}{line}"))
        .collect()
}
