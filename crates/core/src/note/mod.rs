//! Note assembly.
//!
//! A note is the ordered concatenation of header, identity line, Subjective, Objective, an
//! optional supporting-examination block (pre-operative stage only), Assessment, Plan and
//! footer. Every section renders a placeholder rather than going missing, so the result is
//! always structurally complete.

mod plan;
mod sections;

pub use plan::{initial_visit_plan, post_op_plan, preop_plan, OperationDetails};

use crate::answers::AnswerSet;
use crate::builders::{builder_for, post_op};
use crate::constants::{PLACEHOLDER_DIAGNOSIS, PLACEHOLDER_OBJECTIVE, PLACEHOLDER_PREOP_SUBJECTIVE};
use crate::form::REPORT_DATE_KEY;
use crate::record::StructuredRecord;
use crate::stage::Stage;
use crate::NoteResult;
use chrono::NaiveDate;
use serde::Serialize;
use soap_types::NonEmptyText;

/// Finished note text with the file name it is offered under.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Note {
    text: NonEmptyText,
    file_name: String,
}

impl Note {
    /// # Errors
    ///
    /// Returns `NoteError::EmptyNote` if `text` is blank.
    pub fn new(text: impl AsRef<str>, case: &str, stage: Stage) -> NoteResult<Self> {
        let text = NonEmptyText::new(text)?;
        Ok(Self {
            text,
            file_name: file_name(case, stage),
        })
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// `soap_{case}_{stage}.txt`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn file_name(case: &str, stage: Stage) -> String {
    let case: String = case
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("soap_{case}_{stage}.txt")
}

/// Everything one note is built from.
#[derive(Clone, Copy, Debug)]
pub struct NoteRequest<'a> {
    pub case: &'a str,
    pub stage: Stage,
    pub record: &'a StructuredRecord,
    pub answers: &'a AnswerSet,
    /// Local calendar date the note is written on.
    pub today: NaiveDate,
}

impl NoteRequest<'_> {
    /// Pre-operative notes carry their own report date; other stages report today.
    fn report_date(&self) -> NaiveDate {
        if self.stage == Stage::PreOp {
            self.answers.date(REPORT_DATE_KEY).unwrap_or(self.today)
        } else {
            self.today
        }
    }
}

/// Builds the full note for one case and stage.
///
/// # Errors
///
/// Returns `NoteError::EmptyNote` only if the assembled text is blank, which the fixed
/// sections make impossible in practice.
pub fn assemble(request: &NoteRequest<'_>) -> NoteResult<Note> {
    let NoteRequest {
        case,
        stage,
        record,
        answers,
        ..
    } = *request;
    let report_date = request.report_date();
    let facility = record.facility();
    tracing::debug!(case, %stage, %report_date, "assembling note");

    let header = sections::header(stage, facility.as_str(), report_date);
    let identity = sections::identity_line(record, stage);
    let subjective = subjective(request);
    let objective = objective(request);

    let supporting_exam = match (stage, record.supporting_exam.trim()) {
        (Stage::PreOp, exam) if !exam.is_empty() => format!("{}\n\n", record.supporting_exam),
        _ => String::new(),
    };

    let assessment = assessment(stage, record, answers);

    let plan_lines = match stage {
        Stage::PreOp => {
            let operation = OperationDetails::resolve(answers, record, report_date);
            preop_plan(answers, record.known_weight(), &operation, facility.as_str())
        }
        Stage::Awal => initial_visit_plan(),
        Stage::Pod0 | Stage::Pod1 => post_op_plan(),
    };
    let plan = plan::render_plan(&plan_lines);
    let footer = sections::footer(record);

    let text = format!(
        "{header}\n\n{identity}\n\nS : {subjective}\n\n{objective}{supporting_exam}A:\n\
         {assessment}\n\n{plan}{footer}"
    );
    Note::new(text, case, stage)
}

fn subjective(request: &NoteRequest<'_>) -> String {
    match request.stage {
        Stage::Awal => builder_for(request.case).subjective(request.answers),
        Stage::PreOp => match request.record.subjective.trim() {
            "" => PLACEHOLDER_PREOP_SUBJECTIVE.to_string(),
            extracted => extracted.to_string(),
        },
        Stage::Pod0 | Stage::Pod1 => post_op::subjective(request.stage, request.answers),
    }
}

fn objective(request: &NoteRequest<'_>) -> String {
    let NoteRequest {
        case,
        stage,
        record,
        answers,
        ..
    } = *request;
    match stage {
        Stage::Awal => {
            let exam = builder_for(case).examination(answers);
            sections::examination_block(
                &sections::vital_signs(answers, record),
                &exam.extraoral,
                &exam.intraoral,
            )
        }
        Stage::Pod0 | Stage::Pod1 => {
            let (extraoral, intraoral) = post_op::examination(answers);
            sections::examination_block(
                &sections::vital_signs(answers, record),
                &[extraoral],
                &[intraoral],
            )
        }
        Stage::PreOp => match record.objective.trim() {
            "" => format!("O:\n{PLACEHOLDER_OBJECTIVE}\n\n"),
            extracted => format!("O:\n{extracted}\n\n"),
        },
    }
}

fn assessment(stage: Stage, record: &StructuredRecord, answers: &AnswerSet) -> String {
    let extracted = record.assessment.trim();
    if stage == Stage::PreOp && !extracted.is_empty() {
        return extracted.to_string();
    }
    answers.text_or("diagnosis", PLACEHOLDER_DIAGNOSIS)
}
