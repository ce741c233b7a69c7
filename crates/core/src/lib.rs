//! # SuperSOAP Core
//!
//! Core logic for drafting SOAP progress notes for oral and maxillofacial surgery cases.
//!
//! This crate contains pure note operations:
//! - Pattern extraction from pasted clinical notes and surgical memos
//! - The structured record and its ordered merge pipeline
//! - Checklist-to-sentence builders per case category and post-operative stage
//! - Note assembly with computed pre-operative plan items
//!
//! **No UI concerns**: prompting for answers, pasting and saving files belong to the caller,
//! which plugs in through [`form::AnswerSource`].

pub mod answers;
pub mod builders;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod form;
pub mod note;
pub mod record;
pub mod session;
pub mod stage;
pub mod text;

pub use answers::{AnswerSet, AnswerValue};
pub use config::CoreConfig;
pub use error::{NoteError, NoteResult};
pub use note::{Note, NoteRequest};
pub use record::StructuredRecord;
pub use session::SessionContext;
pub use stage::Stage;

use form::{AnswerSource, FormContext};
use soap_schema::{Question, QuestionSchema, StageRule};
use std::sync::Arc;

/// Note operations over one loaded question schema.
///
/// The service holds no session state; every call takes the [`SessionContext`] it works on.
#[derive(Clone, Debug)]
pub struct SoapService {
    schema: Arc<QuestionSchema>,
    cfg: Arc<CoreConfig>,
}

impl SoapService {
    pub fn new(schema: Arc<QuestionSchema>, cfg: Arc<CoreConfig>) -> Self {
        Self { schema, cfg }
    }

    /// Loads the schema named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Schema` if the schema file cannot be read, parsed or validated.
    /// There is no fallback schema.
    pub fn from_config(cfg: Arc<CoreConfig>) -> NoteResult<Self> {
        let schema = QuestionSchema::load(cfg.schema_path())?;
        tracing::debug!(
            path = %cfg.schema_path().display(),
            cases = schema.cases.len(),
            "question schema loaded"
        );
        Ok(Self::new(Arc::new(schema), cfg))
    }

    pub fn schema(&self) -> &QuestionSchema {
        &self.schema
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.schema.case_names()
    }

    fn ensure_case(&self, case: &str) -> NoteResult<()> {
        if self.schema.cases.contains_key(case) {
            Ok(())
        } else {
            Err(NoteError::UnknownCase(case.to_string()))
        }
    }

    /// Ordered questions for a case at a stage.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::UnknownCase` for a case the schema does not define, or
    /// `NoteError::MissingStage` when the case has no questions for `stage`.
    pub fn questions(&self, case: &str, stage: Stage) -> NoteResult<&[Question]> {
        self.ensure_case(case)?;
        self.schema
            .questions(case, stage.as_str())
            .ok_or_else(|| NoteError::MissingStage {
                case: case.to_string(),
                stage: stage.to_string(),
            })
    }

    /// Walks the stage's questions and stores what `source` answers into the session.
    ///
    /// # Errors
    ///
    /// Fails for unknown cases or stages, as [`SoapService::questions`].
    pub fn fill_form(
        &self,
        case: &str,
        stage: Stage,
        session: &mut SessionContext,
        source: &mut dyn AnswerSource,
    ) -> NoteResult<()> {
        let questions = self.questions(case, stage)?;
        let today = self.cfg.today();
        form::seed_stage_defaults(stage, &mut session.answers, today);
        let ctx = FormContext {
            today,
            weight_kg: session.record.known_weight(),
        };
        form::fill_answers(questions, &mut session.answers, ctx, source);
        Ok(())
    }

    /// Assembles the note for a case and stage from the session.
    ///
    /// # Errors
    ///
    /// Fails for unknown cases or stages, as [`SoapService::questions`].
    pub fn compose(&self, case: &str, stage: Stage, session: &SessionContext) -> NoteResult<Note> {
        self.questions(case, stage)?;
        note::assemble(&NoteRequest {
            case,
            stage,
            record: &session.record,
            answers: &session.answers,
            today: self.cfg.today(),
        })
    }

    /// Operative-report template for a case; `None` when the schema has none.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::UnknownCase` for a case the schema does not define.
    pub fn operative_report(&self, case: &str) -> NoteResult<Option<&str>> {
        self.ensure_case(case)?;
        Ok(self.schema.operative_report(case))
    }

    pub fn stage_rule(&self, stage: Stage) -> StageRule {
        self.schema.stage_rule(stage.as_str())
    }

    /// Checks that `stage` accepts the pastes being offered.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::PasteNotAllowed` if a clinical note or memo is offered for a stage
    /// whose rule does not allow it.
    pub fn ensure_paste_allowed(&self, stage: Stage, note: bool, memo: bool) -> NoteResult<()> {
        let rule = self.stage_rule(stage);
        if (note && !rule.allow_paste) || (memo && !rule.allow_minlap) {
            return Err(NoteError::PasteNotAllowed(stage.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::AcceptCurrent;
    use chrono::NaiveDate;
    use std::io::Write;
    use std::path::PathBuf;

    const SCHEMA: &str = include_str!("../../../schema/supersoap_schema.yaml");

    fn service() -> SoapService {
        let schema = QuestionSchema::parse_yaml(SCHEMA).unwrap();
        SoapService::new(Arc::new(schema), Arc::new(CoreConfig::default()))
    }

    #[test]
    fn test_shipped_schema_cases() {
        let service = service();
        let cases: Vec<&str> = service.case_names().collect();
        for case in ["Impaksi", "Abses", "TMD", "Fraktur", "Tumor", "Kista", "Fistula"] {
            assert!(cases.contains(&case), "missing case {case}");
            for stage in Stage::ALL {
                assert!(service.questions(case, stage).is_ok(), "{case} {stage}");
            }
        }
    }

    #[test]
    fn test_unknown_case_is_an_error() {
        let service = service();
        assert!(matches!(
            service.questions("Ranula", Stage::Awal),
            Err(NoteError::UnknownCase(_))
        ));
        let session = SessionContext::new();
        assert!(matches!(
            service.compose("Ranula", Stage::Awal, &session),
            Err(NoteError::UnknownCase(_))
        ));
        assert!(service.operative_report("Ranula").is_err());
    }

    #[test]
    fn test_operative_report_templates() {
        let service = service();
        let report = service.operative_report("Impaksi").unwrap().unwrap();
        assert!(report.starts_with("Laporan Operasi Odontektomi"));
        assert_eq!(service.operative_report("Kista").unwrap(), None);
    }

    #[test]
    fn test_paste_rules() {
        let service = service();
        assert!(service.ensure_paste_allowed(Stage::PreOp, true, true).is_ok());
        assert!(service.ensure_paste_allowed(Stage::Awal, false, false).is_ok());
        assert!(matches!(
            service.ensure_paste_allowed(Stage::Pod0, true, false),
            Err(NoteError::PasteNotAllowed(_))
        ));
    }

    #[test]
    fn test_fill_form_with_defaults_then_compose_preop() {
        let service = service();
        let mut session = SessionContext::new();
        session.autofill(
            None,
            Some("Tn. Budi / L / 30 Tahun / BPJS\nBB: 55 kg\nP: Pro odontektomi 48\nPukul : 10.00 WITA"),
        );
        service
            .fill_form("Impaksi", Stage::PreOp, &mut session, &mut AcceptCurrent)
            .unwrap();
        let today = service.config().today();
        assert_eq!(session.answers.date("tanggal_laporan"), Some(today));
        assert_eq!(session.answers.int("ivfd_tpm", 0), 32);
        assert_eq!(session.answers.text("jam_operasi", ""), "10.00");
        assert_eq!(session.answers.text("ab_nama", ""), "Ceftriaxone");

        let note = service.compose("Impaksi", Stage::PreOp, &session).unwrap();
        let text = note.text();
        assert!(text.contains("IVFD RL 32 tpm (makrodrips)"));
        assert!(text.contains("mulai Pukul 04.00 WITA"));
        assert!(text.contains("Ceftriaxone 1 gr/IV, 1 jam sebelum operasi (skin test"));
        assert!(text.contains("Pro odontektomi 48 dalam general anestesi pada hari"));
        assert_eq!(note.file_name(), "soap_Impaksi_PreOp.txt");
    }

    #[test]
    fn test_fill_form_post_op_defaults() {
        let service = service();
        let mut session = SessionContext::new();
        service
            .fill_form("Abses", Stage::Pod0, &mut session, &mut AcceptCurrent)
            .unwrap();
        let note = service.compose("Abses", Stage::Pod0, &session).unwrap();
        assert!(note.text().contains(
            "S : Ada keluhan nyeri pada daerah operasi dengan skala VAS 3/10. Tidak ada keluhan \
             pusing, mual, dan muntah."
        ));
    }

    #[test]
    fn test_from_config_reads_schema_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SCHEMA.as_bytes()).unwrap();
        let cfg = CoreConfig::new(file.path().to_path_buf(), "Asia/Makassar".into(), 480).unwrap();
        let service = SoapService::from_config(Arc::new(cfg)).unwrap();
        assert!(service.case_names().any(|c| c == "Tumor"));
    }

    #[test]
    fn test_from_config_missing_schema_is_fatal() {
        let cfg = CoreConfig::new(
            PathBuf::from("/nonexistent/supersoap_schema.yaml"),
            "Asia/Makassar".into(),
            480,
        )
        .unwrap();
        assert!(matches!(
            SoapService::from_config(Arc::new(cfg)),
            Err(NoteError::Schema(_))
        ));
    }

    #[test]
    fn test_compose_uses_config_today_for_awal() {
        let service = service();
        let mut session = SessionContext::new();
        session
            .answers
            .set("tanggal_laporan", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let note = service.compose("Tumor", Stage::Awal, &session).unwrap();
        let today = text::format_date(service.config().today());
        assert!(note.text().contains(&format!("({today})")));
    }
}
