use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "riwayat_pingsan",
        default: false,
        positive: "Ada riwayat pingsan setelah kejadian.",
        negative: "Tidak ada riwayat pingsan setelah kejadian.",
    },
    Clause {
        key: "riwayat_muntah",
        default: false,
        positive: "Ada riwayat mual dan muntah setelah kejadian.",
        negative: "Tidak ada riwayat mual dan muntah setelah kejadian.",
    },
    Clause {
        key: "perdarahan_hidung_telinga",
        default: false,
        positive: "Ada riwayat perdarahan dari hidung atau telinga.",
        negative: "Tidak ada riwayat perdarahan dari hidung dan telinga.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::new("eo_oedem", "oedem"),
    Qualifier::new("eo_vulnus", "vulnus"),
    Qualifier::new("eo_hematoma", "hematoma"),
    Qualifier::new("eo_step", "step deformity"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_maloklusi", "maloklusi"),
    Qualifier::new("io_laserasi", "laserasi gingiva"),
    Qualifier::new("io_mobilitas", "mobilitas segmen"),
];

/// Maxillofacial fracture or trauma.
pub(crate) struct Fracture;

impl CaseBuilder for Fracture {
    fn category(&self) -> CaseCategory {
        CaseCategory::Fracture
    }

    /// Durations are counted before hospital admission (SMRS).
    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let complaint = answers.text_or("keluhan_fraktur", "nyeri pada rahang setelah trauma");
        with_duration(
            &format!("Pasien datang dengan keluhan {complaint}"),
            answers,
            " SMRS",
        )
    }

    fn associated_symptoms(&self, answers: &AnswerSet) -> Vec<String> {
        let mechanism = answers.text_or("mekanisme", "(isi kronologis)");
        let mut sentences = vec![format!(
            "Kronologis kejadian: {}.",
            mechanism.trim_end_matches('.')
        )];
        sentences.extend(render_clauses(SYMPTOMS, answers));
        sentences
    }

    fn extraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let face = answers.text_or("eo_wajah", "Wajah asimetris");
        vec![ExamLine::from_answers(answers, face, EXTRAORAL, "eo_keterangan")]
    }

    fn intraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let occlusion = answers.text_or("io_oklusi", "Oklusi");
        vec![ExamLine::from_answers(
            answers,
            occlusion,
            INTRAORAL,
            "io_keterangan",
        )]
    }
}
