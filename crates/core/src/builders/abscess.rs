use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "nyeri",
        default: true,
        positive: "Pembengkakan disertai rasa nyeri.",
        negative: "Pembengkakan tidak disertai rasa nyeri.",
    },
    Clause {
        key: "sulit_menelan",
        default: false,
        positive: "Pasien mengeluhkan sulit menelan.",
        negative: "Tidak ada keluhan sulit menelan.",
    },
    Clause {
        key: "sulit_buka_mulut",
        default: false,
        positive: "Pasien mengeluhkan sulit membuka mulut.",
        negative: "Tidak ada keluhan sulit membuka mulut.",
    },
    Clause {
        key: "sesak",
        default: false,
        positive: "Pasien mengeluhkan sesak napas.",
        negative: "Tidak ada keluhan sesak napas.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::default_on("eo_oedem", "oedem"),
    Qualifier::new("eo_eritema", "eritema"),
    Qualifier::new("eo_nyeri_tekan", "nyeri tekan"),
    Qualifier::new("eo_fluktuasi", "fluktuasi"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_karies", "karies profunda"),
    Qualifier::new("io_goyang", "goyang"),
    Qualifier::new("io_pus", "pus"),
];

/// Odontogenic abscess or cellulitis.
pub(crate) struct Abscess;

impl CaseBuilder for Abscess {
    fn category(&self) -> CaseCategory {
        CaseCategory::AbscessOrCellulitis
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let location = answers.text_or("lokasi_bengkak", "pipi");
        with_duration(
            &format!("Pasien datang dengan keluhan pembengkakan pada {location}"),
            answers,
            "",
        )
    }

    fn associated_symptoms(&self, answers: &AnswerSet) -> Vec<String> {
        render_clauses(SYMPTOMS, answers)
    }

    /// Spread of the swelling rather than radiating pain.
    fn radiation(&self, answers: &AnswerSet) -> Option<String> {
        if !answers.flag("meluas", true) {
            return Some("Pembengkakan tidak meluas.".to_string());
        }
        let target = answers.text("meluas_ke", "");
        Some(if target.is_empty() {
            "Pembengkakan meluas.".to_string()
        } else {
            format!("Pembengkakan meluas ke {target}.")
        })
    }

    fn extraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let face = answers.text_or("eo_wajah", "Wajah asimetris");
        vec![ExamLine::from_answers(answers, face, EXTRAORAL, "eo_keterangan")]
    }

    fn intraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let tooth = answers.text_or("io_gigi", "penyebab");
        vec![ExamLine::from_answers(
            answers,
            format!("Gigi {tooth}"),
            INTRAORAL,
            "io_keterangan",
        )]
    }
}
