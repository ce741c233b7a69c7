use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "nyeri",
        default: false,
        positive: "Benjolan terasa nyeri.",
        negative: "Benjolan tidak terasa nyeri.",
    },
    Clause {
        key: "cepat_membesar",
        default: false,
        positive: "Benjolan dirasakan cepat membesar.",
        negative: "Benjolan tidak dirasakan cepat membesar.",
    },
    Clause {
        key: "kebas",
        default: false,
        positive: "Ada keluhan rasa kebas di sekitar benjolan.",
        negative: "Tidak ada keluhan rasa kebas.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::default_on("eo_benjolan", "benjolan"),
    Qualifier::new("eo_nyeri_tekan", "nyeri tekan"),
    Qualifier::new("eo_parestesi", "parestesi"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_ulserasi", "ulserasi"),
    Qualifier::new("io_perdarahan", "mudah berdarah"),
    Qualifier::new("io_goyang", "gigi goyang"),
];

/// Jaw or oral tumour.
pub(crate) struct Tumor;

impl CaseBuilder for Tumor {
    fn category(&self) -> CaseCategory {
        CaseCategory::Tumor
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let location = answers.text_or("lokasi_benjolan", "rahang");
        with_duration(
            &format!("Pasien datang dengan keluhan benjolan pada {location}"),
            answers,
            "",
        )
    }

    fn associated_symptoms(&self, answers: &AnswerSet) -> Vec<String> {
        render_clauses(SYMPTOMS, answers)
    }

    fn extraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let face = answers.text_or("eo_wajah", "Wajah asimetris");
        vec![ExamLine::from_answers(answers, face, EXTRAORAL, "eo_keterangan")]
    }

    fn intraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let mass = answers.text_or("io_massa", "Massa");
        vec![ExamLine::from_answers(answers, mass, INTRAORAL, "io_keterangan")]
    }
}
