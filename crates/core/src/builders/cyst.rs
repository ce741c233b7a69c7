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
        key: "keluar_cairan",
        default: false,
        positive: "Ada riwayat keluar cairan dari benjolan.",
        negative: "Tidak ada riwayat keluar cairan dari benjolan.",
    },
    Clause {
        key: "gigi_goyang",
        default: false,
        positive: "Ada keluhan gigi goyang di sekitar benjolan.",
        negative: "Tidak ada keluhan gigi goyang.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::new("eo_benjolan", "benjolan"),
    Qualifier::new("eo_nyeri_tekan", "nyeri tekan"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_fluktuasi", "fluktuasi"),
    Qualifier::new("io_krepitasi", "egg shell crackling"),
    Qualifier::new("io_goyang", "gigi goyang"),
];

/// Jaw cyst.
pub(crate) struct Cyst;

impl CaseBuilder for Cyst {
    fn category(&self) -> CaseCategory {
        CaseCategory::Cyst
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
        let face = answers.text_or("eo_wajah", "Wajah simetris");
        vec![ExamLine::from_answers(answers, face, EXTRAORAL, "eo_keterangan")]
    }

    fn intraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let mass = answers.text_or("io_massa", "Massa");
        vec![ExamLine::from_answers(answers, mass, INTRAORAL, "io_keterangan")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluid_discharge_and_crackling() {
        let mut answers = AnswerSet::new();
        answers.set("keluar_cairan", true);
        answers.set("io_krepitasi", true);
        answers.set("io_keterangan", "konsistensi kenyal");
        assert!(Cyst
            .subjective(&answers)
            .contains("Ada riwayat keluar cairan dari benjolan."));
        let exam = Cyst.examination(&answers);
        assert!(exam.intraoral[0].ends_with("egg shell crackling (+), gigi goyang (-), konsistensi kenyal"));
    }
}
