use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "keluar_nanah",
        default: true,
        positive: "Lubang tersebut kadang mengeluarkan nanah.",
        negative: "Tidak ada nanah yang keluar dari lubang tersebut.",
    },
    Clause {
        key: "nyeri",
        default: false,
        positive: "Keluhan disertai rasa nyeri.",
        negative: "Keluhan tidak disertai rasa nyeri.",
    },
    Clause {
        key: "riwayat_gigi_berlubang",
        default: true,
        positive: "Ada riwayat gigi berlubang di sekitar daerah tersebut.",
        negative: "Tidak ada riwayat gigi berlubang.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::new("eo_fistula", "fistula"),
    Qualifier::new("eo_nyeri_tekan", "nyeri tekan"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::default_on("io_fistula", "fistula"),
    Qualifier::new("io_pus", "pus"),
    Qualifier::new("io_karies", "karies profunda"),
];

/// Oral or cutaneous fistula of dental origin.
pub(crate) struct Fistula;

impl CaseBuilder for Fistula {
    fn category(&self) -> CaseCategory {
        CaseCategory::Fistula
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let location = answers.text_or("lokasi_fistula", "rahang");
        with_duration(
            &format!("Pasien datang dengan keluhan terdapat lubang pada {location}"),
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
        let tooth = answers.text_or("io_gigi", "penyebab");
        vec![ExamLine::from_answers(
            answers,
            format!("Gigi {tooth}"),
            INTRAORAL,
            "io_keterangan",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BULLET;

    #[test]
    fn test_defaults() {
        let answers = AnswerSet::new();
        let sentences = Fistula.associated_symptoms(&answers);
        assert_eq!(sentences[0], "Lubang tersebut kadang mengeluarkan nanah.");
        assert_eq!(sentences[2], "Ada riwayat gigi berlubang di sekitar daerah tersebut.");
        let exam = Fistula.examination(&answers);
        assert_eq!(
            exam.intraoral,
            vec![format!(
                "{BULLET}Gigi penyebab dengan fistula (+), pus (-), karies profunda (-)"
            )]
        );
    }
}
