use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const OTHER_COMPLAINT: &str = "Keluhan lain";

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "gusi_bengkak",
        default: false,
        positive: "Keluhan disertai gusi bengkak di sekitar gigi tersebut.",
        negative: "Tidak ada keluhan gusi bengkak.",
    },
    Clause {
        key: "sulit_buka_mulut",
        default: false,
        positive: "Pasien mengeluhkan sulit membuka mulut.",
        negative: "Tidak ada keluhan sulit membuka mulut.",
    },
];

const EXTRAORAL: &[Qualifier] = &[Qualifier::new("eo_nyeri_tekan", "nyeri tekan")];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_perikoronitis", "perikoronitis"),
    Qualifier::new("io_hiperemis", "hiperemis"),
    Qualifier::new("io_nyeri_tekan", "nyeri tekan"),
];

/// Impacted tooth.
pub(crate) struct Impaction;

impl CaseBuilder for Impaction {
    fn category(&self) -> CaseCategory {
        CaseCategory::Impaction
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let mut complaint =
            answers.text_or("keluhan_pilihan", "Gigi belakang tidak tumbuh dan nyeri");
        if complaint == OTHER_COMPLAINT {
            complaint = answers.text_or("keluhan_lain", "gigi belakang tidak tumbuh");
        }
        let side = answers.text_or("laterality", "kanan dan kiri");
        with_duration(
            &format!(
                "Pasien datang dengan keluhan {} pada sisi {side}",
                complaint.to_lowercase()
            ),
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
        let tooth = answers.text("io_gigi", "");
        let selection = if tooth.is_empty() {
            "Regio gigi impaksi".to_string()
        } else {
            format!("Regio {tooth}")
        };
        vec![ExamLine::from_answers(answers, selection, INTRAORAL, "io_keterangan")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BULLET;

    #[test]
    fn test_subjective_sentence_order() {
        let mut answers = AnswerSet::new();
        answers.set("keluhan_pilihan", "Gigi belakang tumbuh miring dan nyeri");
        answers.set("laterality", "kanan");
        answers.set("durasi", "3 bulan");
        answers.set("sulit_buka_mulut", true);

        assert_eq!(
            Impaction.subjective(&answers),
            "Pasien datang dengan keluhan gigi belakang tumbuh miring dan nyeri pada sisi kanan \
             sejak ± 3 bulan. Tidak ada keluhan gusi bengkak. Pasien mengeluhkan sulit membuka \
             mulut. Nyeri tidak menjalar. Tidak ada riwayat alergi obat dan makanan. Riwayat \
             penyakit sistemik disangkal. Saat ini pasien tidak sedang batuk, flu, demam, dan \
             diare."
        );
    }

    #[test]
    fn test_other_complaint_uses_free_text() {
        let mut answers = AnswerSet::new();
        answers.set("keluhan_pilihan", "Keluhan lain");
        answers.set("keluhan_lain", "Gigi Belakang Sering Tergigit");
        assert_eq!(
            Impaction.chief_complaint(&answers),
            "Pasien datang dengan keluhan gigi belakang sering tergigit pada sisi kanan dan kiri."
        );
    }

    #[test]
    fn test_examination_lines() {
        let mut answers = AnswerSet::new();
        answers.set("io_gigi", "gigi 38");
        answers.set("io_perikoronitis", true);
        answers.set("io_keterangan", "operkulum menutupi 1/2 mahkota");
        let exam = Impaction.examination(&answers);
        assert_eq!(
            exam.extraoral,
            vec![format!("{BULLET}Wajah simetris dengan nyeri tekan (-)")]
        );
        assert_eq!(
            exam.intraoral,
            vec![format!(
                "{BULLET}Regio gigi 38 dengan perikoronitis (+), hiperemis (-), nyeri tekan (-), \
                 operkulum menutupi 1/2 mahkota"
            )]
        );
    }
}
