use super::examination::{ExamLine, Qualifier};
use super::{render_clauses, with_duration, CaseBuilder, CaseCategory, Clause};
use crate::answers::AnswerSet;

const NO_CHEWING_HABIT: &str = "tidak ada";

const SYMPTOMS: &[Clause] = &[
    Clause {
        key: "riwayat_mengunci",
        default: false,
        positive: "Pasien pernah mengalami kesulitan menutup mulut setelah menguap lebar.",
        negative: "Tidak ada riwayat rahang terkunci.",
    },
    Clause {
        key: "bunyi_sendi",
        default: false,
        positive: "Terdapat bunyi pada sendi rahang saat membuka dan menutup mulut.",
        negative: "Tidak ada bunyi pada sendi rahang.",
    },
];

const EXTRAORAL: &[Qualifier] = &[
    Qualifier::new("eo_clicking", "clicking"),
    Qualifier::new("eo_nyeri_tekan", "nyeri tekan"),
    Qualifier::new("eo_deviasi", "deviasi saat membuka mulut"),
];

const INTRAORAL: &[Qualifier] = &[
    Qualifier::new("io_atrisi", "atrisi"),
    Qualifier::new("io_gigi_hilang", "gigi hilang"),
];

/// Temporomandibular disorder.
pub(crate) struct Tmd;

impl CaseBuilder for Tmd {
    fn category(&self) -> CaseCategory {
        CaseCategory::Tmd
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let side = answers.text_or("sisi_tmd", "kanan dan kiri");
        with_duration(
            &format!(
                "Pasien datang dengan keluhan nyeri pada daerah sendi rahang sisi {side} saat \
                 mengunyah"
            ),
            answers,
            "",
        )
    }

    fn associated_symptoms(&self, answers: &AnswerSet) -> Vec<String> {
        let mut sentences = render_clauses(SYMPTOMS, answers);
        let habit = answers.text_or("kebiasaan_mengunyah", "kiri");
        sentences.push(if habit == NO_CHEWING_HABIT {
            "Tidak ada kebiasaan mengunyah sebelah.".to_string()
        } else {
            format!("Riwayat kebiasaan mengunyah sebelah {habit}.")
        });
        sentences
    }

    fn extraoral_lines(&self, answers: &AnswerSet) -> Vec<ExamLine> {
        let joint = answers.text_or("eo_tmj", "TMJ kanan dan kiri");
        vec![ExamLine::from_answers(answers, joint, EXTRAORAL, "eo_keterangan")]
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
