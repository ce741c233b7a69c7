use super::{with_duration, CaseBuilder, CaseCategory};
use crate::answers::AnswerSet;

/// Case names without a dedicated builder: complaint, duration and history only.
pub(crate) struct Generic;

impl CaseBuilder for Generic {
    fn category(&self) -> CaseCategory {
        CaseCategory::Generic
    }

    fn chief_complaint(&self, answers: &AnswerSet) -> String {
        let complaint = answers.text_or("keluhan", "(isi keluhan)");
        with_duration(
            &format!("Pasien datang dengan keluhan {complaint}"),
            answers,
            "",
        )
    }

    fn radiation(&self, _answers: &AnswerSet) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_subjective() {
        let mut answers = AnswerSet::new();
        answers.set("keluhan", "benjolan di bawah lidah");
        answers.set("durasi", "1 bulan");
        answers.set("demam", true);
        assert_eq!(
            Generic.subjective(&answers),
            "Pasien datang dengan keluhan benjolan di bawah lidah sejak ± 1 bulan. Tidak ada \
             riwayat alergi obat dan makanan. Riwayat penyakit sistemik disangkal. Saat ini \
             pasien sedang demam."
        );
    }

    #[test]
    fn test_generic_without_answers() {
        let answers = AnswerSet::new();
        assert_eq!(
            Generic.chief_complaint(&answers),
            "Pasien datang dengan keluhan (isi keluhan)."
        );
        assert!(Generic.examination(&answers).extraoral.is_empty());
    }
}
