//! Medical-history sentences shared by every case.

use crate::answers::AnswerSet;
use crate::text::join_clauses;

/// Current-symptom flags in the order they are named.
const CURRENT_SYMPTOMS: &[(&str, &str)] = &[
    ("batuk", "batuk"),
    ("flu", "flu"),
    ("demam", "demam"),
    ("diare", "diare"),
];

/// Allergy, systemic-disease and current-symptom sentences, in that order.
pub fn history_sentences(answers: &AnswerSet) -> Vec<String> {
    let mut sentences = vec![allergy_sentence(answers)];
    sentences.extend(systemic_sentences(answers));
    sentences.push(current_symptom_sentence(answers));
    sentences
}

pub fn allergy_sentence(answers: &AnswerSet) -> String {
    if !answers.flag("riwayat_alergi", false) {
        return "Tidak ada riwayat alergi obat dan makanan.".to_string();
    }
    let items = list_items(&answers.text("alergi_detail", ""));
    if items.is_empty() {
        "Ada riwayat alergi obat/makanan.".to_string()
    } else {
        format!("Ada riwayat alergi terhadap {}.", join_clauses(&items))
    }
}

/// Systemic-disease sentence, followed by a routine-medication sentence when positive.
pub fn systemic_sentences(answers: &AnswerSet) -> Vec<String> {
    if !answers.flag("riwayat_sistemik", false) {
        return vec!["Riwayat penyakit sistemik disangkal.".to_string()];
    }
    let diseases = list_items(&answers.text("sistemik_detail", ""));
    let disease_sentence = if diseases.is_empty() {
        "Ada riwayat penyakit sistemik.".to_string()
    } else {
        format!("Ada riwayat penyakit sistemik {}.", join_clauses(&diseases))
    };
    let medications = list_items(&answers.text("obat_rutin", ""));
    let medication_sentence = if medications.is_empty() {
        "Tidak ada obat yang rutin dikonsumsi.".to_string()
    } else {
        format!("Pasien rutin mengonsumsi {}.", join_clauses(&medications))
    };
    vec![disease_sentence, medication_sentence]
}

/// Single negative sentence when no flag is set, otherwise names exactly the set flags.
pub fn current_symptom_sentence(answers: &AnswerSet) -> String {
    let present: Vec<&str> = CURRENT_SYMPTOMS
        .iter()
        .filter(|(key, _)| answers.flag(key, false))
        .map(|(_, name)| *name)
        .collect();
    if present.is_empty() {
        let all: Vec<&str> = CURRENT_SYMPTOMS.iter().map(|(_, name)| *name).collect();
        format!("Saat ini pasien tidak sedang {}.", join_clauses(&all))
    } else {
        format!("Saat ini pasien sedang {}.", join_clauses(&present))
    }
}

/// Comma- or newline-separated items, trimmed, blanks dropped.
fn list_items(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_symptom_flags_false_gives_single_negative() {
        let answers = AnswerSet::new();
        assert_eq!(
            current_symptom_sentence(&answers),
            "Saat ini pasien tidak sedang batuk, flu, demam, dan diare."
        );
    }

    #[test]
    fn test_single_symptom_flag_named_alone() {
        let mut answers = AnswerSet::new();
        answers.set("demam", true);
        answers.set("batuk", false);
        assert_eq!(
            current_symptom_sentence(&answers),
            "Saat ini pasien sedang demam."
        );
    }

    #[test]
    fn test_symptom_flags_are_independent() {
        let mut answers = AnswerSet::new();
        answers.set("flu", true);
        answers.set("diare", true);
        assert_eq!(
            current_symptom_sentence(&answers),
            "Saat ini pasien sedang flu dan diare."
        );
    }

    #[test]
    fn test_allergy_sentence_variants() {
        let mut answers = AnswerSet::new();
        assert_eq!(
            allergy_sentence(&answers),
            "Tidak ada riwayat alergi obat dan makanan."
        );
        answers.set("riwayat_alergi", true);
        assert_eq!(allergy_sentence(&answers), "Ada riwayat alergi obat/makanan.");
        answers.set("alergi_detail", "amoksisilin, seafood,\nkacang");
        assert_eq!(
            allergy_sentence(&answers),
            "Ada riwayat alergi terhadap amoksisilin, seafood, dan kacang."
        );
    }

    #[test]
    fn test_systemic_sentences_with_medication() {
        let mut answers = AnswerSet::new();
        assert_eq!(
            systemic_sentences(&answers),
            vec!["Riwayat penyakit sistemik disangkal."]
        );
        answers.set("riwayat_sistemik", true);
        answers.set("sistemik_detail", "hipertensi, diabetes melitus");
        answers.set("obat_rutin", "amlodipin 5 mg");
        assert_eq!(
            systemic_sentences(&answers),
            vec![
                "Ada riwayat penyakit sistemik hipertensi dan diabetes melitus.",
                "Pasien rutin mengonsumsi amlodipin 5 mg."
            ]
        );
    }

    #[test]
    fn test_history_order() {
        let answers = AnswerSet::new();
        let sentences = history_sentences(&answers);
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].contains("alergi"));
        assert!(sentences[1].contains("sistemik"));
        assert!(sentences[2].starts_with("Saat ini"));
    }
}
