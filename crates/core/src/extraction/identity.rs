//! Identity-line parsing shared by both extractors.
//!
//! An identity line looks like
//! `Tn. Budi / L / 24 Tahun / Rawat Jalan / BPJS / RSGMP UNHAS / RM 10.82.79`.

use super::patterns::{HEIGHT, HONORIFIC, IDENTITY_LINE, MEDICAL_RECORD_NUMBER, WEIGHT};
use crate::record::StructuredRecord;

/// Payer names recognised in identity tokens (compared case-insensitively, whole token).
const PAYERS: &[&str] = &["BPJS", "UMUM", "JASA RAHARJA", "BAKSOS", "BAKSOS CCC", "CCC"];

/// Emergency ward marker, matched as a whole token.
const EMERGENCY_MARKER: &str = "IGD";

/// Substring marking inpatient/outpatient tokens (`Rawat Inap`, `Rawat Jalan`).
const CARE_SETTING_MARKER: &str = "rawat";

/// Slash-separated, trimmed, non-empty tokens of the first identity line, if any.
pub(crate) fn identity_tokens(text: &str) -> Option<Vec<String>> {
    let line = IDENTITY_LINE.find(text)?.as_str().trim();
    let tokens: Vec<String> = line
        .split('/')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    (!tokens.is_empty()).then_some(tokens)
}

/// Fills identity, care setting, payer and facility from the identity line.
pub(crate) fn apply_identity(text: &str, record: &mut StructuredRecord) {
    let Some(tokens) = identity_tokens(text) else {
        tracing::debug!("no identity line found");
        return;
    };

    let first = &tokens[0];
    match HONORIFIC.captures(first) {
        Some(caps) => {
            record.honorific = caps[1].to_string();
            record.patient_name = first[caps[0].len()..].trim().to_string();
        }
        None => record.patient_name = first.clone(),
    }
    if let Some(sex) = tokens.get(1) {
        record.sex = sex.clone();
    }
    if let Some(age) = tokens.get(2) {
        record.age = age.clone();
    }

    for token in &tokens {
        if token.to_lowercase().contains(CARE_SETTING_MARKER)
            || token.eq_ignore_ascii_case(EMERGENCY_MARKER)
        {
            record.care_setting = token.clone();
        }
        if PAYERS.iter().any(|p| token.eq_ignore_ascii_case(p)) {
            record.payer = token.clone();
        }
        if is_facility_token(token) {
            record.facility = Some(token.clone());
        }
    }
}

/// Hospital names in identity lines start with `RS` (`RSGMP UNHAS`, `RSUP Wahidin`).
fn is_facility_token(token: &str) -> bool {
    token.len() > 2 && token.starts_with("RS") && !MEDICAL_RECORD_NUMBER.is_match(token)
}

/// First `RM` number anywhere in the text, without trailing sentence dots.
pub(crate) fn apply_medical_record_number(text: &str, record: &mut StructuredRecord) {
    if let Some(caps) = MEDICAL_RECORD_NUMBER.captures(text) {
        let number = caps[1].trim_end_matches('.');
        if !number.is_empty() {
            record.medical_record_number = number.to_string();
        }
    }
}

/// First `BB: n kg` and `TB: n cm` matches.
pub(crate) fn apply_measurements(text: &str, record: &mut StructuredRecord) {
    if let Some(weight) = WEIGHT
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
    {
        record.weight_kg = weight;
    }
    if let Some(height) = HEIGHT
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
    {
        record.height_cm = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: &str =
        "Tn. John Doe / L / 24 Tahun / Rawat Jalan / BPJS / RSGMP UNHAS / RM 10.82.79";

    #[test]
    fn test_identity_line_fields() {
        let mut record = StructuredRecord::new();
        apply_identity(IDENTITY, &mut record);
        apply_medical_record_number(IDENTITY, &mut record);

        assert_eq!(record.honorific, "Tn.");
        assert_eq!(record.patient_name, "John Doe");
        assert_eq!(record.sex, "L");
        assert_eq!(record.age, "24 Tahun");
        assert!(record.care_setting.contains("Rawat Jalan"));
        assert_eq!(record.payer, "BPJS");
        assert_eq!(record.facility.as_deref(), Some("RSGMP UNHAS"));
        assert_eq!(record.medical_record_number, "10.82.79");
    }

    #[test]
    fn test_identity_line_found_mid_document_case_insensitive() {
        let text = "Selamat pagi dok\n\nny. Sari / P / 40 Tahun / umum / IGD\nS: nyeri";
        let mut record = StructuredRecord::new();
        apply_identity(text, &mut record);
        assert_eq!(record.honorific, "ny.");
        assert_eq!(record.patient_name, "Sari");
        assert_eq!(record.payer, "umum");
        assert_eq!(record.care_setting, "IGD");
    }

    #[test]
    fn test_last_care_setting_token_wins() {
        let text = "An. Dika / L / 9 Tahun / Rawat Jalan / Rawat Inap";
        let mut record = StructuredRecord::new();
        apply_identity(text, &mut record);
        assert_eq!(record.care_setting, "Rawat Inap");
    }

    #[test]
    fn test_payer_must_match_whole_token() {
        let text = "Nn. Ayu / P / 19 Tahun / BPJS Kesehatan";
        let mut record = StructuredRecord::new();
        apply_identity(text, &mut record);
        assert_eq!(record.payer, "");
    }

    #[test]
    fn test_short_identity_line() {
        let mut record = StructuredRecord::new();
        apply_identity("Tn. Ahmad", &mut record);
        assert_eq!(record.patient_name, "Ahmad");
        assert_eq!(record.sex, "");
        assert_eq!(record.age, "");
    }

    #[test]
    fn test_no_identity_line_leaves_defaults() {
        let mut record = StructuredRecord::new();
        apply_identity("Pasien laki-laki / 24 tahun", &mut record);
        assert!(record.is_empty());
    }

    #[test]
    fn test_medical_record_number_variants() {
        let mut record = StructuredRecord::new();
        apply_medical_record_number("No. RM.123.456.", &mut record);
        assert_eq!(record.medical_record_number, "123.456");

        let mut record = StructuredRecord::new();
        apply_medical_record_number("rm 0099", &mut record);
        assert_eq!(record.medical_record_number, "0099");
    }

    #[test]
    fn test_measurements() {
        let mut record = StructuredRecord::new();
        apply_measurements("TTV baik. BB: 55.5 kg, TB = 162 cm", &mut record);
        assert_eq!(record.weight_kg, 55.5);
        assert_eq!(record.height_cm, 162.0);

        let mut record = StructuredRecord::new();
        apply_measurements("BB 55 kg", &mut record);
        assert_eq!(record.weight_kg, 0.0);
    }
}
