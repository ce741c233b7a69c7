//! Extraction from a raw SOAP paste (first-visit or referral note).

use super::identity::{apply_identity, apply_measurements, apply_medical_record_number};
use super::patterns::{
    ASSESSMENT_LABEL_LINE, ASSESSMENT_START, ATTENDING_LINE, OBJECTIVE_LABEL_LINE,
    OBJECTIVE_START, PLAN_LABEL, PLAN_LABEL_LINE, PRO_MARKER, PRO_PROCEDURE, RESIDENT_LINE,
    SUBJECTIVE_START, TRAILING_REMARK,
};
use crate::record::StructuredRecord;
use regex::Regex;

/// Best-effort extraction from an unstructured SOAP note. Never fails; anything not found is
/// left at its default.
pub fn extract_from_clinical_note(text: &str) -> StructuredRecord {
    let mut record = StructuredRecord::new();
    let text = text.trim();
    if text.is_empty() {
        return record;
    }

    apply_identity(text, &mut record);
    apply_medical_record_number(text, &mut record);
    apply_measurements(text, &mut record);

    if let Some((procedure, anesthesia)) = planned_procedure(text) {
        record.procedure = procedure;
        record.anesthesia = anesthesia;
    }

    if let Some(caps) = ATTENDING_LINE.captures(text) {
        record.attending = caps[1].trim().to_string();
    }
    if let Some(caps) = RESIDENT_LINE.captures(text) {
        record.residents = caps[1].trim().to_string();
    }

    record.subjective = section(text, &SUBJECTIVE_START, &OBJECTIVE_LABEL_LINE);
    record.objective = section(text, &OBJECTIVE_START, &ASSESSMENT_LABEL_LINE);
    record.assessment = section(text, &ASSESSMENT_START, &PLAN_LABEL_LINE);

    tracing::debug!(
        found_identity = !record.patient_name.is_empty(),
        found_procedure = !record.procedure.is_empty(),
        "clinical note extracted"
    );
    record
}

/// Procedure and anaesthesia from the most recent `Pro ...` entry of the final `P:` section.
fn planned_procedure(text: &str) -> Option<(String, String)> {
    let plan_start = PLAN_LABEL.find_iter(text).last()?.end();
    let plan = &text[plan_start..];

    let last_pro_line = plan
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && PRO_MARKER.is_match(line))
        .last()?;

    let caps = PRO_PROCEDURE.captures(last_pro_line)?;
    let procedure = caps.get(1).map_or("", |m| m.as_str()).trim();
    let procedure = TRAILING_REMARK.replace(procedure, "").trim().to_string();
    let anesthesia = caps
        .get(2)
        .map_or(String::new(), |m| m.as_str().trim().to_string());

    (!procedure.is_empty()).then_some((procedure, anesthesia))
}

/// Text between the first `start` label and the next `end` label, trimmed. Empty when the
/// start label is absent.
fn section(text: &str, start: &Regex, end: &Regex) -> String {
    let Some(label) = start.find(text) else {
        return String::new();
    };
    let rest = &text[label.end()..];
    let stop = end.find(rest).map_or(rest.len(), |m| m.start());
    rest[..stop].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "\
Assalamualaikum dokter, izin melaporkan pasien poli.

Tn. John Doe / L / 24 Tahun / Rawat Jalan / BPJS / RSGMP UNHAS / RM 10.82.79

S: Pasien datang dengan keluhan gigi belakang kanan bawah sakit sejak 1 bulan.
Tidak ada riwayat alergi.
O:
KU baik, TD 120/80 mmHg
BB: 60 kg TB: 170 cm
EO: wajah simetris
IO: 48 partial erupted
A: Impaksi gigi 48 kelas II posisi A
P:
- Pro foto panoramik
- Pro odontektomi 48 dalam lokal anestesi.
- Pro odontektomi 38, 48 dalam general anestesi. (rujukan)
DPJP: drg. Andi, Sp.BM
Residen: drg. Budi";

    #[test]
    fn test_identity_from_note() {
        let record = extract_from_clinical_note(NOTE);
        assert_eq!(record.patient_name, "John Doe");
        assert_eq!(record.sex, "L");
        assert_eq!(record.age, "24 Tahun");
        assert!(record.care_setting.contains("Rawat Jalan"));
        assert_eq!(record.payer, "BPJS");
        assert_eq!(record.medical_record_number, "10.82.79");
    }

    #[test]
    fn test_measurements_from_note() {
        let record = extract_from_clinical_note(NOTE);
        assert_eq!(record.weight_kg, 60.0);
        assert_eq!(record.height_cm, 170.0);
    }

    #[test]
    fn test_last_pro_line_wins() {
        let record = extract_from_clinical_note(NOTE);
        assert_eq!(record.procedure, "odontektomi 38, 48");
        assert_eq!(record.anesthesia, "general anestesi");
    }

    #[test]
    fn test_pro_line_with_parenthesis_and_no_anesthesia() {
        let note = "A: Kista\nP:\nPro enukleasi kista (konsul DPJP)";
        let record = extract_from_clinical_note(note);
        assert_eq!(record.procedure, "enukleasi kista");
        assert_eq!(record.anesthesia, "");
    }

    #[test]
    fn test_plan_without_pro_lines() {
        let note = "S: nyeri\nP:\n- Observasi\n- Kontrol 1 minggu";
        let record = extract_from_clinical_note(note);
        assert_eq!(record.procedure, "");
    }

    #[test]
    fn test_final_plan_section_used() {
        let note = "S: x\nO: y\nP: Pro eksisi\nA: z\nP:\nPro marsupialisasi dalam lokal anestesi";
        let record = extract_from_clinical_note(note);
        assert_eq!(record.procedure, "marsupialisasi");
        assert_eq!(record.anesthesia, "lokal anestesi");
    }

    #[test]
    fn test_staff_lines() {
        let record = extract_from_clinical_note(NOTE);
        assert_eq!(record.attending, "drg. Andi, Sp.BM");
        assert_eq!(record.residents, "drg. Budi");
    }

    #[test]
    fn test_narrative_sections() {
        let record = extract_from_clinical_note(NOTE);
        assert!(record
            .subjective
            .starts_with("Pasien datang dengan keluhan gigi belakang"));
        assert!(record.subjective.ends_with("Tidak ada riwayat alergi."));
        assert!(record.objective.starts_with("KU baik"));
        assert!(record.objective.ends_with("IO: 48 partial erupted"));
        assert_eq!(record.assessment, "Impaksi gigi 48 kelas II posisi A");
    }

    #[test]
    fn test_full_width_colon_labels() {
        let note = "S： bengkak pipi kiri\nO： oedem (+)\nA： abses bukal";
        let record = extract_from_clinical_note(note);
        assert_eq!(record.subjective, "bengkak pipi kiri");
        assert_eq!(record.objective, "oedem (+)");
        assert_eq!(record.assessment, "abses bukal");
    }

    #[test]
    fn test_missing_labels_give_empty_blocks() {
        let record = extract_from_clinical_note("S: nyeri gigi\nA: pulpitis");
        assert_eq!(record.subjective, "nyeri gigi\nA: pulpitis");
        assert_eq!(record.objective, "");
        assert_eq!(record.assessment, "pulpitis");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(extract_from_clinical_note("").is_empty());
        assert!(extract_from_clinical_note("   \n\t").is_empty());
        let record = extract_from_clinical_note("lorem ipsum dolor sit amet");
        assert!(record.is_empty());
    }
}
