//! Extraction from a surgical schedule memo.
//!
//! The memo is the authoritative source for scheduling fields (time, zone, supporting
//! examinations, staff), so these are extracted here even when a clinical note supplies them.

use super::identity::{apply_identity, apply_measurements, apply_medical_record_number};
use super::patterns::{
    ATTENDING_LINE, LEADING_PRO, MEMO_PLAN_LINE, PRO_MARKER, RESIDENT_BLOCK, SCHEDULED_TIME,
    SUPPORTING_EXAM, TRAILING_DALAM,
};
use crate::constants::SUPPORTING_EXAM_HEADING;
use crate::record::StructuredRecord;

/// Best-effort extraction from a surgical memo. Never fails.
pub fn extract_from_surgical_memo(text: &str) -> StructuredRecord {
    let mut record = StructuredRecord::new();
    let text = text.trim();
    if text.is_empty() {
        return record;
    }

    apply_identity(text, &mut record);
    apply_medical_record_number(text, &mut record);
    apply_measurements(text, &mut record);

    if let Some(block) = supporting_exam(text) {
        record.supporting_exam = block;
    }

    if let Some(procedure) = memo_procedure(text) {
        record.procedure = procedure;
    }

    if let Some(caps) = SCHEDULED_TIME.captures(text) {
        record.procedure_time = caps[1].replace(':', ".");
        record.time_zone = caps[2].to_uppercase();
    }

    if let Some(caps) = ATTENDING_LINE.captures(text) {
        record.attending = caps[1].trim().to_string();
    }
    if let Some(caps) = RESIDENT_BLOCK.captures(text) {
        record.residents = caps[1].trim().to_string();
    }

    tracing::debug!(
        found_supporting_exam = !record.supporting_exam.is_empty(),
        found_time = !record.procedure_time.is_empty(),
        "surgical memo extracted"
    );
    record
}

/// The supporting-examination block under a normalized heading. The body is kept
/// byte-for-byte except for blank lines before it and trailing whitespace after it.
fn supporting_exam(text: &str) -> Option<String> {
    let caps = SUPPORTING_EXAM.captures(text)?;
    let body = trim_blank_lines(&caps[1]);
    if body.is_empty() {
        return None;
    }
    Some(format!("{SUPPORTING_EXAM_HEADING}\n{body}"))
}

/// Drops whole blank lines from the start and trailing whitespace from the end, leaving the
/// first content line's indentation intact.
fn trim_blank_lines(block: &str) -> &str {
    let mut start = 0;
    for line in block.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    block[start..].trim_end()
}

/// Procedure from the memo's `P:` line: the first one mentioning `Pro`, else the first one.
/// The `Pro` marker and the trailing `dalam ...` clause are stripped; the memo never sets the
/// anaesthesia, which stays with the clinical note.
fn memo_procedure(text: &str) -> Option<String> {
    let lines: Vec<&str> = MEMO_PLAN_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim()))
        .filter(|line| !line.is_empty())
        .collect();
    let line = lines
        .iter()
        .find(|line| PRO_MARKER.is_match(line))
        .or_else(|| lines.first())?;

    let without_pro = LEADING_PRO.replace(line, "");
    let without_pro = without_pro.trim();

    let procedure = TRAILING_DALAM.replace(without_pro, "");
    let procedure = procedure.trim();

    (!procedure.is_empty()).then(|| procedure.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMO: &str = "\
MINLAP OPERASI
Ny. Sari Dewi / P / 35 Tahun / UMUM / Rawat Inap / RSGMP UNHAS / RM 01.23.45
BB: 52 kg

Pemeriksaan penunjang :

  - Darah rutin: Hb 12.8 g/dL
\t• Foto panoramik: impaksi 38, 48
    * CT dalam batas normal

A: Impaksi gigi 38, 48
P: Pro odontektomi 38, 48 dalam general anestesi
Hari/Tanggal : Selasa, 20/10/2026
Pukul : *08.00 WITA*
Residen: drg. Budi,
drg. Citra
DPJP: drg. Andi, Sp.BM";

    #[test]
    fn test_supporting_exam_preserved_verbatim() {
        let record = extract_from_surgical_memo(MEMO);
        assert_eq!(
            record.supporting_exam,
            "Pemeriksaan penunjang :\n  - Darah rutin: Hb 12.8 g/dL\n\t• Foto panoramik: impaksi 38, 48\n    * CT dalam batas normal"
        );
    }

    #[test]
    fn test_supporting_exam_runs_to_end_without_assessment() {
        let memo = "Pemeriksaan penunjang : Hb 13\n   Leukosit 8000\n\n";
        let record = extract_from_surgical_memo(memo);
        assert_eq!(
            record.supporting_exam,
            "Pemeriksaan penunjang :\nHb 13\n   Leukosit 8000"
        );
    }

    #[test]
    fn test_empty_supporting_exam_left_unset() {
        let record = extract_from_surgical_memo("Pemeriksaan penunjang :\n\nA: Kista");
        assert_eq!(record.supporting_exam, "");
    }

    #[test]
    fn test_scheduled_time_with_decoration() {
        let record = extract_from_surgical_memo(MEMO);
        assert_eq!(record.procedure_time, "08.00");
        assert_eq!(record.time_zone, "WITA");
    }

    #[test]
    fn test_scheduled_time_with_colon_separator() {
        let record = extract_from_surgical_memo("pukul: 9:30 WIB");
        assert_eq!(record.procedure_time, "9.30");
        assert_eq!(record.time_zone, "WIB");
    }

    #[test]
    fn test_lowercase_time_zone_is_uppercased() {
        let record = extract_from_surgical_memo("Pukul : 09.30 wita");
        assert_eq!(record.procedure_time, "09.30");
        assert_eq!(record.time_zone, "WITA");
    }

    #[test]
    fn test_procedure_line() {
        let record = extract_from_surgical_memo(MEMO);
        assert_eq!(record.procedure, "odontektomi 38, 48");
        assert_eq!(record.anesthesia, "");
    }

    #[test]
    fn test_procedure_line_with_bullet_and_no_anesthesia() {
        let record = extract_from_surgical_memo("P: - Pro ekstirpasi ranula");
        assert_eq!(record.procedure, "ekstirpasi ranula");
        assert_eq!(record.anesthesia, "");
    }

    #[test]
    fn test_identity_and_measurements() {
        let record = extract_from_surgical_memo(MEMO);
        assert_eq!(record.display_name(), "Ny. Sari Dewi");
        assert_eq!(record.payer, "UMUM");
        assert_eq!(record.care_setting, "Rawat Inap");
        assert_eq!(record.medical_record_number, "01.23.45");
        assert_eq!(record.weight_kg, 52.0);
    }

    #[test]
    fn test_resident_block_spans_lines() {
        let record = extract_from_surgical_memo(MEMO);
        assert_eq!(record.residents, "drg. Budi,\ndrg. Citra");
        assert_eq!(record.attending, "drg. Andi, Sp.BM");
    }

    #[test]
    fn test_empty_memo() {
        assert!(extract_from_surgical_memo("  \n ").is_empty());
    }
}
