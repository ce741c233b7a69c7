//! The structured patient-encounter record and its field-level merge.
//!
//! Every field is optional in practice: empty strings and zero measurements mean "not known".
//! Records are combined with [`StructuredRecord::merge_from`], where each non-empty source
//! field overwrites the receiving field and everything else is left alone.

use crate::constants::DEFAULT_FACILITY;
use serde::{Deserialize, Serialize};
use soap_types::NonEmptyText;

/// Parsed/derived patient-encounter record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredRecord {
    /// Honorific prefix from the identity line (`Tn.`, `Ny.`, `Nn.`, `An.`).
    pub honorific: String,
    pub patient_name: String,
    pub sex: String,
    pub age: String,
    /// Payer/financing category (`BPJS`, `UMUM`, ...).
    pub payer: String,
    /// Care setting (`Rawat Jalan`, `Rawat Inap`, `IGD`).
    pub care_setting: String,
    pub room: String,
    /// `None` until a facility is extracted or entered; see [`StructuredRecord::facility`].
    pub facility: Option<String>,
    pub medical_record_number: String,
    /// Body weight in kg; zero means unknown.
    pub weight_kg: f64,
    /// Body height in cm; zero means unknown.
    pub height_cm: f64,
    pub procedure: String,
    pub anesthesia: String,
    /// Supporting-examination block, kept byte-for-byte apart from outer blank lines.
    pub supporting_exam: String,
    /// Scheduled procedure time as written (`08.00`).
    pub procedure_time: String,
    pub time_zone: String,
    pub attending: String,
    /// Resident name(s) as pasted; normalized with `join_names` only when rendered.
    pub residents: String,
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
}

impl StructuredRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facility name, falling back to the fixed institution when unset or blank.
    pub fn facility(&self) -> NonEmptyText {
        self.facility
            .as_deref()
            .and_then(|f| NonEmptyText::new(f).ok())
            .unwrap_or_else(|| {
                NonEmptyText::new(DEFAULT_FACILITY).expect("default facility is non-empty")
            })
    }

    /// Name with its honorific, e.g. `Tn. Budi Santoso`.
    pub fn display_name(&self) -> String {
        match (self.honorific.trim(), self.patient_name.trim()) {
            ("", name) => name.to_string(),
            (prefix, "") => prefix.to_string(),
            (prefix, name) => format!("{prefix} {name}"),
        }
    }

    /// Positive weight or `None`.
    pub fn known_weight(&self) -> Option<f64> {
        (self.weight_kg.is_finite() && self.weight_kg > 0.0).then_some(self.weight_kg)
    }

    /// Positive height or `None`.
    pub fn known_height(&self) -> Option<f64> {
        (self.height_cm.is_finite() && self.height_cm > 0.0).then_some(self.height_cm)
    }

    /// Overwrites each field for which `source` carries a non-empty value.
    pub fn merge_from(&mut self, source: &StructuredRecord) {
        macro_rules! overlay {
            ($($field:ident),+ $(,)?) => {
                $(
                    if !source.$field.trim().is_empty() {
                        self.$field = source.$field.clone();
                    }
                )+
            };
        }

        overlay!(
            honorific,
            patient_name,
            sex,
            age,
            payer,
            care_setting,
            room,
            medical_record_number,
            procedure,
            anesthesia,
            supporting_exam,
            procedure_time,
            time_zone,
            attending,
            residents,
            subjective,
            objective,
            assessment,
        );

        if let Some(facility) = source.facility.as_deref() {
            if !facility.trim().is_empty() {
                self.facility = Some(facility.to_string());
            }
        }
        if let Some(weight) = source.known_weight() {
            self.weight_kg = weight;
        }
        if let Some(height) = source.known_height() {
            self.height_cm = height;
        }
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Ordered merge pipeline: starts from an empty record and applies each pass in turn, so a
/// later pass wins every field it supplies.
pub fn merge_pipeline<I>(passes: I) -> StructuredRecord
where
    I: IntoIterator<Item = StructuredRecord>,
{
    passes
        .into_iter()
        .enumerate()
        .fold(StructuredRecord::new(), |mut acc, (index, pass)| {
            tracing::debug!(pass = index, empty = pass.is_empty(), "merging record pass");
            acc.merge_from(&pass);
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> StructuredRecord {
        StructuredRecord {
            honorific: "Tn.".into(),
            patient_name: "Budi".into(),
            sex: "L".into(),
            age: "24 Tahun".into(),
            payer: "BPJS".into(),
            care_setting: "Rawat Jalan".into(),
            facility: Some("RSUP Wahidin".into()),
            medical_record_number: "10.82.79".into(),
            weight_kg: 55.0,
            height_cm: 165.0,
            procedure: "Odontektomi 38".into(),
            supporting_exam: "Pemeriksaan penunjang :\n  - Hb 13".into(),
            ..StructuredRecord::default()
        }
    }

    #[test]
    fn test_merge_empty_source_is_identity() {
        let mut record = populated();
        record.merge_from(&StructuredRecord::new());
        assert_eq!(record, populated());
    }

    #[test]
    fn test_merge_overwrites_only_non_empty_fields() {
        let mut record = populated();
        let source = StructuredRecord {
            patient_name: "Budi Santoso".into(),
            sex: "   ".into(),
            weight_kg: 0.0,
            height_cm: 170.0,
            ..StructuredRecord::default()
        };
        record.merge_from(&source);
        assert_eq!(record.patient_name, "Budi Santoso");
        assert_eq!(record.sex, "L");
        assert_eq!(record.weight_kg, 55.0);
        assert_eq!(record.height_cm, 170.0);
        assert_eq!(record.procedure, "Odontektomi 38");
    }

    #[test]
    fn test_merge_ignores_negative_measurements() {
        let mut record = populated();
        record.merge_from(&StructuredRecord {
            weight_kg: -3.0,
            ..StructuredRecord::default()
        });
        assert_eq!(record.weight_kg, 55.0);
    }

    #[test]
    fn test_facility_defaults_when_absent_or_blank() {
        let mut record = StructuredRecord::new();
        assert_eq!(record.facility().as_str(), "RSGMP UNHAS");
        record.facility = Some("  ".into());
        assert_eq!(record.facility().as_str(), "RSGMP UNHAS");
        record.facility = Some("RSUP Wahidin".into());
        assert_eq!(record.facility().as_str(), "RSUP Wahidin");
    }

    #[test]
    fn test_pipeline_later_pass_wins() {
        let first = StructuredRecord {
            procedure_time: "09.00".into(),
            attending: "drg. A".into(),
            subjective: "Nyeri".into(),
            ..StructuredRecord::default()
        };
        let second = StructuredRecord {
            procedure_time: "08.00".into(),
            ..StructuredRecord::default()
        };
        let merged = merge_pipeline([first, second]);
        assert_eq!(merged.procedure_time, "08.00");
        assert_eq!(merged.attending, "drg. A");
        assert_eq!(merged.subjective, "Nyeri");
    }

    #[test]
    fn test_display_name_combinations() {
        let mut record = StructuredRecord::new();
        assert_eq!(record.display_name(), "");
        record.patient_name = "Sari".into();
        assert_eq!(record.display_name(), "Sari");
        record.honorific = "Ny.".into();
        assert_eq!(record.display_name(), "Ny. Sari");
    }
}
