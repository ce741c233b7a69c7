//! Plan block construction.
//!
//! The pre-operative plan is computed from the answers: fixed clearance line, optional IV
//! fluid order with a weight-based drop rate, fasting and antibiotic times derived from the
//! operation time, preparation instructions, and a closing operative line.

use crate::answers::AnswerSet;
use crate::constants::{
    ANTIBIOTIC_OFFSET_MINUTES, BULLET, DEFAULT_ANESTHESIA, DEFAULT_IV_FLUID,
    DEFAULT_OPERATION_TIME, DEFAULT_TIME_ZONE_LABEL, FASTING_OFFSET_MINUTES, MACRO_DRIP_FACTOR,
    PLACEHOLDER_ANTIBIOTIC, PLACEHOLDER_DROP_RATE, PLACEHOLDER_PROCEDURE, PLACEHOLDER_TIME,
};
use crate::form::{DROP_FACTOR_KEY, DROP_RATE_KEY, OPERATION_DATE_KEY};
use crate::record::StructuredRecord;
use crate::text::{
    day_name, drops_per_minute, format_clock_time, format_date, maintenance_fluid_rate, next_day,
    parse_clock_time, subtract_minutes,
};
use chrono::NaiveDate;

/// Operation details after resolving answer, extracted record and default in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDetails {
    pub procedure: String,
    pub anesthesia: String,
    /// Scheduled time as written (`08.00`).
    pub time: String,
    pub time_zone: String,
    pub date: NaiveDate,
}

impl OperationDetails {
    pub fn resolve(answers: &AnswerSet, record: &StructuredRecord, report_date: NaiveDate) -> Self {
        let pick = |key: &str, extracted: &str, default: &str| {
            let answer = answers.text(key, "");
            if !answer.is_empty() {
                return answer;
            }
            match extracted.trim() {
                "" => default.to_string(),
                value => value.to_string(),
            }
        };
        let date = answers
            .date(OPERATION_DATE_KEY)
            .unwrap_or_else(|| next_day(report_date));

        Self {
            procedure: pick("tindakan", &record.procedure, PLACEHOLDER_PROCEDURE),
            anesthesia: pick("anestesi", &record.anesthesia, DEFAULT_ANESTHESIA),
            time: pick("jam_operasi", &record.procedure_time, DEFAULT_OPERATION_TIME),
            time_zone: pick("zona_waktu", &record.time_zone, DEFAULT_TIME_ZONE_LABEL),
            date,
        }
    }

    /// `HH.MM` that many minutes before the operation, or the placeholder when the time is
    /// unparseable.
    pub fn time_before(&self, minutes: u32) -> String {
        parse_clock_time(&self.time)
            .map(|t| format_clock_time(subtract_minutes(t, minutes)))
            .unwrap_or_else(|| PLACEHOLDER_TIME.to_string())
    }

    /// Closing plan line naming procedure, anaesthesia, date, time and place.
    pub fn operative_line(&self, facility: &str) -> String {
        format!(
            "Pro {} dalam {} pada hari {}, {} Pukul {} {} di {facility}",
            self.procedure,
            self.anesthesia,
            day_name(self.date),
            format_date(self.date),
            self.time,
            self.time_zone
        )
    }
}

/// IV fluid order. The drop rate comes from the answer, else from weight via the 4-2-1 rule.
fn iv_fluid_line(answers: &AnswerSet, weight_kg: Option<f64>) -> String {
    let fluid = answers.text_or("ivfd_cairan", DEFAULT_IV_FLUID);
    let drop_factor = answers.int(DROP_FACTOR_KEY, MACRO_DRIP_FACTOR);
    let mut rate = answers.int(DROP_RATE_KEY, 0);
    if rate <= 0 {
        if let Some(weight) = weight_kg {
            rate = drops_per_minute(maintenance_fluid_rate(weight), drop_factor);
            tracing::debug!(weight, drop_factor, rate, "computed IV drop rate");
        }
    }
    let set_label = if drop_factor == MACRO_DRIP_FACTOR {
        "makrodrips"
    } else {
        "mikrodrips"
    };
    if rate > 0 {
        format!("IVFD {fluid} {rate} tpm ({set_label})")
    } else {
        format!("IVFD {fluid} {PLACEHOLDER_DROP_RATE} ({set_label})")
    }
}

fn antibiotic_line(answers: &AnswerSet, time: &str, zone: &str) -> String {
    let drug = [answers.text("ab_nama", ""), answers.text("ab_dosis", "")]
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let drug = if drug.is_empty() {
        PLACEHOLDER_ANTIBIOTIC.to_string()
    } else {
        drug
    };
    let skin_test = if answers.flag("ab_skin_test", true) {
        " (skin test terlebih dahulu)"
    } else {
        ""
    };
    format!(
        "Pasien rencana diberikan antibiotik profilaksis {drug}, 1 jam sebelum \
         operasi{skin_test} pada Pukul {time} {zone}"
    )
}

/// Pre-operative plan lines, ending with the operative line.
pub fn preop_plan(
    answers: &AnswerSet,
    weight_kg: Option<f64>,
    operation: &OperationDetails,
    facility: &str,
) -> Vec<String> {
    let zone = &operation.time_zone;
    let fasting_from = operation.time_before(FASTING_OFFSET_MINUTES);
    let antibiotic_at = operation.time_before(ANTIBIOTIC_OFFSET_MINUTES);
    tracing::debug!(
        time = %operation.time,
        fasting_from = %fasting_from,
        antibiotic_at = %antibiotic_at,
        "pre-operative schedule"
    );

    let mut plan = vec!["Acc TS Anestesi".to_string()];
    if answers.flag("ivfd_on", true) {
        plan.push(iv_fluid_line(answers, weight_kg));
    }
    if answers.flag("puasa_on", true) {
        plan.push(format!(
            "Puasa 6 jam pre op atau sesuai instruksi dari TS. Anestesi yaitu mulai Pukul \
             {fasting_from} {zone}"
        ));
    }
    if answers.flag("sikat_gigi", true) {
        plan.push("Pasien menyikat gigi sebelum tidur dan sebelum ke kamar operasi".to_string());
    }
    if answers.flag("masker", true) {
        plan.push("Gunakan masker bedah saat ke kamar operasi".to_string());
    }
    if answers.flag("washlap", false) {
        plan.push("Washlap badan dan wajah pasien sebelum masuk ke kamar operasi".to_string());
    }
    if answers.flag("siap_prc", false) {
        plan.push("Siap darah 1 bag PRC".to_string());
    }
    if answers.flag("ab_on", true) {
        plan.push(antibiotic_line(answers, &antibiotic_at, zone));
    }
    plan.push(operation.operative_line(facility));
    plan
}

/// Initial-visit plan.
pub fn initial_visit_plan() -> Vec<String> {
    vec![
        "Pro pemeriksaan penunjang sesuai indikasi".to_string(),
        "Pro konsultasi TS Anestesi bila direncanakan GA".to_string(),
    ]
}

/// Post-operative plan.
pub fn post_op_plan() -> Vec<String> {
    vec![
        "Observasi kondisi umum & luka operasi".to_string(),
        "Terapi sesuai instruksi DPJP".to_string(),
    ]
}

/// `P:` block with one bulleted line per entry; blank entries are dropped.
pub(crate) fn render_plan(lines: &[String]) -> String {
    let body: Vec<String> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET}{line}"))
        .collect();
    format!("P:\n{}\n\n", body.join("\n"))
}
