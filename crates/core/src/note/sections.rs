//! Fixed sections of the report: header, identity line, vital signs, local status and footer.

use crate::answers::AnswerSet;
use crate::constants::DEFAULT_PAYER;
use crate::record::StructuredRecord;
use crate::stage::Stage;
use crate::text::{day_name, format_date, format_measure, join_names};
use chrono::NaiveDate;

/// Written for any identity or staff field that is blank.
const MISSING: &str = "-";

/// Greeting plus the stage-specific reporting line.
pub(crate) fn header(stage: Stage, facility: &str, report_date: NaiveDate) -> String {
    format!(
        "Assalamualaikum dokter.\nMaaf mengganggu, izin melaporkan {} {facility}, {} ({})",
        stage.header_phrase(),
        day_name(report_date),
        format_date(report_date)
    )
}

fn or_missing(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        MISSING
    } else {
        value
    }
}

/// `name / sex / age / payer / care setting[ / room] / facility / RM n`.
pub(crate) fn identity_line(record: &StructuredRecord, stage: Stage) -> String {
    let payer = match record.payer.trim() {
        "" => DEFAULT_PAYER,
        payer => payer,
    };
    let care_setting = match record.care_setting.trim() {
        "" => stage.default_care_setting(),
        setting => setting,
    };
    let room = match record.room.trim() {
        "" => String::new(),
        room => format!(" / {room}"),
    };
    let record_number = match record.medical_record_number.trim() {
        "" => format!("RM {MISSING}"),
        number => format!("RM {number}"),
    };
    format!(
        "{} / {} / {} / {payer} / {care_setting}{room} / {} / {record_number}",
        or_missing(&record.display_name()),
        or_missing(&record.sex),
        or_missing(&record.age),
        record.facility(),
    )
}

/// `Status Generalis` lines. Weight and height appear only when known.
pub(crate) fn vital_signs(answers: &AnswerSet, record: &StructuredRecord) -> String {
    let mut lines = vec![
        format!("KU : {}", answers.text_or("ku", "Baik/Compos Mentis")),
        format!("TD : {} mmHg", answers.text_or("td", "-/-")),
        format!("N   : {} x/menit", answers.text_or("n", "-")),
        format!("P   : {} x/menit", answers.text_or("p", "-")),
        format!("S   : {} °C", answers.text_or("s", "36.7")),
        format!("SpO2: {}% (free air)", answers.text_or("spo2", "99")),
    ];
    if let Some(weight) = record.known_weight() {
        lines.push(format!("BB : {} kg", format_measure(weight)));
    }
    if let Some(height) = record.known_height() {
        lines.push(format!("TB : {} cm", format_measure(height)));
    }
    lines.join("\n")
}

/// Objective block with general and local status.
pub(crate) fn examination_block(
    vitals: &str,
    extraoral: &[String],
    intraoral: &[String],
) -> String {
    format!(
        "O:\nStatus Generalis:\n{vitals}\n\nStatus Lokalis:\nE.O:\n{}\n\nI.O:\n{}\n\n",
        lines_or_missing(extraoral),
        lines_or_missing(intraoral)
    )
}

fn lines_or_missing(lines: &[String]) -> String {
    if lines.is_empty() {
        MISSING.to_string()
    } else {
        lines.join("\n")
    }
}

/// Courtesy close with resident and attending names.
pub(crate) fn footer(record: &StructuredRecord) -> String {
    let residents = join_names(&record.residents);
    format!(
        "Mohon instruksi selanjutnya dokter.\nTerima kasih.\n\nResiden: {}\n\nDPJP: {}\n",
        or_missing(&residents),
        or_missing(&record.attending)
    )
}
