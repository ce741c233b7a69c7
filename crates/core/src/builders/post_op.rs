//! Post-operative (POD0 / POD1) narrative builder.

use crate::answers::AnswerSet;
use crate::constants::BULLET;
use crate::stage::Stage;
use crate::text::join_clauses;

/// Day-0 complaints in the order they are named.
const POD0_COMPLAINTS: &[(&str, &str)] = &[
    ("dizzy", "pusing"),
    ("nausea", "mual"),
    ("vomit", "muntah"),
];

/// Subjective narrative for a post-operative stage.
pub fn subjective(stage: Stage, answers: &AnswerSet) -> String {
    let mut sentences = vec![pain_sentence(answers)];
    if stage == Stage::Pod0 {
        sentences.push(complaint_sentence(answers));
    }
    sentences.push(intake_sentence(answers).to_string());
    sentences.push(rest_sentence(stage, answers).to_string());
    sentences.join(" ")
}

fn pain_sentence(answers: &AnswerSet) -> String {
    if !answers.flag("pain_present", false) {
        return "Tidak ada keluhan nyeri pada daerah operasi.".to_string();
    }
    let location = answers.text_or("pain_location", "daerah operasi");
    let score = answers.int("pain_score", 0).clamp(0, 10);
    format!("Ada keluhan nyeri pada {location} dengan skala VAS {score}/10.")
}

fn complaint_sentence(answers: &AnswerSet) -> String {
    let present: Vec<&str> = POD0_COMPLAINTS
        .iter()
        .filter(|(key, _)| answers.flag(key, false))
        .map(|(_, name)| *name)
        .collect();
    if present.is_empty() {
        "Tidak ada keluhan pusing, mual, dan muntah.".to_string()
    } else {
        format!("Ada keluhan {}.", join_clauses(&present))
    }
}

fn intake_sentence(answers: &AnswerSet) -> &'static str {
    match answers.text_or("eat_drink", "baik").as_str() {
        "baik" => "Pasien makan dan minum dengan baik.",
        "kurang" => "Pasien makan dan minum namun masih kurang.",
        _ => "Pasien belum makan dan minum.",
    }
}

fn rest_sentence(stage: Stage, answers: &AnswerSet) -> &'static str {
    let adequate = answers.text_or("rest", "cukup") == "cukup";
    match (stage, adequate) {
        (Stage::Pod1, true) => "Istirahat malam dirasa cukup.",
        (Stage::Pod1, false) => "Istirahat malam dirasa kurang.",
        (_, true) => "Istirahat dirasa cukup.",
        (_, false) => "Istirahat dirasa kurang.",
    }
}

/// Extraoral and intraoral lines for the operation site.
pub fn examination(answers: &AnswerSet) -> (String, String) {
    let extraoral = if answers.text_or("swelling", "ada") == "tidak ada" {
        format!("{BULLET}Wajah simetris")
    } else {
        format!(
            "{BULLET}Wajah asimetris dengan oedem ar {}",
            answers.text_or("swelling_location", "daerah operasi")
        )
    };

    let suture = if answers.flag("suture_intact", true) {
        "intak"
    } else {
        "tidak intak"
    };
    let hyperemia = sign(answers.flag("hyperemia", true));
    let blood_clot = answers.text_or("blood_clot", "(-)");
    let bleeding = sign(answers.flag("active_bleeding", false));
    let intraoral = format!(
        "{BULLET}Jahitan {suture} ar daerah operasi dengan hiperemis {hyperemia}, blood clot \
         {blood_clot}, active bleeding {bleeding}"
    );
    (extraoral, intraoral)
}

fn sign(present: bool) -> &'static str {
    if present {
        "(+)"
    } else {
        "(-)"
    }
}
