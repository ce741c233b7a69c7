//! Answer set: the question-key to answer mapping filled in by the form.
//!
//! Values are loosely typed ([`AnswerValue`]) because they arrive from a UI collaborator or a
//! session file. Typed accessors fall back to the caller's default when a key is missing or
//! holds a value of another shape.

use crate::text::format_measure;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One answer. Deserialization tries the variants in order, so ISO dates (`2026-10-20`) become
/// [`AnswerValue::Date`] and every other string becomes [`AnswerValue::Text`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Int(i64),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl AnswerValue {
    /// Short shape name used in log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AnswerValue::Bool(_) => "bool",
            AnswerValue::Int(_) => "int",
            AnswerValue::Number(_) => "number",
            AnswerValue::Date(_) => "date",
            AnswerValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Int(i) => write!(f, "{i}"),
            AnswerValue::Number(n) => f.write_str(&format_measure(*n)),
            AnswerValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Int(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<NaiveDate> for AnswerValue {
    fn from(value: NaiveDate) -> Self {
        AnswerValue::Date(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// Mapping of question key to answer, scoped to one working session.
///
/// Answers are only ever set or overwritten; keys are never removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets `key` only when it has no answer yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Boolean answer, or `default` when missing or not a boolean.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(AnswerValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Trimmed textual answer. Numbers are rendered; booleans and missing keys give `default`.
    pub fn text(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(AnswerValue::Bool(_)) | None => default.trim().to_string(),
            Some(value) => value.to_string().trim().to_string(),
        }
    }

    /// Like [`AnswerSet::text`], but a blank answer also falls back to `default`.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        let value = self.text(key, default);
        if value.is_empty() {
            default.trim().to_string()
        } else {
            value
        }
    }

    /// Integer answer. Fractional numbers are truncated and numeric text is parsed.
    pub fn int(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(AnswerValue::Int(i)) => *i,
            Some(AnswerValue::Number(n)) if n.is_finite() => n.trunc() as i64,
            Some(AnswerValue::Text(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Date answer; ISO-formatted text is accepted too.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.values.get(key)? {
            AnswerValue::Date(d) => Some(*d),
            AnswerValue::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors_and_defaults() {
        let mut answers = AnswerSet::new();
        answers.set("ivfd_on", false);
        answers.set("pain_score", 4_i64);
        answers.set("durasi", "  3 hari ");

        assert!(!answers.flag("ivfd_on", true));
        assert!(answers.flag("puasa_on", true));
        assert_eq!(answers.int("pain_score", 0), 4);
        assert_eq!(answers.int("drip_factor", 20), 20);
        assert_eq!(answers.text("durasi", ""), "3 hari");
        assert_eq!(answers.text("menjalar_ke", "kepala"), "kepala");
    }

    #[test]
    fn test_mismatched_shapes_fall_back() {
        let mut answers = AnswerSet::new();
        answers.set("batuk", "ya");
        answers.set("laterality", true);
        assert!(!answers.flag("batuk", false));
        assert_eq!(answers.text("laterality", "kanan"), "kanan");
        assert_eq!(answers.int("laterality", 7), 7);
    }

    #[test]
    fn test_text_or_replaces_blank() {
        let mut answers = AnswerSet::new();
        answers.set("ivfd_cairan", "  ");
        assert_eq!(answers.text("ivfd_cairan", "RL"), "");
        assert_eq!(answers.text_or("ivfd_cairan", "RL"), "RL");
    }

    #[test]
    fn test_set_default_keeps_existing() {
        let mut answers = AnswerSet::new();
        answers.set("jam_operasi", "10.00");
        answers.set_default("jam_operasi", "08.00");
        answers.set_default("zona_waktu", "WITA");
        assert_eq!(answers.text("jam_operasi", ""), "10.00");
        assert_eq!(answers.text("zona_waktu", ""), "WITA");
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_numeric_and_text_coercions() {
        let mut answers = AnswerSet::new();
        answers.set("ivfd_tpm", 31.7);
        answers.set("drip_factor", " 60 ");
        answers.set("td", 120.0);
        assert_eq!(answers.int("ivfd_tpm", 0), 31);
        assert_eq!(answers.int("drip_factor", 20), 60);
        assert_eq!(answers.text("td", "-/-"), "120");
    }

    #[test]
    fn test_dates_from_value_or_text() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let mut answers = AnswerSet::new();
        answers.set("tanggal_operasi", day);
        answers.set("tanggal_laporan", "2026-10-19");
        answers.set("catatan", "besok");
        assert_eq!(answers.date("tanggal_operasi"), Some(day));
        assert_eq!(answers.date("tanggal_laporan"), day.pred_opt());
        assert_eq!(answers.date("catatan"), None);
        assert_eq!(answers.date("tidak_ada"), None);
    }

    #[test]
    fn test_untagged_deserialization() {
        let yaml = "a: true\nb: 3\nc: 2.5\nd: 2026-10-20\ne: '08.00'\nf: Rawat Inap\n";
        let answers: AnswerSet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(answers.get("a"), Some(&AnswerValue::Bool(true)));
        assert_eq!(answers.get("b"), Some(&AnswerValue::Int(3)));
        assert_eq!(answers.get("c"), Some(&AnswerValue::Number(2.5)));
        assert!(matches!(answers.get("d"), Some(AnswerValue::Date(_))));
        assert_eq!(answers.get("e"), Some(&AnswerValue::Text("08.00".into())));
        assert_eq!(answers.text("f", ""), "Rawat Inap");
    }

    #[test]
    fn test_display_renders_iso_dates() {
        let value = AnswerValue::from(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!(value.to_string(), "2026-01-02");
        assert_eq!(value.type_name(), "date");
    }
}
