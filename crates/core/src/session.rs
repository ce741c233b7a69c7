//! Per-session working state.
//!
//! A [`SessionContext`] owns the structured record and the answer set for one clinician's
//! session. The engine itself keeps no state between calls; every operation takes the
//! context explicitly.

use crate::answers::AnswerSet;
use crate::extraction::extract_all;
use crate::record::StructuredRecord;
use crate::{NoteError, NoteResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Record and answers being edited in one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionContext {
    pub record: StructuredRecord,
    pub answers: AnswerSet,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a session from YAML.
    ///
    /// Clock times must be quoted (`jam_operasi: "08.00"`); an unquoted `08.00` is read as a
    /// number.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::SessionDeserialization` if the YAML does not describe a session.
    pub fn from_yaml_str(input: &str) -> NoteResult<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(input).map_err(NoteError::SessionDeserialization)
    }

    /// Reads a YAML session file.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::SessionRead` if the file cannot be read, or
    /// `NoteError::SessionDeserialization` if its content is not a session.
    pub fn load(path: &Path) -> NoteResult<Self> {
        let content = fs::read_to_string(path).map_err(NoteError::SessionRead)?;
        Self::from_yaml_str(&content)
    }

    /// Merges what the pastes yield into the current record, pasted values winning, and
    /// copies the scheduling fields into the answers the pre-operative plan reads.
    pub fn autofill(&mut self, note: Option<&str>, memo: Option<&str>) {
        self.record.merge_from(&extract_all(note, memo));
        let copies = [
            ("tindakan", &self.record.procedure),
            ("anestesi", &self.record.anesthesia),
            ("jam_operasi", &self.record.procedure_time),
            ("zona_waktu", &self.record.time_zone),
        ];
        for (key, value) in copies {
            let value = value.trim();
            if !value.is_empty() {
                self.answers.set(key, value);
            }
        }
        tracing::debug!(
            answers = self.answers.len(),
            empty_record = self.record.is_empty(),
            "session auto-filled from pasted text"
        );
    }

    /// Applies direct field edits; every non-empty field of `overrides` wins.
    pub fn apply_overrides(&mut self, overrides: &StructuredRecord) {
        self.record.merge_from(overrides);
    }

    /// Record as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Serialization` if the record cannot be serialized.
    pub fn record_json(&self) -> NoteResult<String> {
        serde_json::to_string_pretty(&self.record).map_err(NoteError::Serialization)
    }
}
