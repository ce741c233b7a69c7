//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Note generation never reads process-wide environment variables;
//! the binary resolves them (and CLI overrides) into a [`CoreConfig`] before any work starts.

use crate::constants::{DEFAULT_SCHEMA_PATH, LOCAL_TIME_ZONE, LOCAL_UTC_OFFSET_MINUTES};
use crate::{NoteError, NoteResult};
use chrono::{FixedOffset, NaiveDate, Utc};
use std::path::{Path, PathBuf};

/// Largest UTC offset any real time zone uses (UTC+14 / UTC-12 fit inside this).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    schema_path: PathBuf,
    time_zone_label: String,
    utc_offset: FixedOffset,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidInput` if the schema path or time zone label is blank, or the
    /// offset lies outside ±14 hours.
    pub fn new(
        schema_path: PathBuf,
        time_zone_label: String,
        utc_offset_minutes: i32,
    ) -> NoteResult<Self> {
        if schema_path.as_os_str().is_empty() {
            return Err(NoteError::InvalidInput("schema path cannot be empty".into()));
        }
        if time_zone_label.trim().is_empty() {
            return Err(NoteError::InvalidInput(
                "time zone label cannot be empty".into(),
            ));
        }
        if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(NoteError::InvalidInput(format!(
                "UTC offset of {utc_offset_minutes} minutes is out of range"
            )));
        }
        let utc_offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
            NoteError::InvalidInput(format!("invalid UTC offset {utc_offset_minutes}"))
        })?;

        Ok(Self {
            schema_path,
            time_zone_label,
            utc_offset,
        })
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn time_zone_label(&self) -> &str {
        &self.time_zone_label
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Current calendar date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            time_zone_label: LOCAL_TIME_ZONE.to_string(),
            utc_offset: FixedOffset::east_opt(LOCAL_UTC_OFFSET_MINUTES * 60)
                .expect("clinic UTC offset is valid"),
        }
    }
}

/// Parse the UTC offset from an optional string value (e.g. an environment variable).
///
/// If `value` is `None` or empty/whitespace, returns the clinic's fixed offset.
pub fn utc_offset_from_env_value(value: Option<String>) -> NoteResult<i32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    match value {
        None => Ok(LOCAL_UTC_OFFSET_MINUTES),
        Some(v) => v.parse::<i32>().map_err(|_| {
            NoteError::InvalidInput(format!("UTC offset must be whole minutes, got '{v}'"))
        }),
    }
}
