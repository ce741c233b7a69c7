//! Encounter stages.

use crate::NoteError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four reporting stages, named as in the question schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Initial outpatient visit.
    Awal,
    /// Day before a planned operation.
    PreOp,
    /// Day of operation, after surgery.
    #[serde(rename = "POD0")]
    Pod0,
    /// First post-operative day.
    #[serde(rename = "POD1")]
    Pod1,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Awal, Stage::PreOp, Stage::Pod0, Stage::Pod1];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Awal => "Awal",
            Stage::PreOp => "PreOp",
            Stage::Pod0 => "POD0",
            Stage::Pod1 => "POD1",
        }
    }

    /// Phrase naming the patient group in the report header.
    pub fn header_phrase(self) -> &'static str {
        match self {
            Stage::Awal => "Pasien Rawat Jalan",
            Stage::PreOp => "Pasien Rencana Operasi",
            Stage::Pod0 | Stage::Pod1 => "Pasien Rawat Inap",
        }
    }

    /// Care setting written in the identity line when none is known.
    pub fn default_care_setting(self) -> &'static str {
        match self {
            Stage::Awal => "Rawat Jalan",
            _ => "Rawat Inap",
        }
    }

    pub fn is_post_op(self) -> bool {
        matches!(self, Stage::Pod0 | Stage::Pod1)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NoteError::UnknownStage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stage_names() {
        assert_eq!("Awal".parse::<Stage>().unwrap(), Stage::Awal);
        assert_eq!("preop".parse::<Stage>().unwrap(), Stage::PreOp);
        assert_eq!(" POD0 ".parse::<Stage>().unwrap(), Stage::Pod0);
        assert_eq!("pod1".parse::<Stage>().unwrap(), Stage::Pod1);
        assert!(matches!(
            "POD2".parse::<Stage>(),
            Err(NoteError::UnknownStage(s)) if s == "POD2"
        ));
    }

    #[test]
    fn test_stage_wording() {
        assert_eq!(Stage::PreOp.header_phrase(), "Pasien Rencana Operasi");
        assert_eq!(Stage::Pod1.header_phrase(), "Pasien Rawat Inap");
        assert_eq!(Stage::Awal.default_care_setting(), "Rawat Jalan");
        assert_eq!(Stage::Pod0.default_care_setting(), "Rawat Inap");
        assert!(Stage::Pod0.is_post_op());
        assert!(!Stage::PreOp.is_post_op());
    }

    #[test]
    fn test_stage_serde_names() {
        assert_eq!(serde_json::to_string(&Stage::Pod0).unwrap(), "\"POD0\"");
        let stage: Stage = serde_json::from_str("\"PreOp\"").unwrap();
        assert_eq!(stage, Stage::PreOp);
    }
}
