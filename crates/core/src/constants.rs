//! Constants used throughout the SuperSOAP core crate.
//!
//! Fixed institution values, placeholder literals and clinical offsets live here so the
//! extractor, builders and assembler agree on them.

/// Facility name used when the pasted text names none.
pub const DEFAULT_FACILITY: &str = "RSGMP UNHAS";

/// Payer category used in the identity line when none was extracted or entered.
pub const DEFAULT_PAYER: &str = "BPJS";

/// Default schema file name, resolved relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "supersoap_schema.yaml";

/// Time zone label of the clinic; all "today"/"tomorrow" defaults are taken in this zone.
pub const LOCAL_TIME_ZONE: &str = "Asia/Makassar";

/// UTC offset of [`LOCAL_TIME_ZONE`] in minutes (UTC+8, no daylight saving).
pub const LOCAL_UTC_OFFSET_MINUTES: i32 = 8 * 60;

/// Bullet prefix used for plan and examination lines (bullet, word joiners, two spaces).
pub const BULLET: &str = "\u{2022}\u{2060}  \u{2060}";

/// Minutes before the operation that fasting starts.
pub const FASTING_OFFSET_MINUTES: u32 = 6 * 60;

/// Minutes before the operation that prophylactic antibiotics are given.
pub const ANTIBIOTIC_OFFSET_MINUTES: u32 = 60;

/// Drop factor of a macro-drip administration set (gtt/mL).
pub const MACRO_DRIP_FACTOR: i64 = 20;

pub const DEFAULT_OPERATION_TIME: &str = "08.00";
pub const DEFAULT_TIME_ZONE_LABEL: &str = "WITA";
pub const DEFAULT_ANESTHESIA: &str = "general anestesi";
pub const DEFAULT_IV_FLUID: &str = "RL";

/// Written in place of a computed time when the operation time cannot be parsed.
pub const PLACEHOLDER_TIME: &str = "(isi)";
pub const PLACEHOLDER_PROCEDURE: &str = "(isi tindakan)";
pub const PLACEHOLDER_ANTIBIOTIC: &str = "(isi antibiotik)";
pub const PLACEHOLDER_DROP_RATE: &str = "(isi tpm)";
pub const PLACEHOLDER_DIAGNOSIS: &str = "(Isi diagnosis)";
pub const PLACEHOLDER_OBJECTIVE: &str = "(Isi O dari SOAP poli / pemeriksaan)";
pub const PLACEHOLDER_PREOP_SUBJECTIVE: &str =
    "Pasien rencana tindakan dalam general anestesi. (ringkas keluhan di sini).";

/// Heading written in front of a captured supporting-examination block.
pub const SUPPORTING_EXAM_HEADING: &str = "Pemeriksaan penunjang :";
