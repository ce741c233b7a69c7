//! Compiled patterns for the pasted-text extractors.

use regex::Regex;
use std::sync::LazyLock;

/// First line starting with one of the honorifics `Tn.`, `Ny.`, `Nn.`, `An.`.
pub(crate) static IDENTITY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*(?:Tn\.|Ny\.|Nn\.|An\.)[^\n]+").unwrap());

pub(crate) static HONORIFIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Tn\.|Ny\.|Nn\.|An\.)\s*").unwrap());

pub(crate) static MEDICAL_RECORD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bRM\.?\s*([0-9][0-9.]*)").unwrap());

pub(crate) static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bBB\s*[:=]\s*([0-9]+(?:\.[0-9]+)?)\s*kg\b").unwrap()
});

pub(crate) static HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bTB\s*[:=]\s*([0-9]+(?:\.[0-9]+)?)\s*cm\b").unwrap()
});

/// A line opening the plan section.
pub(crate) static PLAN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*P[ \t]*[:：]").unwrap());

pub(crate) static PRO_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPro\b").unwrap());

/// Procedure up to `dalam` / `(` / `.` / end, with the anaesthesia after `dalam`.
pub(crate) static PRO_PROCEDURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPro\b\s*(.+?)(?:\s+dalam\s+([^.]+?))?(?:\(|$|\.)").unwrap()
});

pub(crate) static TRAILING_REMARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)\s*$").unwrap());

pub(crate) static ATTENDING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bDPJP[ \t]*:[ \t]*([^\n]+)").unwrap());

pub(crate) static RESIDENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bResiden[ \t]*:[ \t]*([^\n]+)").unwrap());

/// Resident block in a memo: everything after `Residen:` up to the next `DPJP:` line.
pub(crate) static RESIDENT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bResiden[ \t]*:[ \t]*(.*?)(?:\n[ \t]*DPJP[ \t]*:|\z)").unwrap()
});

pub(crate) static SUBJECTIVE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bS\s*[:：]\s*").unwrap());
pub(crate) static OBJECTIVE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bO\s*[:：]\s*").unwrap());
pub(crate) static ASSESSMENT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bA\s*[:：]\s*").unwrap());

pub(crate) static OBJECTIVE_LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\A|\n)\s*O\s*[:：]").unwrap());
pub(crate) static ASSESSMENT_LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\A|\n)\s*A\s*[:：]").unwrap());
pub(crate) static PLAN_LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\A|\n)\s*P\s*[:：]").unwrap());

/// Supporting-examination span: from the heading to the next `A:` line (or end of text).
/// Only spaces and tabs after the heading colon are consumed, so the block's own first-line
/// indentation survives.
pub(crate) static SUPPORTING_EXAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)Pemeriksaan[ \t]+penunjang[ \t]*:[ \t]*(.*?)(?:\n[ \t]*A[ \t]*(?:[:：]|\n)|\z)",
    )
    .unwrap()
});

/// Single `P:` line of a memo.
pub(crate) static MEMO_PLAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*P[ \t]*[:：][ \t]*([^\n]+)").unwrap());

pub(crate) static LEADING_PRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\W*\bPro\b\s*").unwrap());

pub(crate) static TRAILING_DALAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+dalam\s+(.*)$").unwrap());

/// `Pukul : *08.00 WITA*` with optional asterisk decoration.
pub(crate) static SCHEDULED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:Pukul)[ \t]*:[ \t]*\**[ \t]*([0-9]{1,2}[.:][0-9]{2})[ \t]*((?i:[a-z]{3,4}))\b\**")
        .unwrap()
});
