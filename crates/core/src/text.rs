//! Text utilities: localized dates, clock arithmetic, clinical calculators and list joining.
//!
//! Everything here is a pure function.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use soap_types::ClockTime;

/// Weekday names in the clinic's locale, indexed by the English name.
const DAY_NAMES: &[(&str, &str)] = &[
    ("Monday", "Senin"),
    ("Tuesday", "Selasa"),
    ("Wednesday", "Rabu"),
    ("Thursday", "Kamis"),
    ("Friday", "Jumat"),
    ("Saturday", "Sabtu"),
    ("Sunday", "Minggu"),
];

/// Localized weekday name; falls back to the English name for anything not in the table.
pub fn day_name(date: NaiveDate) -> String {
    let english = weekday_english(date.weekday());
    DAY_NAMES
        .iter()
        .find(|(en, _)| *en == english)
        .map(|(_, local)| (*local).to_string())
        .unwrap_or_else(|| english.to_string())
}

fn weekday_english(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// The calendar day after `date`; `date` itself at the end of the representable range.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}

/// Parses `H:MM` or `H.MM`; `None` when malformed or out of range.
pub fn parse_clock_time(text: &str) -> Option<ClockTime> {
    ClockTime::parse(text)
}

/// `HH.MM` with a period separator.
pub fn format_clock_time(time: ClockTime) -> String {
    time.to_string()
}

/// The clock time `minutes` earlier, wrapping modulo 24 hours.
pub fn subtract_minutes(time: ClockTime, minutes: u32) -> ClockTime {
    time.minus_minutes(minutes)
}

/// Maintenance IV fluid requirement in mL/hour by the 4-2-1 rule.
///
/// Negative weights are treated as zero.
pub fn maintenance_fluid_rate(weight_kg: f64) -> f64 {
    let w = weight_kg.max(0.0);
    if w <= 10.0 {
        4.0 * w
    } else if w <= 20.0 {
        40.0 + 2.0 * (w - 10.0)
    } else {
        60.0 + (w - 20.0)
    }
}

/// Drip rate in drops/minute for an hourly volume and an administration-set drop factor.
///
/// Rounds to nearest with halves rounded up (`1.5 -> 2`, `2.5 -> 3`).
pub fn drops_per_minute(ml_per_hour: f64, drop_factor: i64) -> i64 {
    let exact = ml_per_hour.max(0.0) * drop_factor.max(0) as f64 / 60.0;
    (exact + 0.5).floor() as i64
}

/// Normalizes a free-typed list of names: newlines count as commas, blanks are dropped,
/// and the result is joined with `", "`.
pub fn join_names(text: &str) -> String {
    text.replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins items as prose: `a`, `a dan b`, `a, b, dan c`.
pub fn join_clauses<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [first, second] => format!("{} dan {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, dan {}", last.as_ref())
        }
    }
}

/// Renders a measurement without trailing zeros (`55.0 -> "55"`, `55.5 -> "55.5"`).
pub fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
