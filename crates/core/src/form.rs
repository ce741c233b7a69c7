//! Form rendering contract between the core and an answer-collecting collaborator.
//!
//! For each question of a case/stage the core decides visibility, works out the current value
//! (existing answer or schema default), asks an [`AnswerSource`] for a value of the declared
//! type and writes it back into the [`AnswerSet`].

use crate::answers::{AnswerSet, AnswerValue};
use crate::constants::MACRO_DRIP_FACTOR;
use crate::stage::Stage;
use crate::text::{drops_per_minute, maintenance_fluid_rate, next_day};
use chrono::NaiveDate;
use soap_schema::{ConditionValue, DateDefault, Question, QuestionKind, ShowRule};

/// Answer key of the IV drop-rate question that gets a weight-based suggestion.
pub const DROP_RATE_KEY: &str = "ivfd_tpm";
/// Answer key of the administration-set drop factor.
pub const DROP_FACTOR_KEY: &str = "drip_factor";
pub const REPORT_DATE_KEY: &str = "tanggal_laporan";
pub const OPERATION_DATE_KEY: &str = "tanggal_operasi";

/// Supplies a value for one question.
///
/// `current` is the value the form would show (existing answer or default). Returning it
/// unchanged accepts it.
pub trait AnswerSource {
    fn provide(&mut self, question: &Question, current: &AnswerValue) -> AnswerValue;
}

/// Source that accepts every current value.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptCurrent;

impl AnswerSource for AcceptCurrent {
    fn provide(&mut self, _question: &Question, current: &AnswerValue) -> AnswerValue {
        current.clone()
    }
}

/// Inputs the form needs besides the answers themselves.
#[derive(Clone, Copy, Debug)]
pub struct FormContext {
    pub today: NaiveDate,
    /// Known body weight, used for the drop-rate suggestion.
    pub weight_kg: Option<f64>,
}

/// Whether `question` is visible given the current answers. No condition means visible.
pub fn should_show(question: &Question, answers: &AnswerSet) -> bool {
    let Some(cond) = &question.show_if else {
        return true;
    };
    let answer = answers.get(&cond.key);
    match &cond.rule {
        ShowRule::Equals(expected) => condition_matches(answer, expected),
        ShowRule::In(candidates) => candidates.iter().any(|c| condition_matches(answer, c)),
    }
}

fn condition_matches(answer: Option<&AnswerValue>, expected: &ConditionValue) -> bool {
    match (answer, expected) {
        (Some(AnswerValue::Bool(a)), ConditionValue::Bool(b)) => a == b,
        (Some(AnswerValue::Int(a)), ConditionValue::Int(b)) => a == b,
        (Some(AnswerValue::Number(a)), ConditionValue::Int(b)) => *a == *b as f64,
        (Some(AnswerValue::Text(a)), ConditionValue::Text(b)) => a == b,
        (Some(AnswerValue::Date(a)), ConditionValue::Text(b)) => {
            let b = b.trim();
            NaiveDate::parse_from_str(b, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(b, "%d/%m/%Y"))
                .is_ok_and(|b| *a == b)
        }
        _ => false,
    }
}

/// Stage-specific answers present before any question is asked.
pub fn seed_stage_defaults(stage: Stage, answers: &mut AnswerSet, today: NaiveDate) {
    if stage == Stage::PreOp {
        answers.set_default(REPORT_DATE_KEY, today);
        answers.set_default(OPERATION_DATE_KEY, next_day(today));
    }
}

/// Value the form shows for `question`: the existing answer when it fits the question,
/// otherwise the schema default.
pub fn current_value(question: &Question, answers: &AnswerSet, today: NaiveDate) -> AnswerValue {
    let existing = answers.get(&question.key);
    let fitted = existing.and_then(|value| fit_to_kind(&question.kind, value.clone()));
    fitted.unwrap_or_else(|| default_value(&question.kind, today))
}

fn default_value(kind: &QuestionKind, today: NaiveDate) -> AnswerValue {
    match kind {
        QuestionKind::Bool { default } => AnswerValue::Bool(*default),
        QuestionKind::Text { default } => AnswerValue::Text(default.clone()),
        QuestionKind::Int { min, max, default } => AnswerValue::Int(clamp(*default, *min, *max)),
        QuestionKind::Select { options, default } => {
            let chosen = default
                .as_ref()
                .filter(|d| options.contains(d))
                .or_else(|| options.first());
            AnswerValue::Text(chosen.cloned().unwrap_or_default())
        }
        QuestionKind::Date { default } => AnswerValue::Date(match default {
            DateDefault::Today => today,
            DateDefault::Tomorrow => next_day(today),
        }),
    }
}

/// Normalizes `value` to the question's type, or `None` when it cannot be.
///
/// Integers are clamped into range and integral numbers count as integers. Numbers given for a
/// text question are rendered, ISO text counts as a date, and a select answer must be one of
/// the options.
fn fit_to_kind(kind: &QuestionKind, value: AnswerValue) -> Option<AnswerValue> {
    match (kind, value) {
        (QuestionKind::Bool { .. }, v @ AnswerValue::Bool(_)) => Some(v),
        (QuestionKind::Text { .. }, v @ AnswerValue::Text(_)) => Some(v),
        (QuestionKind::Text { .. }, v @ (AnswerValue::Int(_) | AnswerValue::Number(_))) => {
            Some(AnswerValue::Text(v.to_string()))
        }
        (QuestionKind::Int { min, max, .. }, AnswerValue::Int(i)) => {
            Some(AnswerValue::Int(clamp(i, *min, *max)))
        }
        (QuestionKind::Int { min, max, .. }, AnswerValue::Number(n))
            if n.is_finite() && n.fract() == 0.0 =>
        {
            Some(AnswerValue::Int(clamp(n as i64, *min, *max)))
        }
        (QuestionKind::Select { options, .. }, AnswerValue::Text(s)) => {
            options.contains(&s).then_some(AnswerValue::Text(s))
        }
        (QuestionKind::Date { .. }, v @ AnswerValue::Date(_)) => Some(v),
        (QuestionKind::Date { .. }, AnswerValue::Text(s)) => {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .ok()
                .map(AnswerValue::Date)
        }
        _ => None,
    }
}

fn clamp(value: i64, min: i64, max: i64) -> i64 {
    if min > max {
        return value;
    }
    value.clamp(min, max)
}

/// Pre-fills the drop rate from body weight when it is still unset or zero.
fn suggest_drop_rate(answers: &mut AnswerSet, weight_kg: Option<f64>) {
    let Some(weight) = weight_kg.filter(|w| w.is_finite() && *w > 0.0) else {
        return;
    };
    if answers.int(DROP_RATE_KEY, 0) != 0 {
        return;
    }
    let drop_factor = answers.int(DROP_FACTOR_KEY, MACRO_DRIP_FACTOR);
    let rate = drops_per_minute(maintenance_fluid_rate(weight), drop_factor);
    tracing::debug!(weight, drop_factor, rate, "suggested IV drop rate");
    answers.set(DROP_RATE_KEY, rate);
}

/// Walks `questions` in order and fills `answers` from `source`.
///
/// Hidden questions are skipped and keep whatever answer they had. A provided value of the
/// wrong type is ignored with a warning and the current value is stored instead.
pub fn fill_answers(
    questions: &[Question],
    answers: &mut AnswerSet,
    ctx: FormContext,
    source: &mut dyn AnswerSource,
) {
    for question in questions {
        if question.key == DROP_RATE_KEY {
            suggest_drop_rate(answers, ctx.weight_kg);
        }
        if !should_show(question, answers) {
            continue;
        }

        let current = current_value(question, answers, ctx.today);
        let provided = source.provide(question, &current);
        let value = match fit_to_kind(&question.kind, provided.clone()) {
            Some(value) => value,
            None => {
                tracing::warn!(
                    key = %question.key,
                    expected = question.kind.type_name(),
                    got = provided.type_name(),
                    "ignoring answer of the wrong type"
                );
                current
            }
        };
        answers.set(question.key.clone(), value);
    }
}
