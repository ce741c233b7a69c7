//! Line-based answer prompts.

use chrono::NaiveDate;
use soap_core::form::AnswerSource;
use soap_core::AnswerValue;
use soap_schema::{Question, QuestionKind};
use std::io::{BufRead, Write};

/// Asks each question on `output` and reads one reply line from `input`.
///
/// An empty reply (or end of input) keeps the current value.
pub struct PromptAnswers<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptAnswers<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_reply(&mut self, question: &Question, current: &AnswerValue) -> Option<String> {
        let options = match &question.kind {
            QuestionKind::Select { options, .. } => format!(" ({})", options.join(" / ")),
            _ => String::new(),
        };
        write!(self.output, "{}{options} [{current}]: ", question.label).ok()?;
        self.output.flush().ok()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptAnswers<R, W> {
    fn provide(&mut self, question: &Question, current: &AnswerValue) -> AnswerValue {
        match self.read_reply(question, current) {
            Some(reply) if !reply.is_empty() => parse_reply(&question.kind, &reply),
            _ => current.clone(),
        }
    }
}

/// Interprets a typed reply for a question type. Replies that fit no type come back as text,
/// which the form rejects for non-text questions.
pub fn parse_reply(kind: &QuestionKind, reply: &str) -> AnswerValue {
    let reply = reply.trim();
    match kind {
        QuestionKind::Bool { .. } => match reply.to_lowercase().as_str() {
            "y" | "ya" | "yes" | "true" | "1" | "+" => AnswerValue::Bool(true),
            "n" | "t" | "tidak" | "no" | "false" | "0" | "-" => AnswerValue::Bool(false),
            _ => AnswerValue::Text(reply.to_string()),
        },
        QuestionKind::Int { .. } => reply
            .parse::<i64>()
            .map(AnswerValue::Int)
            .unwrap_or_else(|_| AnswerValue::Text(reply.to_string())),
        QuestionKind::Select { options, .. } => reply
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .map_or_else(
                || AnswerValue::Text(reply.to_string()),
                |option| AnswerValue::Text(option.clone()),
            ),
        QuestionKind::Date { .. } => NaiveDate::parse_from_str(reply, "%d/%m/%Y")
            .map(AnswerValue::Date)
            .unwrap_or_else(|_| AnswerValue::Text(reply.to_string())),
        QuestionKind::Text { .. } => AnswerValue::Text(reply.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(json: &str) -> Question {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_bool_replies() {
        let kind = QuestionKind::Bool { default: false };
        assert_eq!(parse_reply(&kind, "ya"), AnswerValue::Bool(true));
        assert_eq!(parse_reply(&kind, "Tidak"), AnswerValue::Bool(false));
        assert_eq!(parse_reply(&kind, "mungkin"), AnswerValue::Text("mungkin".into()));
    }

    #[test]
    fn test_parse_select_by_number_or_text() {
        let kind = QuestionKind::Select {
            options: vec!["baik".into(), "kurang".into(), "belum".into()],
            default: None,
        };
        assert_eq!(parse_reply(&kind, "2"), AnswerValue::Text("kurang".into()));
        assert_eq!(parse_reply(&kind, "belum"), AnswerValue::Text("belum".into()));
        assert_eq!(parse_reply(&kind, "9"), AnswerValue::Text("9".into()));
    }

    #[test]
    fn test_parse_date_and_int() {
        let date = QuestionKind::Date {
            default: soap_schema::DateDefault::Today,
        };
        assert_eq!(
            parse_reply(&date, "20/10/2026"),
            AnswerValue::Date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
        );
        assert_eq!(
            parse_reply(&date, "2026-10-20"),
            AnswerValue::Text("2026-10-20".into())
        );
        let int = QuestionKind::Int {
            min: 0,
            max: 10,
            default: 0,
        };
        assert_eq!(parse_reply(&int, "7"), AnswerValue::Int(7));
    }

    #[test]
    fn test_prompt_reads_lines_and_keeps_current_on_blank() {
        let q = question(r#"{"key": "td", "label": "TD", "type": "text"}"#);
        let input = b"120/80\n\n".as_slice();
        let mut output = Vec::new();
        let mut prompts = PromptAnswers::new(input, &mut output);
        let current = AnswerValue::Text("-/-".into());
        assert_eq!(prompts.provide(&q, &current), AnswerValue::Text("120/80".into()));
        assert_eq!(prompts.provide(&q, &current), current);
        assert_eq!(prompts.provide(&q, &current), current);
        drop(prompts);
        assert_eq!(String::from_utf8(output).unwrap(), "TD [-/-]: TD [-/-]: TD [-/-]: ");
    }
}
