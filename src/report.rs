//! Purpose: Render failures for stderr and turn clap parse errors into usage errors.
//! Exports: `Report`, `usage_error`.
//! Role: Single place that decides how an `Error` looks to the caller.
//! Invariants: JSON form is one compact line under an `error` key; fields are additive-only.
//! Invariants: ANSI escapes appear in text form only when color is enabled.
use std::error::Error as StdError;

use jsonutils::{Error, ErrorKind};
use serde_json::{Map, Value};

/// Labelled detail lines shown after the message, in display order.
const DETAIL_LABELS: [&str; 3] = ["hint", "input", "caused by"];

pub(crate) struct Report<'a> {
    err: &'a Error,
    causes: Vec<String>,
}

impl<'a> Report<'a> {
    pub(crate) fn new(err: &'a Error) -> Self {
        let causes = std::iter::successors(err.source(), |&cause| cause.source())
            .map(ToString::to_string)
            .collect();
        Self { err, causes }
    }

    fn message(&self) -> &str {
        self.err
            .message()
            .unwrap_or_else(|| self.err.kind().summary())
    }

    fn detail(&self, label: &str) -> Option<&str> {
        match label {
            "hint" => self.err.hint(),
            "input" => self.err.input(),
            "caused by" => self.causes.first().map(String::as_str),
            _ => None,
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("kind".into(), format!("{:?}", self.err.kind()).into());
        inner.insert("message".into(), self.message().into());
        for (key, value) in [("hint", self.err.hint()), ("input", self.err.input())] {
            if let Some(value) = value {
                inner.insert(key.into(), value.into());
            }
        }
        if !self.causes.is_empty() {
            inner.insert("causes".into(), self.causes.clone().into());
        }
        let mut outer = Map::new();
        outer.insert("error".into(), Value::Object(inner));
        Value::Object(outer)
    }

    pub(crate) fn to_text(&self, use_color: bool) -> String {
        let mut text = format!("{} {}", paint("error:", "31", use_color), self.message());
        for label in DETAIL_LABELS {
            if let Some(detail) = self.detail(label) {
                let label = format!("{label}:");
                text.push('\n');
                text.push_str(&paint(&label, "33", use_color));
                text.push(' ');
                text.push_str(detail);
            }
        }
        text
    }
}

fn paint(label: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{label}\u{1b}[0m")
    } else {
        label.to_string()
    }
}

/// Maps a clap rejection to a `Usage` error pointing at the closest `--help`.
pub(crate) fn usage_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error:").trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string());

    let command_path: Vec<&str> = rendered
        .lines()
        .find_map(|line| line.trim().strip_prefix("Usage: "))
        .into_iter()
        .flat_map(str::split_whitespace)
        .skip_while(|token| *token != "jsonutils")
        .skip(1)
        .take_while(|token| !token.starts_with(['-', '<', '[']))
        .collect();

    let hint = if command_path.is_empty() {
        "Try `jsonutils --help`.".to_string()
    } else {
        format!("Try `jsonutils {} --help`.", command_path.join(" "))
    };
    Error::new(ErrorKind::Usage)
        .with_message(message)
        .with_hint(hint)
}
