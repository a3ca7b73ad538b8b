// Type-hint driven conversion of raw `--value` strings.
use serde_json::Value;

use super::error::{Error, ErrorKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeHint {
    Number,
    Bool,
}

impl TypeHint {
    /// Validates a raw `--type` flag. Empty means no hint.
    pub fn from_flag(raw: &str) -> Result<Option<Self>, Error> {
        match raw {
            "" => Ok(None),
            "number" => Ok(Some(TypeHint::Number)),
            "bool" => Ok(Some(TypeHint::Bool)),
            other => Err(Error::new(ErrorKind::InvalidTypeHint)
                .with_message(format!(
                    "argument --type is invalid: must be either 'number' or 'bool' but was '{other}'"
                ))
                .with_hint("Use --type number or --type bool, or omit --type.")
                .with_input(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeHint::Number => "number",
            TypeHint::Bool => "bool",
        }
    }
}

pub fn coerce(raw: &str, hint: Option<TypeHint>) -> Result<Value, Error> {
    match hint {
        None => Ok(Value::String(raw.to_string())),
        Some(TypeHint::Number) => raw.parse::<i64>().map(Value::from).map_err(|err| {
            let cause = err.to_string();
            conversion_error(raw, TypeHint::Number, &cause).with_source(err)
        }),
        Some(TypeHint::Bool) => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| conversion_error(raw, TypeHint::Bool, "invalid syntax")),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

fn conversion_error(raw: &str, hint: TypeHint, cause: &str) -> Error {
    let hint_text = match hint {
        TypeHint::Number => "Only base-10 integers are supported (e.g. 42, -7).",
        TypeHint::Bool => "Use true/false, t/f, or 1/0.",
    };
    Error::new(ErrorKind::TypeConversionFailed)
        .with_message(format!(
            "failed to convert value {raw:?} to {}: {cause}",
            hint.as_str()
        ))
        .with_hint(hint_text)
        .with_input(raw)
}
