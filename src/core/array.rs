// Array operations: new, append, spread.
use std::io::Write;

use serde_json::Value;
use tracing::debug;

use super::coerce::{TypeHint, coerce};
use super::error::{Error, ErrorKind};
use crate::json::parse;

pub fn new_array(out: &mut dyn Write) -> Result<(), Error> {
    emit_array(out, &[])
}

pub fn append(out: &mut dyn Write, array: &str, value: &str, type_flag: &str) -> Result<(), Error> {
    let hint = TypeHint::from_flag(type_flag)?;
    let items = appended(array, value, hint)?;
    emit_array(out, &items)
}

pub fn spread(out: &mut dyn Write, array: &str, value: &str) -> Result<(), Error> {
    let items = spread_into(array, value)?;
    emit_array(out, &items)
}

/// Returns `array` with the resolved `value` as its last element.
pub fn appended(array: &str, value: &str, hint: Option<TypeHint>) -> Result<Vec<Value>, Error> {
    let mut items = parse_array(array)?;
    let value = resolve_value(value, hint)?;
    items.push(value);
    debug!(len = items.len(), "appended value");
    Ok(items)
}

/// Returns the elements of `array` followed by the elements of `value`.
pub fn spread_into(array: &str, value: &str) -> Result<Vec<Value>, Error> {
    let mut items = parse_array(array)?;

    let first = value.chars().next();
    if first != Some('[') {
        let shown = first.map(String::from).unwrap_or_default();
        return Err(Error::new(ErrorKind::InvalidValue)
            .with_message(format!(
                "the value is invalid: It must be a JSON array so the first character should be '[' but it was {shown}. Value arg: {value:?}"
            ))
            .with_hint("Pass a JSON array to --value, e.g. '[\"a\",\"b\"]'. Use `array append` for single values.")
            .with_input(value));
    }

    let extra: Vec<Value> = parse::from_str(value).map_err(|err| invalid_value_json(value, err))?;
    debug!(existing = items.len(), spread = extra.len(), "spreading values");
    items.extend(extra);
    Ok(items)
}

fn parse_array(raw: &str) -> Result<Vec<Value>, Error> {
    parse::from_str::<Vec<Value>>(raw).map_err(|err| {
        let hint = parse::hint_for_error(&err, "--array");
        Error::new(ErrorKind::InvalidArray)
            .with_message(format!("the array is invalid: {err}. Array arg: {raw}"))
            .with_hint(hint)
            .with_input(raw)
            .with_source(err)
    })
}

fn resolve_value(raw: &str, hint: Option<TypeHint>) -> Result<Value, Error> {
    if let Some(hint) = hint {
        debug!(target_type = hint.as_str(), "coercing value");
        return coerce(raw, Some(hint));
    }
    match raw.trim_start().chars().next() {
        Some('{') | Some('[') => {
            debug!("value looks like embedded JSON");
            parse::from_str::<Value>(raw).map_err(|err| invalid_value_json(raw, err))
        }
        _ => coerce(raw, None),
    }
}

fn invalid_value_json(raw: &str, err: serde_json::Error) -> Error {
    let hint = parse::hint_for_error(&err, "--value");
    Error::new(ErrorKind::InvalidValue)
        .with_message(format!("the --value arg is invalid JSON: {err}. Value arg: {raw}"))
        .with_hint(hint)
        .with_input(raw)
        .with_source(err)
}

fn emit_array(out: &mut dyn Write, items: &[Value]) -> Result<(), Error> {
    let json = serde_json::to_string(items).map_err(|err| {
        Error::new(ErrorKind::SerializationFailed)
            .with_message(format!("failed to marshal updated array to JSON: {err}"))
            .with_source(err)
    })?;
    out.write_all(json.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write array to output")
                .with_source(err)
        })
}
