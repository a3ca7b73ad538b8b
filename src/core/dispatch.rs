use std::io::Write;

use tracing::debug;

use super::array;
use super::error::{Error, ErrorKind};

/// A parsed `array` subcommand with its raw flag values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArrayCommand {
    New,
    Append {
        array: Option<String>,
        value: Option<String>,
        type_hint: Option<String>,
    },
    Spread {
        array: Option<String>,
        value: Option<String>,
    },
}

impl ArrayCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ArrayCommand::New => "new",
            ArrayCommand::Append { .. } => "append",
            ArrayCommand::Spread { .. } => "spread",
        }
    }
}

pub fn run_array_command(command: ArrayCommand, out: &mut dyn Write) -> Result<(), Error> {
    debug!(cmd = command.name(), "dispatching array command");
    match command {
        ArrayCommand::New => array::new_array(out),
        ArrayCommand::Append {
            array,
            value,
            type_hint,
        } => {
            let array = require_flag("array", array.as_deref())?;
            let value = require_flag("value", value.as_deref())?;
            array::append(out, array, value, type_hint.as_deref().unwrap_or(""))
        }
        ArrayCommand::Spread { array, value } => {
            let array = require_flag("array", array.as_deref())?;
            let value = require_flag("value", value.as_deref())?;
            array::spread(out, array, value)
        }
    }
}

fn require_flag<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::new(ErrorKind::MissingArgument)
            .with_message(format!("argument --{name} is empty"))
            .with_hint(format!("Provide a non-empty --{name} value."))),
    }
}
