//! Purpose: Hold top-level CLI command dispatch for `jsonutils`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Array commands are handed to the library dispatcher unchanged.
//! Invariants: The output sink is chosen by the caller; nothing here touches stdout directly.

use std::io::Write;

use clap::CommandFactory;
use jsonutils::{ArrayCommand, Error, run_array_command};

use super::{ArraySubcommand, Cli, Command};

pub(super) fn dispatch_command(command: Command, out: &mut dyn Write) -> Result<(), Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "jsonutils", out);
            Ok(())
        }
        Command::Array { command } => run_array_command(array_command(command), out),
    }
}

fn array_command(command: ArraySubcommand) -> ArrayCommand {
    match command {
        ArraySubcommand::New => ArrayCommand::New,
        ArraySubcommand::Append(args) => ArrayCommand::Append {
            array: args.array,
            value: args.value,
            type_hint: args.type_hint,
        },
        ArraySubcommand::Spread(args) => ArrayCommand::Spread {
            array: args.array,
            value: args.value,
        },
    }
}
