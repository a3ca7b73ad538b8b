//! Purpose: `jsonutils` CLI entry point.
//! Role: Binary crate root; parses args, runs array commands, emits JSON on stdout.
//! Invariants: Successful commands write exactly one compact JSON array, no trailing newline.
//! Invariants: Errors go to stderr (text on a TTY, one JSON line otherwise); stdout stays empty.
//! Invariants: Process exit code is derived from `jsonutils::to_exit_code`.
use std::io::{self, IsTerminal};

use clap::{Args, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use jsonutils::{Error, ErrorKind, to_exit_code};
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod report;

use report::Report;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => return Err((report::usage_error(&err), ColorMode::Auto)),
        },
    };

    let color_mode = cli.color;
    init_tracing(color_mode);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    command_dispatch::dispatch_command(cli.command, &mut out)
        .map(|()| RunOutcome::ok())
        .map_err(|err| (err, color_mode))
}

fn init_tracing(color_mode: ColorMode) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(color_mode.use_color(io::stderr().is_terminal()))
        .with_writer(io::stderr)
        .try_init();
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let report = Report::new(err);
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", report.to_text(color_mode.use_color(is_tty)));
    } else {
        eprintln!("{}", report.to_json());
    }
}

#[derive(Parser)]
#[command(
    name = "jsonutils",
    version,
    about = "A collection of tools to work with JSON on the command line alongside jq",
    long_about = None,
    after_help = r#"EXAMPLES
  $ jsonutils array new
  []
  $ jsonutils array append --array '[]' --value hello
  ["hello"]
  $ jsonutils array append -a '["a"]' -v 1 -t number
  ["a",1]
  $ jsonutils array spread -a '["a"]' -v '["b","c"]'
  ["a","b","c"]

  $ jsonutils <command> --help"#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        arg_required_else_help = true,
        about = "Utils for working with JSON arrays",
        after_help = r#"EXAMPLES
  $ jsonutils array new
  $ jsonutils array append --array "$(jsonutils array new)" --value '{"id": 1}'
  $ jsonutils array spread --array '[1]' --value '[2, 3]'

NOTES
  - Output is compact JSON with no trailing newline
  - Object keys keep their input order"#
    )]
    Array {
        #[command(subcommand)]
        command: ArraySubcommand,
    },
    #[command(
        about = "Generate shell completion scripts",
        after_help = r#"EXAMPLES
  $ jsonutils completion bash > ~/.local/share/bash-completion/completions/jsonutils
  $ jsonutils completion zsh > ~/.zfunc/_jsonutils
  $ jsonutils completion fish > ~/.config/fish/completions/jsonutils.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ArraySubcommand {
    #[command(about = "Returns an empty JSON array")]
    New,
    #[command(
        about = "Appends the given input to the given array",
        after_help = r#"EXAMPLES
  $ jsonutils array append -a '[]' -v hello                 # ["hello"]
  $ jsonutils array append -a '[]' -v 1 -t number           # [1]
  $ jsonutils array append -a '[]' -v true -t bool          # [true]
  $ jsonutils array append -a '[]' -v '{"foo":"bar"}'       # [{"foo":"bar"}]

NOTES
  - Values starting with { or [ are parsed as JSON unless --type is set
  - --type number accepts base-10 integers only"#
    )]
    Append(AppendArgs),
    #[command(
        about = "Spreads the given input array to the given array",
        after_help = r#"EXAMPLES
  $ jsonutils array spread -a '["a"]' -v '["b","c"]'        # ["a","b","c"]"#
    )]
    Spread(SpreadArgs),
}

#[derive(Args)]
struct AppendArgs {
    #[arg(
        short = 'a',
        long,
        allow_hyphen_values = true,
        help = "JSON array to append to"
    )]
    array: Option<String>,
    #[arg(
        short = 'v',
        long,
        allow_hyphen_values = true,
        help = "Value to append (plain text, or JSON object/array)"
    )]
    value: Option<String>,
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Interpret --value as this type: number|bool"
    )]
    type_hint: Option<String>,
}

#[derive(Args)]
struct SpreadArgs {
    #[arg(
        short = 'a',
        long,
        allow_hyphen_values = true,
        help = "JSON array to spread into"
    )]
    array: Option<String>,
    #[arg(
        short = 'v',
        long,
        allow_hyphen_values = true,
        help = "JSON array whose elements are appended"
    )]
    value: Option<String>,
}
