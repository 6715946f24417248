use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use auditdiff::cmd::options::{self, OptionSources};
use auditdiff::cmd::{diff, entry, path};
use auditdiff::domain::config::DiffOptions;
use auditdiff::domain::error::DiffError;
use auditdiff::io::{self as auditdiff_io, Format};
use auditdiff::logging::{self, LogFormat};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "auditdiff",
    version,
    about = "Human-readable change summaries for audit-trail snapshots"
)]
struct Cli {
    /// Emit log lines as JSON (filter with AUDITDIFF_LOG).
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two record snapshots.
    Diff(DiffArgs),
    /// Compare the before/after snapshots of audit entries.
    Entry(EntryArgs),
    /// Print added, removed and updated field values as plain JSON.
    Copy(DiffArgs),
    /// Parse and humanize one change path.
    Path(PathArgs),
}

#[derive(Debug, clap::Args)]
struct DiffArgs {
    #[arg(long)]
    old: PathBuf,

    #[arg(long)]
    new: PathBuf,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Debug, clap::Args)]
struct EntryArgs {
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliInputFormat>,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Debug, clap::Args)]
struct PathArgs {
    path: String,
}

#[derive(Debug, clap::Args)]
struct OptionArgs {
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_entries: Option<usize>,

    #[arg(long)]
    max_depth: Option<usize>,

    #[arg(long)]
    preview_len: Option<usize>,

    #[arg(long = "ignore-field")]
    ignore_fields: Vec<String>,
}

impl From<OptionArgs> for OptionSources {
    fn from(value: OptionArgs) -> Self {
        Self {
            config: value.config,
            max_entries: value.max_entries,
            max_depth: value.max_depth,
            preview_len: value.preview_len,
            ignore_fields: value.ignore_fields,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Json,
    Yaml,
    Jsonl,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Yaml => Self::Yaml,
            CliInputFormat::Jsonl => Self::Jsonl,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    logging::init(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    match cli.command {
        Commands::Diff(args) => run_diff(args),
        Commands::Entry(args) => run_entry(args),
        Commands::Copy(args) => run_copy(args),
        Commands::Path(args) => emit_json_stdout(&path::execute(&args.path), "path"),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_diff(args: DiffArgs) -> i32 {
    let Some(options) = resolve_options(args.options, "diff") else {
        return 3;
    };
    info!(old = %args.old.display(), new = %args.new.display(), "diffing snapshots");
    match diff::run_paths(&args.old, &args.new, &options) {
        Ok(report) => emit_json_stdout(&report, "diff"),
        Err(error) => emit_diff_error(&error, "diff"),
    }
}

fn run_copy(args: DiffArgs) -> i32 {
    let Some(options) = resolve_options(args.options, "copy") else {
        return 3;
    };
    match diff::run_copy_paths(&args.old, &args.new, &options) {
        Ok(payload) => emit_json_stdout(&payload, "copy"),
        Err(error) => emit_diff_error(&error, "copy"),
    }
}

fn run_entry(args: EntryArgs) -> i32 {
    let Some(options) = resolve_options(args.options, "entry") else {
        return 3;
    };
    let explicit = args.from.map(Format::from);

    let result = if let Some(path) = &args.input {
        let format = match auditdiff_io::resolve_input_format(explicit, Some(path.as_path())) {
            Ok(format) => format,
            Err(source) => {
                return emit_diff_error(
                    &DiffError::ResolveInput {
                        side: "entry",
                        source,
                    },
                    "entry",
                );
            }
        };
        match File::open(path) {
            Ok(file) => entry::run(file, format, &options),
            Err(source) => Err(DiffError::OpenInput {
                side: "entry",
                path: path.display().to_string(),
                source,
            }),
        }
    } else {
        let stdin = io::stdin();
        entry::run(stdin.lock(), explicit.unwrap_or(Format::Json), &options)
    };

    match result {
        Ok(reports) => emit_json_stdout(&reports, "entry"),
        Err(error) => emit_diff_error(&error, "entry"),
    }
}

fn resolve_options(args: OptionArgs, command: &str) -> Option<DiffOptions> {
    match options::resolve(&args.into()) {
        Ok(options) => Some(options),
        Err(error) => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"command": command, "kind": "config_error"}),
                3,
            );
            None
        }
    }
}

/// Every `DiffError` stems from the caller's inputs, so all map to exit 3.
fn emit_diff_error(error: &DiffError, command: &str) -> i32 {
    let details = match error.side() {
        Some(side) => json!({"command": command, "side": side}),
        None => json!({"command": command}),
    };
    emit_error("input_usage_error", error.to_string(), details, 3);
    3
}

fn emit_json_stdout<T: Serialize>(value: &T, command: &str) -> i32 {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            0
        }
        Err(error) => {
            emit_error(
                "internal_error",
                format!("failed to serialize {command} output: {error}"),
                json!({"command": command}),
                1,
            );
            1
        }
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
