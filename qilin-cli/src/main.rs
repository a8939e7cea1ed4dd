use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use qilin_cli::config::{self, ConfigMerger};
use qilin_cli::render::{self, OutputFormat};
use qilin_cli::{Backend, SessionError, parse_script, run_script};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "qilin",
    version,
    about = "Run stack-operation scripts against qilin stacks."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Execute a script and print the values it produces.
    Run(RunArgs),
    /// Parse a script without executing it.
    Check(CheckArgs),
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Script path, or `-` for stdin.
    script: Utf8PathBuf,

    /// Stack implementation (default: from qilin.toml, else array).
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Output format (default: from qilin.toml, else text).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Record stack errors and continue instead of stopping.
    #[arg(long, default_value_t = false)]
    keep_going: bool,

    /// Config file (default: ./qilin.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Script path, or `-` for stdin.
    script: Utf8PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1; exit 2 is reserved for stack underflow.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    if let Err(e) = real_main(cli) {
        debug!("{:?}", e);
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<SessionError>()
            .map_or(1, SessionError::exit_code);
        return ExitCode::from(code);
    }
    ExitCode::from(0)
}

fn real_main(cli: Cli) -> anyhow::Result<()> {
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let file_config = config::resolve_config(args.config.as_deref(), Utf8Path::new("."))?;
    let merged =
        ConfigMerger::new(file_config).merge_run_args(args.backend, args.format, args.keep_going);
    debug!(
        "merged config: backend={}, format={:?}, keep_going={}",
        merged.backend, merged.format, merged.keep_going
    );

    let source = read_script(&args.script)?;
    let script = parse_script(&source)
        .map_err(SessionError::from)
        .with_context(|| format!("parse {}", args.script))?;
    let report = run_script(&script, merged.session_options())?;
    info!(
        steps = report.steps.len(),
        errors = report.error_count(),
        "script finished"
    );

    let rendered = render::render(&report, merged.format).context("render report")?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("write report")?;
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let source = read_script(&args.script)?;
    let script = parse_script(&source)
        .map_err(SessionError::from)
        .with_context(|| format!("parse {}", args.script))?;
    println!("ok: {} commands", script.len());
    Ok(())
}

fn read_script(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("read script from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("read script {}", path))
}
