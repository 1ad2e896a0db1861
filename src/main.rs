use cdg::config::{Config, Settings, LOG_LEVEL_ENV};
use cdg::{logging, util, Error, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate a clang compilation database from make or ninja output.
///
/// Build output is read from stdin unless input files are given, e.g.
/// `make -nw | cdg` or `cdg -i build.log compile_commands.json`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Where to write the database, "-" for stdout
    /// [default: debug/compile_commands.json]
    output: Option<String>,

    /// Read build output from a file instead of stdin (repeatable)
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Config file [default: ./cdg.toml if present]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {}
        Err(Error::EmptyInput) => {
            eprintln!("{}", Args::command().render_long_help());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "error".red(), e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let settings = Settings::resolve(
        &config,
        args.output.as_deref(),
        args.log_level.as_deref(),
        env_level.as_deref(),
    );
    logging::init(logging::parse_level(&settings.log_level));
    debug!(version = cdg::VERSION, ?settings, "starting");

    let inputs = util::read_inputs(&args.inputs)?;
    let db = util::build_database(&inputs)?;
    db.emit_to(&settings.output)?;

    info!(records = db.len(), "wrote compilation database to {}", settings.output);
    Ok(())
}
