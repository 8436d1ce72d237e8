use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use regcraft::{Options, values::MergeMode};

/// Decode raw register values into named bit-fields.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Register schema (JSON)
    schema: PathBuf,

    /// Raw register values keyed by register name (JSON)
    values: PathBuf,

    /// Fail on unknown register names and on registers without a value
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        schema: cli.schema,
        values: cli.values,
        mode: if cli.strict {
            MergeMode::Strict
        } else {
            MergeMode::Lenient
        },
    };

    let stdout = io::stdout();
    match regcraft::run(&options, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
