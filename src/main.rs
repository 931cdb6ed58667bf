use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// deftoml translates a constant/array configuration file into TOML and
/// prints it to standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file to translate.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    match deftoml::parse_file(&args.input).and_then(|doc| deftoml::to_toml(&doc)) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
