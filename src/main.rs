use clap::Parser as ClapParser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tq::cli::{self, CliError, Config, Mode};

#[derive(ClapParser)]
#[command(name = "tq")]
#[command(about = "tq - Query, edit, and convert TOML documents")]
#[command(version)]
struct Cli {
    /// Get (`a.b.c`) or set (`a.b.c=value`) scripts; gets and sets cannot be mixed
    scripts: Vec<String>,

    /// Convert the input from TOML to JSON
    #[arg(long, conflicts_with = "toml")]
    json: bool,

    /// Convert the input from JSON to TOML
    #[arg(long)]
    toml: bool,

    /// File of script lines to append to the scripts given as arguments
    #[arg(short = 'f', long = "file")]
    script_file: Option<PathBuf>,

    /// Document to read (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Log to stderr when `TQ_LOG` (or `RUST_LOG`) is set, e.g. `TQ_LOG=tq=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("TQ_LOG").or_else(|_| EnvFilter::try_from_default_env());
    if let Ok(filter) = filter {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = build_config(&cli)?;
    let input = read_input(cli.input)?;

    let output = cli::execute(&config, &input)?;
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config, CliError> {
    let mode = if cli.toml {
        Mode::JsonToToml
    } else if cli.json {
        Mode::TomlToJson
    } else {
        Mode::Script(cli::load_scripts(cli.scripts.as_slice(), cli.script_file.as_deref())?)
    };
    Ok(Config::new(mode).pretty(cli.pretty))
}

fn read_input(path: Option<PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
