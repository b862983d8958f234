use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scicalc::calculator::{ERROR_TEXT, evaluate_expression, format_result};
use scicalc::config::Config;
use scicalc::controller::{Button, CalcState, reduce_all};
use scicalc::layout::Mode;
use scicalc::repl;

#[derive(Parser, Debug)]
#[command(name = "scicalc", version, about = "A scientific calculator")]
struct Cli {
    /// Path to a config file (defaults to ~/.config/scicalc/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start with the scientific keypad
    #[arg(short, long, global = true)]
    scientific: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the calculator window
    #[cfg(feature = "gui")]
    Gui,
    /// Run the calculator in the terminal
    Repl,
    /// Evaluate an expression such as "2 ^ 10" and print the result
    Eval {
        /// Expression in display form: `number op number`
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Press a sequence of buttons and print the final display
    Press {
        /// Button labels, e.g. `sin 9 0 =`
        #[arg(required = true, allow_hyphen_values = true)]
        buttons: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "scicalc=debug" } else { "scicalc=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(),
    };

    if cli.scientific {
        config.start_mode = Mode::Scientific;
    }

    Ok(config)
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mode = config.start_mode;

    match cli.command {
        Some(Command::Eval { expression }) => match evaluate_expression(&expression) {
            Ok(value) => {
                println!("{}", format_result(value));
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                info!("{err}");
                println!("{ERROR_TEXT}");
                Ok(ExitCode::FAILURE)
            }
        },
        Some(Command::Press { buttons }) => {
            let buttons = buttons
                .iter()
                .map(|label| label.parse::<Button>())
                .collect::<Result<Vec<_>, _>>()?;
            let state = reduce_all(CalcState::new(), buttons);
            println!("{}", state.display);
            Ok(if state.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Some(Command::Repl) => {
            repl::run(io::stdin().lock(), io::stdout().lock(), mode)?;
            Ok(ExitCode::SUCCESS)
        }
        #[cfg(feature = "gui")]
        Some(Command::Gui) | None => {
            scicalc::ui::run(&config, mode)?;
            Ok(ExitCode::SUCCESS)
        }
        #[cfg(not(feature = "gui"))]
        None => {
            repl::run(io::stdin().lock(), io::stdout().lock(), mode)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
