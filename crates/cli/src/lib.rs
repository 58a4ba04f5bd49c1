pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use advisr_core::config::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "advisr",
    about = "Advisr portfolio-recommendation bot CLI",
    long_about = "Drive intent events through the Advisr dialog handler and inspect validation, \
                  recommendations, and effective configuration.",
    after_help = "Examples:\n  advisr handle --file event.json\n  advisr recommend --risk-level Medium\n  advisr config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Read one intent request JSON document (stdin or --file) and print the dialog response"
    )]
    Handle {
        #[arg(long, help = "Read the event from a file instead of stdin")]
        file: Option<PathBuf>,
        #[arg(long, help = "Correlation id attached to log events for this invocation")]
        correlation_id: Option<String>,
    },
    #[command(about = "Run slot validation directly on raw age / investment amount values")]
    Validate {
        #[arg(long, help = "Raw age slot value")]
        age: Option<String>,
        #[arg(long, help = "Raw investment amount slot value")]
        amount: Option<String>,
    },
    #[command(about = "Print the static allocation for a risk tolerance label")]
    Recommend {
        #[arg(long, help = "Risk tolerance label (None|Low|Medium|High)")]
        risk_level: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Handle { file, correlation_id } => {
            commands::handle::run(file.as_deref(), correlation_id.as_deref())
        }
        Command::Validate { age, amount } => {
            commands::validate::run(age.as_deref(), amount.as_deref())
        }
        Command::Recommend { risk_level } => commands::recommend::run(&risk_level),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

// try_init rather than init: repeated command invocations in-process (tests)
// must not panic on an already-set global subscriber.
pub(crate) fn init_logging(config: &AppConfig) {
    use advisr_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt().with_target(false).with_max_level(log_level);

    match config.logging.format {
        Compact => {
            let _ = builder.compact().try_init();
        }
        Pretty => {
            let _ = builder.pretty().try_init();
        }
        Json => {
            let _ = builder.json().try_init();
        }
    }
}
