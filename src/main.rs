use std::io::stderr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use credit_alert::cli::{
    handle_accounts_command, handle_check_command, handle_config_command, handle_lookup_command,
    CheckArgs, ConfigArgs, LookupCommands,
};
use credit_alert::config::{AlertPaths, Settings};
use credit_alert::gateway::YnabClient;
use credit_alert::AlertError;

#[derive(Parser)]
#[command(
    name = "credit-alert",
    author = "Kaylee Beyene",
    version,
    about = "Email a reminder when credit card accounts have no recent payment",
    long_about = "credit-alert checks every credit card account in a YNAB budget for a \
                  cleared transfer payment within the last N days and emails a summary \
                  of the accounts that still look unpaid."
)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(flatten)]
    settings: ConfigArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for payments and deliver the alert (default)
    Check(CheckArgs),

    /// List the credit card accounts of the budget
    Accounts,

    /// Resolve a budget, account or category name to its ID
    #[command(subcommand)]
    Lookup(LookupCommands),

    /// Show the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(parse_log_level(&cli.log_level));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<AlertError>()
                .map(AlertError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = AlertPaths::resolve(cli.config);
    let settings = Settings::load(&paths, cli.settings.into_partial())?;

    match cli.command.unwrap_or_else(|| Commands::Check(CheckArgs::default())) {
        Commands::Check(args) => {
            handle_check_command(&settings, &args)?;
        }
        Commands::Accounts => {
            let client = YnabClient::new(&settings.api)?;
            print!("{}", handle_accounts_command(&client, &settings.budget_name)?);
        }
        Commands::Lookup(cmd) => {
            let client = YnabClient::new(&settings.api)?;
            println!("{}", handle_lookup_command(&client, &settings.budget_name, &cmd)?);
        }
        Commands::Config => {
            print!("{}", handle_config_command(&paths, &settings));
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    // stdout carries command output; logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
