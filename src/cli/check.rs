//! Check command
//!
//! Runs the credit alert and delivers the notification.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, ValueEnum};
use tracing::warn;

use crate::config::Settings;
use crate::error::AlertResult;
use crate::gateway::{BudgetGateway, YnabClient};
use crate::notify::{combine_names, FileSink, NotificationSink, SmtpSink, StdoutSink};
use crate::services::{AlertReport, AlertService};

/// Where the notification goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Delivery {
    /// Send an email over SMTP
    #[default]
    Email,
    /// Print subject and body
    Stdout,
    /// Write subject.txt and message.txt
    Files,
}

/// Arguments of the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// How to deliver the notification
    #[arg(short, long, value_enum, default_value_t = Delivery::Email)]
    pub deliver: Delivery,

    /// Directory for --deliver files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            deliver: Delivery::Email,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Build the sink for `args`, validating its settings
pub fn build_sink(settings: &Settings, args: &CheckArgs) -> AlertResult<Box<dyn NotificationSink>> {
    let sink: Box<dyn NotificationSink> = match args.deliver {
        Delivery::Email => Box::new(SmtpSink::new(&settings.smtp()?)?),
        Delivery::Stdout => Box::new(StdoutSink),
        Delivery::Files => Box::new(FileSink::new(&args.output_dir)),
    };
    Ok(sink)
}

/// Handle the check command
///
/// The sink is built first so bad email settings fail before any API call.
pub fn handle_check_command(settings: &Settings, args: &CheckArgs) -> AlertResult<()> {
    let sink = build_sink(settings, args)?;
    let client = YnabClient::new(&settings.api)?;
    let today = Local::now().date_naive();

    let report = run_check(&client, settings, sink.as_ref(), today)?;

    if args.deliver != Delivery::Stdout {
        println!("{}", summarize(&report));
    }
    Ok(())
}

/// Run the alert against any gateway
pub fn run_check<G: BudgetGateway + ?Sized>(
    gateway: &G,
    settings: &Settings,
    sink: &dyn NotificationSink,
    today: NaiveDate,
) -> AlertResult<AlertReport> {
    let report = AlertService::new(gateway).run(
        &settings.budget_name,
        settings.cutoff_days,
        today,
        sink,
    )?;

    if !report.delivered {
        warn!("Alert computed but not delivered");
    }
    Ok(report)
}

/// One-line result for the terminal
pub fn summarize(report: &AlertReport) -> String {
    let status = if report.due.is_empty() {
        format!("All credit accounts paid since {}", report.cutoff)
    } else {
        format!(
            "{} account(s) due since {}: {}",
            report.due.len(),
            report.cutoff,
            combine_names(report.due.names())
        )
    };

    if report.delivered {
        status
    } else {
        format!("{} (notification not delivered)", status)
    }
}
