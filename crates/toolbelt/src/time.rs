use crate::prelude::{println, *};
use chrono::{DateTime, Local, Utc};
use toolbelt_core::time::convert;

#[derive(Debug, clap::Parser)]
#[command(name = "time")]
#[command(about = "Convert Unix timestamps to human-readable dates")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Convert an epoch (seconds or milliseconds, auto-detected)
    #[clap(name = "convert")]
    Convert(ConvertOptions),

    /// Print the current Unix epoch
    #[clap(name = "now")]
    Now(NowOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Epoch value; up to 11 digits is read as seconds, longer as milliseconds
    #[arg(value_name = "EPOCH")]
    pub epoch: String,

    /// Evaluate relative time against this epoch (seconds) instead of the
    /// current instant
    #[arg(long, value_name = "EPOCH_SECONDS")]
    pub at: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct NowOptions {
    /// Print milliseconds instead of seconds
    #[arg(long)]
    pub millis: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Convert(options) => run_convert(options, global),
        Commands::Now(options) => run_now(options, global),
    }
}

fn run_convert(options: ConvertOptions, global: crate::Global) -> Result<()> {
    let now = match options.at {
        Some(at) => DateTime::<Utc>::from_timestamp(at, 0)
            .ok_or_else(|| eyre!("--at epoch out of range: {at}"))?,
        None => Utc::now(),
    };
    let local_offset = *Local::now().offset();

    if global.verbose {
        println!("Converting against now={}...", now.timestamp());
    }

    let output = convert(&options.epoch, now, local_offset).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Local Time", output.local_time]);
        table.add_row(prettytable::row!["UTC / GMT", output.utc_time]);
        table.add_row(prettytable::row!["Relative", output.relative_time]);
        table.printstd();
    }

    Ok(())
}

fn run_now(options: NowOptions, global: crate::Global) -> Result<()> {
    let now = Utc::now();

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "epoch_seconds": now.timestamp(),
                "epoch_millis": now.timestamp_millis(),
            }))?
        );
    } else if options.millis {
        println!("{}", now.timestamp_millis());
    } else {
        println!("{}", now.timestamp());
    }

    Ok(())
}
