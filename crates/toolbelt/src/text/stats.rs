use crate::prelude::{println, *};
use toolbelt_core::text::{analyze, TextStats};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct StatsOptions {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: StatsOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Analyzing {} bytes of text...", options.text.len());
    }

    let stats = analyze(&options.text);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Words", stats.words]);
        table.add_row(prettytable::row!["Characters", stats.chars]);
        table.add_row(prettytable::row!["Lines", stats.lines]);
        table.add_row(prettytable::row![
            "Reading Time",
            format_reading_time(&stats)
        ]);
        table.printstd();
    }

    Ok(())
}

fn format_reading_time(stats: &TextStats) -> String {
    format!("{} min", stats.reading_time_minutes)
}
