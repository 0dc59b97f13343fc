use crate::prelude::{println, *};

pub mod stats;

#[derive(Debug, clap::Parser)]
#[command(name = "text")]
#[command(about = "Text statistics and analysis")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Count words, characters, and lines, and estimate reading time
    #[clap(name = "stats")]
    Stats(stats::StatsOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Stats(options) => stats::run(options, global),
    }
}
