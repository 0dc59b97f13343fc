use crate::prelude::{println, *};
use toolbelt_core::json::{reformat, JsonMode};

#[derive(Debug, clap::Parser)]
#[command(name = "json")]
#[command(about = "Format or minify JSON")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Pretty-print JSON with 2-space indentation
    #[clap(name = "format")]
    Format(Options),

    /// Strip all insignificant whitespace
    #[clap(name = "minify")]
    Minify(Options),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// JSON text to reformat
    #[arg(value_name = "INPUT")]
    pub input: String,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let (options, mode) = match app.command {
        Commands::Format(options) => (options, JsonMode::Pretty),
        Commands::Minify(options) => (options, JsonMode::Minified),
    };

    if global.verbose {
        println!("Reformatting {} bytes of JSON...", options.input.len());
    }

    let output = reformat(&options.input, mode).map_err(|e| eyre!("{}", e))?;
    println!("{}", output);

    Ok(())
}
