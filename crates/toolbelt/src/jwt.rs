use crate::prelude::{println, *};
use colored::Colorize;
use toolbelt_core::jwt::{decode, DecodedJwt};

#[derive(Debug, clap::Parser)]
#[command(name = "jwt")]
#[command(about = "Decode JSON Web Tokens (no signature verification)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Decode a token into header, payload, and signature
    #[clap(name = "decode")]
    Decode(DecodeOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DecodeOptions {
    /// The encoded token
    #[arg(value_name = "TOKEN")]
    pub token: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Decode(options) => {
            if global.verbose {
                println!("Decoding token ({} bytes)...", options.token.len());
            }

            let decoded = decode(&options.token).map_err(|e| eyre!("{}", e))?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            } else {
                print!("{}", format_decoded(&decoded)?);
            }

            Ok(())
        }
    }
}

/// Render the three token parts as labeled sections.
fn format_decoded(decoded: &DecodedJwt) -> Result<String> {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "HEADER".bright_cyan().bold()));
    result.push_str(&serde_json::to_string_pretty(&decoded.header)?);
    result.push_str("\n\n");

    result.push_str(&format!("{}\n", "PAYLOAD".bright_cyan().bold()));
    result.push_str(&serde_json::to_string_pretty(&decoded.payload)?);
    result.push_str("\n\n");

    result.push_str(&format!("{}\n", "SIGNATURE".bright_cyan().bold()));
    result.push_str(&decoded.signature);
    result.push('\n');

    Ok(result)
}
