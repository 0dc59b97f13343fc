use crate::prelude::{println, *};
use toolbelt_core::hash::{digest, HashAlgorithm};

#[derive(Debug, clap::Parser)]
#[command(name = "hash")]
#[command(about = "Generate digests (MD5, SHA-1, SHA-256, SHA-512, SHA-3, Base64)")]
pub struct App {
    #[clap(flatten)]
    pub options: Options,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Text to digest
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Restrict output to one algorithm; all of them by default
    #[arg(short, long)]
    pub algorithm: Option<HashAlgorithm>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.options;

    if global.verbose {
        println!("Hashing {} bytes...", options.text.len());
    }

    match options.algorithm {
        Some(algorithm) => {
            let output = digest(&options.text, algorithm);
            if options.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "algorithm": algorithm,
                        "digest": output,
                    }))?
                );
            } else {
                println!("{}", output);
            }
        }
        None => {
            let digests = digest_all(&options.text);
            if options.json {
                let map: serde_json::Map<String, serde_json::Value> = digests
                    .iter()
                    .map(|(algorithm, value)| {
                        (algorithm.label().to_string(), serde_json::json!(value))
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                let mut table = crate::prelude::new_table();
                for (algorithm, value) in &digests {
                    table.add_row(prettytable::row![algorithm.label(), value]);
                }
                table.printstd();
            }
        }
    }

    Ok(())
}

/// Compute the digest under every supported algorithm, in catalog order.
fn digest_all(text: &str) -> Vec<(HashAlgorithm, String)> {
    HashAlgorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, digest(text, algorithm)))
        .collect()
}
