use crate::prelude::{println, *};
use toolbelt_core::case::{transform, CaseVariant};

#[derive(Debug, clap::Parser)]
#[command(name = "case")]
#[command(about = "Transform text casing")]
pub struct App {
    #[clap(flatten)]
    pub options: Options,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Casing variant: upper, lower, sentence, title, camel, pascal, snake, kebab
    #[arg(value_name = "VARIANT")]
    pub variant: CaseVariant,

    /// Text to transform
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.options;

    if global.verbose {
        println!("Applying {} case...", options.variant.label());
    }

    let output = transform(&options.text, options.variant);

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "variant": options.variant,
                "input": options.text,
                "output": output,
            }))?
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
