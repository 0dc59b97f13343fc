use crate::prelude::{println, *};
use colored::Colorize;
use toolbelt_core::base::{convert, Base};

#[derive(Debug, clap::Parser)]
#[command(name = "base")]
#[command(about = "Convert numbers between binary, octal, decimal, and hexadecimal")]
pub struct App {
    #[clap(flatten)]
    pub options: Options,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Value to convert
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Source base (2, 8, 10, or 16)
    #[arg(short, long, default_value = "10")]
    pub from: Base,

    /// Target base (2, 8, 10, or 16)
    #[arg(short, long, default_value = "2")]
    pub to: Base,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    let options = app.options;

    if global.verbose {
        println!(
            "Converting from {} to {}...",
            options.from.label(),
            options.to.label()
        );
    }

    let output =
        convert(&options.value, options.from, options.to).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "input": options.value,
                "from": options.from,
                "to": options.to,
                "output": output,
            }))?
        );
    } else {
        print!("{}", format_conversion(&options.value, options.from, options.to, &output));
    }

    Ok(())
}

/// Render the conversion as two aligned lines.
fn format_conversion(input: &str, from: Base, to: Base, output: &str) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "{} {}  {}\n",
        "Input".green(),
        format!("[{}]", from.label()).bright_black(),
        input.trim()
    ));
    result.push_str(&format!(
        "{} {}  {}\n",
        "Output".green(),
        format!("[{}]", to.label()).bright_black(),
        output.cyan().bold()
    ));
    result
}
