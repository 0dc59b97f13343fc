#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod base;
mod case;
mod error;
mod exec;
mod finance;
mod hash;
mod json;
mod jwt;
mod prelude;
mod text;
mod time;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Developer and business utilities for the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TOOLBELT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert numbers between binary, octal, decimal, and hexadecimal
    Base(crate::base::App),

    /// Transform text casing (upper, lower, camel, snake, ...)
    Case(crate::case::App),

    /// Text statistics (words, characters, lines, reading time)
    Text(crate::text::App),

    /// Format or minify JSON
    Json(crate::json::App),

    /// Decode JSON Web Tokens
    Jwt(crate::jwt::App),

    /// Generate digests (MD5, SHA family, Base64)
    Hash(crate::hash::App),

    /// Convert Unix timestamps
    Time(crate::time::App),

    /// Financial calculators (EMI, SIP, GST)
    Finance(crate::finance::App),

    /// Execute a raw operation request as JSON
    Exec(crate::exec::Options),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Base(sub_app) => crate::base::run(sub_app, app.global),
        SubCommands::Case(sub_app) => crate::case::run(sub_app, app.global),
        SubCommands::Text(sub_app) => crate::text::run(sub_app, app.global),
        SubCommands::Json(sub_app) => crate::json::run(sub_app, app.global),
        SubCommands::Jwt(sub_app) => crate::jwt::run(sub_app, app.global),
        SubCommands::Hash(sub_app) => crate::hash::run(sub_app, app.global),
        SubCommands::Time(sub_app) => crate::time::run(sub_app, app.global),
        SubCommands::Finance(sub_app) => crate::finance::run(sub_app, app.global),
        SubCommands::Exec(options) => crate::exec::run(options, app.global),
    }
}
