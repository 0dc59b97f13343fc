use crate::prelude::{println, *};

pub mod emi;
pub mod gst;
pub mod sip;

/// Round a full-precision core value for display.
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}

#[derive(Debug, clap::Parser)]
#[command(name = "finance")]
#[command(about = "EMI, SIP, and GST calculators")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Equated monthly installments for a loan
    #[clap(name = "emi")]
    Emi(emi::EmiOptions),

    /// Future value of a monthly systematic investment plan
    #[clap(name = "sip")]
    Sip(sip::SipOptions),

    /// Goods-and-services tax breakdown
    #[clap(name = "gst")]
    Gst(gst::GstOptions),
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Emi(options) => emi::run(options, global),
        Commands::Sip(options) => sip::run(options, global),
        Commands::Gst(options) => gst::run(options, global),
    }
}
