use crate::prelude::{println, *};
use toolbelt_core::finance::calculate_sip;

use super::money;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SipOptions {
    /// Monthly investment amount
    #[arg(short, long, default_value = "5000")]
    pub amount: f64,

    /// Expected annual return, in percent
    #[arg(short, long, default_value = "12")]
    pub rate: f64,

    /// Investment horizon, in years
    #[arg(short, long, default_value = "10")]
    pub years: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: SipOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "SIP of {} monthly at {}% over {} years...",
            options.amount, options.rate, options.years
        );
    }

    let output = calculate_sip(options.amount, options.rate, options.years);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Invested", money(output.invested)]);
        table.add_row(prettytable::row![
            "Estimated Returns",
            money(output.returns)
        ]);
        table.add_row(prettytable::row!["Total Value", money(output.future_value)]);
        table.printstd();
    }

    Ok(())
}
