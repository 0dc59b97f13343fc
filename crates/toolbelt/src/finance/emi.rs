use crate::prelude::{println, *};
use toolbelt_core::finance::calculate_emi;

use super::money;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct EmiOptions {
    /// Loan amount
    #[arg(short, long, default_value = "500000")]
    pub principal: f64,

    /// Annual interest rate, in percent
    #[arg(short, long, default_value = "8.5")]
    pub rate: f64,

    /// Loan tenure, in years
    #[arg(short, long, default_value = "5")]
    pub tenure: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: EmiOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "EMI for {} at {}% over {} years...",
            options.principal, options.rate, options.tenure
        );
    }

    let output =
        calculate_emi(options.principal, options.rate, options.tenure).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Monthly EMI", money(output.monthly_payment)]);
        table.add_row(prettytable::row![
            "Total Interest",
            money(output.total_interest)
        ]);
        table.add_row(prettytable::row![
            "Total Payment",
            money(output.total_payment)
        ]);
        table.printstd();
    }

    Ok(())
}
