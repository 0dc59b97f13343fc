use crate::prelude::{println, *};
use toolbelt_core::finance::{calculate_gst, parse_amount, GstMode};

use super::money;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GstOptions {
    /// Amount to split into net, GST, and total
    #[arg(value_name = "AMOUNT")]
    pub amount: String,

    /// GST rate, in percent
    #[arg(short, long, default_value = "18")]
    pub rate: f64,

    /// Whether the amount excludes or includes GST
    #[arg(short, long, default_value = "exclusive")]
    pub mode: GstMode,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: GstOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("GST at {}%, {:?} mode...", options.rate, options.mode);
    }

    let amount = parse_amount(&options.amount).map_err(|e| eyre!("{}", e))?;
    let output = calculate_gst(amount, options.rate, options.mode);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut table = crate::prelude::new_table();
        table.add_row(prettytable::row!["Net Amount", money(output.net)]);
        table.add_row(prettytable::row!["GST", money(output.gst)]);
        table.add_row(prettytable::row!["CGST", money(output.cgst)]);
        table.add_row(prettytable::row!["SGST", money(output.sgst)]);
        table.add_row(prettytable::row!["Total", money(output.total)]);
        table.printstd();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_reference_rendering() {
        let output = calculate_gst(1_000.0, 18.0, GstMode::Exclusive);
        assert_eq!(money(output.net), "1000.00");
        assert_eq!(money(output.gst), "180.00");
        assert_eq!(money(output.total), "1180.00");
        assert_eq!(money(output.cgst), "90.00");
        assert_eq!(money(output.sgst), "90.00");
    }
}
