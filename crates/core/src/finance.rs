use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Equated monthly installment breakdown for a loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiOutput {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

/// Future value of a systematic investment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipOutput {
    pub future_value: f64,
    pub invested: f64,
    pub returns: f64,
}

/// Whether the given amount already includes GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GstMode {
    /// The amount is the net price; GST is added on top.
    Exclusive,
    /// The amount is the total price; GST is extracted from it.
    Inclusive,
}

impl std::str::FromStr for GstMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" => Ok(GstMode::Exclusive),
            "inclusive" => Ok(GstMode::Inclusive),
            other => Err(Error::InvalidInput(format!(
                "unknown GST mode: {other}. Valid modes: exclusive, inclusive"
            ))),
        }
    }
}

/// GST breakdown. CGST and SGST are the two equal halves of the GST amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstOutput {
    pub net: f64,
    pub gst: f64,
    pub total: f64,
    pub cgst: f64,
    pub sgst: f64,
}

/// EMI = P·r·(1+r)^n / ((1+r)^n − 1), with r the monthly rate and n the
/// tenure in months. A zero rate degenerates to the limit form P/n; a zero
/// tenure is an [`Error::InvalidInput`]. Values are full precision; rounding
/// is the caller's concern.
pub fn calculate_emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
) -> Result<EmiOutput, Error> {
    let n = tenure_years * 12.0;
    if n <= 0.0 {
        return Err(Error::InvalidInput(
            "tenure must be at least one month".to_string(),
        ));
    }

    let r = annual_rate_percent / 12.0 / 100.0;
    let monthly_payment = if r == 0.0 {
        principal / n
    } else {
        let factor = (1.0 + r).powf(n);
        principal * r * factor / (factor - 1.0)
    };

    let total_payment = monthly_payment * n;
    Ok(EmiOutput {
        monthly_payment,
        total_interest: total_payment - principal,
        total_payment,
    })
}

/// Future value = P·((1+i)^n − 1)/i·(1+i), with i the monthly rate and n the
/// number of monthly contributions. A zero rate degenerates to P·n.
pub fn calculate_sip(monthly_amount: f64, annual_rate_percent: f64, years: f64) -> SipOutput {
    let n = years * 12.0;
    let i = annual_rate_percent / 100.0 / 12.0;

    let future_value = if i == 0.0 {
        monthly_amount * n
    } else {
        monthly_amount * (((1.0 + i).powf(n) - 1.0) / i) * (1.0 + i)
    };
    let invested = monthly_amount * n;

    SipOutput {
        future_value,
        invested,
        returns: future_value - invested,
    }
}

/// Split an amount into net, GST, and total per the selected mode.
pub fn calculate_gst(amount: f64, rate_percent: f64, mode: GstMode) -> GstOutput {
    let (net, gst, total) = match mode {
        GstMode::Exclusive => {
            let gst = amount * rate_percent / 100.0;
            (amount, gst, amount + gst)
        }
        GstMode::Inclusive => {
            let net = amount / (1.0 + rate_percent / 100.0);
            (net, amount - net, amount)
        }
    };

    GstOutput {
        net,
        gst,
        total,
        cgst: gst / 2.0,
        sgst: gst / 2.0,
    }
}

/// Parse a raw amount string at the engine boundary. Non-numeric (or
/// non-finite) input is an [`Error::InvalidInput`], per the GST contract.
pub fn parse_amount(input: &str) -> Result<f64, Error> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(format!("not a numeric amount: {trimmed}")))?;

    if !value.is_finite() {
        return Err(Error::InvalidInput(format!(
            "not a numeric amount: {trimmed}"
        )));
    }

    Ok(value)
}
