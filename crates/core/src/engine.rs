//! Uniform operation dispatch.
//!
//! Every tool in the catalog can be invoked through [`execute`] with a
//! [`Request`]: the operation identifier plus its options, as one tagged
//! value. This replaces the source tool's dispatch on operation-name strings
//! with an enum-keyed table; unknown operations fail at deserialization
//! instead of at call time.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::{base, case, finance, hash, json, jwt, text, time};

/// One operation call: identifier plus per-operation options.
///
/// The serialized form is `{"operation": "<id>", ...options}`. Operations
/// that depend on the wall clock take the current instant as part of the
/// request, so identical requests always produce identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum Request {
    BaseConvert {
        input: String,
        from: base::Base,
        to: base::Base,
    },
    CaseTransform {
        input: String,
        variant: case::CaseVariant,
    },
    TextStats {
        input: String,
    },
    JsonFormat {
        input: String,
        mode: json::JsonMode,
    },
    Hash {
        input: String,
        algorithm: hash::HashAlgorithm,
    },
    JwtDecode {
        input: String,
    },
    TimestampConvert {
        input: String,
        now: DateTime<Utc>,
        #[serde(default)]
        utc_offset_minutes: i32,
    },
    Emi {
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: f64,
    },
    Sip {
        monthly_amount: f64,
        annual_rate_percent: f64,
        years: f64,
    },
    Gst {
        amount: String,
        rate_percent: f64,
        mode: finance::GstMode,
    },
}

/// Successful operation output, tagged by result shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "kebab-case")]
pub enum Output {
    Text { value: String },
    Stats(text::TextStats),
    Jwt(jwt::DecodedJwt),
    Timestamp(time::TimestampOutput),
    Emi(finance::EmiOutput),
    Sip(finance::SipOutput),
    Gst(finance::GstOutput),
}

/// Execute one operation. Stateless: every call is independent, and the same
/// request always yields the same result.
pub fn execute(request: Request) -> Result<Output, Error> {
    match request {
        Request::BaseConvert { input, from, to } => {
            base::convert(&input, from, to).map(|value| Output::Text { value })
        }
        Request::CaseTransform { input, variant } => Ok(Output::Text {
            value: case::transform(&input, variant),
        }),
        Request::TextStats { input } => Ok(Output::Stats(text::analyze(&input))),
        Request::JsonFormat { input, mode } => {
            json::reformat(&input, mode).map(|value| Output::Text { value })
        }
        Request::Hash { input, algorithm } => Ok(Output::Text {
            value: hash::digest(&input, algorithm),
        }),
        Request::JwtDecode { input } => jwt::decode(&input).map(Output::Jwt),
        Request::TimestampConvert {
            input,
            now,
            utc_offset_minutes,
        } => {
            let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
                Error::InvalidInput(format!("offset out of range: {utc_offset_minutes} minutes"))
            })?;
            time::convert(&input, now, offset).map(Output::Timestamp)
        }
        Request::Emi {
            principal,
            annual_rate_percent,
            tenure_years,
        } => finance::calculate_emi(principal, annual_rate_percent, tenure_years).map(Output::Emi),
        Request::Sip {
            monthly_amount,
            annual_rate_percent,
            years,
        } => Ok(Output::Sip(finance::calculate_sip(
            monthly_amount,
            annual_rate_percent,
            years,
        ))),
        Request::Gst {
            amount,
            rate_percent,
            mode,
        } => {
            let amount = finance::parse_amount(&amount)?;
            Ok(Output::Gst(finance::calculate_gst(amount, rate_percent, mode)))
        }
    }
}
