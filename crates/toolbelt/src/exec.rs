use crate::prelude::{println, *};
use toolbelt_core::engine::{execute, Request};
use toolbelt_core::error::Error as OperationError;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Operation request as JSON, e.g.
    /// '{"operation": "base-convert", "input": "255", "from": 10, "to": 16}'
    #[arg(value_name = "REQUEST")]
    pub request: String,
}

pub fn run(options: Options, global: crate::Global) -> Result<()> {
    let request: Request = serde_json::from_str(&options.request)
        .map_err(|e| eyre!("Invalid request JSON: {e}"))?;

    if global.verbose {
        println!("Executing {:?}...", request);
    }

    let rendered = match execute(request) {
        Ok(output) => serde_json::to_string_pretty(&output)?,
        Err(err) => serde_json::to_string_pretty(&failure_value(&err))?,
    };
    println!("{}", rendered);

    Ok(())
}

/// Failures are part of the operation contract, so they are printed as a
/// value rather than reported as a process error.
fn failure_value(err: &OperationError) -> serde_json::Value {
    serde_json::json!({
        "result": "failure",
        "kind": err.kind(),
        "message": err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_value_shape() {
        let err = OperationError::MalformedToken("wrong segment count".to_string());
        let value = failure_value(&err);

        assert_eq!(value["result"], "failure");
        assert_eq!(value["kind"], "malformed-token");
        assert_eq!(value["message"], "Malformed token: wrong segment count");
    }

    #[test]
    fn test_request_parses_from_cli_json() {
        let raw = r#"{"operation": "hash", "input": "hello", "algorithm": "md5"}"#;
        let request: Request = serde_json::from_str(raw).unwrap();
        let output = execute(request).unwrap();
        assert_eq!(
            serde_json::to_value(&output).unwrap()["value"],
            "5d41402abc4b2a76b9719d911017c592"
        );
    }
}
