use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output style for JSON reformatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    /// 2-space indented.
    Pretty,
    /// Single line, no insignificant whitespace.
    Minified,
}

/// Parse `input` as JSON and re-serialize it in the requested mode.
///
/// Both modes are idempotent. A parse failure is an [`Error::Syntax`]
/// carrying the parser's own message.
pub fn reformat(input: &str, mode: JsonMode) -> Result<String, Error> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| Error::Syntax(e.to_string()))?;

    let output = match mode {
        JsonMode::Pretty => serde_json::to_string_pretty(&value),
        JsonMode::Minified => serde_json::to_string(&value),
    }
    .map_err(|e| Error::Syntax(e.to_string()))?;

    Ok(output)
}
