/// Failure taxonomy shared by every operation.
///
/// Errors are returned as values: each failed call only affects its own
/// output, and the shell is expected to surface the message verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Error {
    /// Unparseable numeric or base input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed JSON; carries the parser message.
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// JWT structural violation (wrong segment count).
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// JWT segment that is not valid Base64URL-encoded JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Unparseable or out-of-range epoch.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl Error {
    /// Stable identifier for the failure kind, independent of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid-input",
            Error::Syntax(_) => "syntax-error",
            Error::MalformedToken(_) => "malformed-token",
            Error::Decode(_) => "decode-error",
            Error::InvalidTimestamp(_) => "invalid-timestamp",
        }
    }
}
