#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
