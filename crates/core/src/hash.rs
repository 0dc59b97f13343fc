use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

use crate::error::Error;

/// Digest algorithms offered by the hash generator.
///
/// `Base64` is not a hash but sits in the same catalog the source tool
/// exposes. `Sha3` is SHA3-512, matching the crypto-js default width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Sha3,
    Base64,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3,
        HashAlgorithm::Base64,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3 => "SHA-3",
            HashAlgorithm::Base64 => "Base64",
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            "sha3" | "sha-3" => Ok(HashAlgorithm::Sha3),
            "base64" => Ok(HashAlgorithm::Base64),
            other => Err(Error::InvalidInput(format!(
                "unknown algorithm: {other}. Valid algorithms: md5, sha1, sha256, sha512, sha3, base64"
            ))),
        }
    }
}

/// Compute the digest of `input` under the given algorithm.
///
/// Hash digests are lowercase hex; `Base64` is a standard-alphabet encoding.
/// Empty input yields an empty string for every algorithm, never a failure.
pub fn digest(input: &str, algorithm: HashAlgorithm) -> String {
    if input.is_empty() {
        return String::new();
    }

    let bytes = input.as_bytes();
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(bytes)),
        HashAlgorithm::Sha1 => hex::encode(sha1::Sha1::digest(bytes)),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
        HashAlgorithm::Sha3 => hex::encode(sha3::Sha3_512::digest(bytes)),
        HashAlgorithm::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
    }
}
