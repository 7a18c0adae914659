//! Signature algorithm names and their digests.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use log::warn;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Signature algorithm identifiers used by gateway APIs.
///
/// Both sign with RSASSA-PKCS1-v1_5; they differ in the digest.
///
/// Names are parsed leniently: anything other than `"RSA"` falls back to
/// [`SignatureAlgorithm::Rsa2`]. This keeps compatibility with gateways that
/// treat RSA2 as the default, but it also means a typo such as `"RSA_2"`
/// silently selects SHA-256. A warning is logged whenever the fallback is
/// taken.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String")
)]
pub enum SignatureAlgorithm {
    /// `RSA`: SHA-1 digest.
    #[cfg_attr(feature = "serde", serde(rename = "RSA"))]
    Rsa,
    /// `RSA2`: SHA-256 digest.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "RSA2"))]
    Rsa2,
}

impl SignatureAlgorithm {
    /// Canonical name, `"RSA"` or `"RSA2"`.
    pub const fn name(self) -> &'static str {
        match self {
            SignatureAlgorithm::Rsa => "RSA",
            SignatureAlgorithm::Rsa2 => "RSA2",
        }
    }

    /// Parse an algorithm name, falling back to `Rsa2` for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "RSA" => SignatureAlgorithm::Rsa,
            "RSA2" => SignatureAlgorithm::Rsa2,
            other => {
                warn!("unrecognized signature algorithm {other:?}, using RSA2 (SHA-256)");
                SignatureAlgorithm::Rsa2
            }
        }
    }

    /// Digest output size in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            SignatureAlgorithm::Rsa => 20,
            SignatureAlgorithm::Rsa2 => 32,
        }
    }

    /// Hash `payload` with this algorithm's digest.
    pub fn digest(self, payload: &[u8]) -> Vec<u8> {
        match self {
            SignatureAlgorithm::Rsa => Sha1::digest(payload).to_vec(),
            SignatureAlgorithm::Rsa2 => Sha256::digest(payload).to_vec(),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for SignatureAlgorithm {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for SignatureAlgorithm {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
