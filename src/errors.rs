//! Error types.

use alloc::string::{String, ToString};
use core::fmt;

/// Alias for [`core::result::Result`] with the `gateway-rsa` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key text is not valid PEM/base64/DER for the declared format.
    #[error("malformed key: {reason}")]
    MalformedKey {
        /// Underlying decoder message.
        reason: String,
    },

    /// PKCS#8 or SubjectPublicKeyInfo wrapper declares a non-RSA algorithm.
    #[error("unsupported key algorithm: {oid}")]
    UnsupportedAlgorithm {
        /// Dotted form of the declared algorithm OID.
        oid: String,
    },

    /// Key format name is neither `PKCS1` nor `PKCS8`.
    #[error("unknown key format: {0}")]
    UnknownKeyFormat(String),

    /// Encryption failed.
    #[error("encryption error: {reason}")]
    Encryption {
        /// Cause of the failure.
        reason: String,
    },

    /// Decryption failed.
    #[error("decryption error: {reason}")]
    Decryption {
        /// Cause of the failure.
        reason: String,
    },

    /// The private key could not produce a signature.
    #[error("signing error: {reason}")]
    Signing {
        /// Cause of the failure.
        reason: String,
    },

    /// Signature input could not be checked (e.g. not valid base64).
    #[error("invalid verification input: {reason}")]
    VerificationInput {
        /// Cause of the failure.
        reason: String,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl fmt::Display) -> Self {
        Error::MalformedKey {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn encryption(reason: impl fmt::Display) -> Self {
        Error::Encryption {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decryption(reason: impl fmt::Display) -> Self {
        Error::Decryption {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn signing(reason: impl fmt::Display) -> Self {
        Error::Signing {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn verification_input(reason: impl fmt::Display) -> Self {
        Error::VerificationInput {
            reason: reason.to_string(),
        }
    }
}
