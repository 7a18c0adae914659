//! PKCS#1 and PKCS#8 key decoding.
//!
//! The container format is never guessed: callers say which one the key
//! text holds, and a blob in the other format is rejected.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use base64ct::{Base64, Encoding};
use log::debug;
use pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use pkcs8::{AlgorithmIdentifierRef, PrivateKeyInfo};
use rsa::{RsaPrivateKey, RsaPublicKey};
use spki::SubjectPublicKeyInfoRef;
use zeroize::Zeroizing;

use crate::armor::unarmor;
use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKey};

/// Container format of an encoded RSA key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyFormat {
    /// Bare `RSAPrivateKey` / `RSAPublicKey` structures (RFC 8017).
    #[cfg_attr(feature = "serde", serde(rename = "PKCS1"))]
    Pkcs1,
    /// `PrivateKeyInfo` (RFC 5208) or `SubjectPublicKeyInfo` (RFC 5280)
    /// wrapping an RSA key.
    #[cfg_attr(feature = "serde", serde(rename = "PKCS8"))]
    Pkcs8,
}

impl KeyFormat {
    /// Canonical name, `"PKCS1"` or `"PKCS8"`.
    pub const fn name(self) -> &'static str {
        match self {
            KeyFormat::Pkcs1 => "PKCS1",
            KeyFormat::Pkcs8 => "PKCS8",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("PKCS1") {
            Ok(KeyFormat::Pkcs1)
        } else if s.eq_ignore_ascii_case("PKCS8") {
            Ok(KeyFormat::Pkcs8)
        } else {
            Err(Error::UnknownKeyFormat(s.to_string()))
        }
    }
}

/// Decode a PEM-armored or bare base64 private key.
pub fn decode_private_key(text: &str, format: KeyFormat) -> Result<PrivateKey> {
    let der = decode_body(text)?;
    decode_private_key_der(&der, format)
}

/// Decode a PEM-armored or bare base64 public key.
pub fn decode_public_key(text: &str, format: KeyFormat) -> Result<PublicKey> {
    let der = decode_body(text)?;
    decode_public_key_der(&der, format)
}

/// Decode a DER-encoded private key.
pub fn decode_private_key_der(der: &[u8], format: KeyFormat) -> Result<PrivateKey> {
    debug!("decoding {format} private key ({} DER bytes)", der.len());

    let key = match format {
        KeyFormat::Pkcs1 => RsaPrivateKey::from_pkcs1_der(der).map_err(Error::malformed)?,
        KeyFormat::Pkcs8 => {
            let private_key_info = PrivateKeyInfo::try_from(der).map_err(Error::malformed)?;
            verify_algorithm_id(&private_key_info.algorithm)?;
            RsaPrivateKey::try_from(private_key_info).map_err(Error::malformed)?
        }
    };

    Ok(PrivateKey::from(key))
}

/// Decode a DER-encoded public key.
pub fn decode_public_key_der(der: &[u8], format: KeyFormat) -> Result<PublicKey> {
    debug!("decoding {format} public key ({} DER bytes)", der.len());

    let key = match format {
        KeyFormat::Pkcs1 => RsaPublicKey::from_pkcs1_der(der).map_err(Error::malformed)?,
        KeyFormat::Pkcs8 => {
            let spki = SubjectPublicKeyInfoRef::try_from(der).map_err(Error::malformed)?;
            verify_algorithm_id(&spki.algorithm)?;
            RsaPublicKey::try_from(spki).map_err(Error::malformed)?
        }
    };

    Ok(PublicKey::from(key))
}

/// Only `rsaEncryption` keys are unwrapped.
fn verify_algorithm_id(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<()> {
    if algorithm.oid == pkcs1::ALGORITHM_OID {
        Ok(())
    } else {
        Err(Error::UnsupportedAlgorithm {
            oid: algorithm.oid.to_string(),
        })
    }
}

fn decode_body(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    let body: Zeroizing<String> = Zeroizing::new(unarmor(text));
    if body.is_empty() {
        return Err(Error::malformed("no base64 key data"));
    }

    Base64::decode_vec(&body)
        .map(Zeroizing::new)
        .map_err(Error::malformed)
}
