//! Decoded RSA key handles.

use core::fmt;

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::encoding::{decode_private_key, decode_public_key, KeyFormat};
use crate::errors::Result;

/// Decoded RSA public key.
///
/// Immutable once constructed; share it freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

/// Decoded RSA private key.
///
/// The underlying key material is zeroized when the last clone is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    inner: RsaPrivateKey,
}

impl PublicKey {
    /// Decode a PEM-armored or bare base64 public key in `format`.
    pub fn from_pem(text: &str, format: KeyFormat) -> Result<Self> {
        decode_public_key(text, format)
    }

    /// Modulus size in bytes. Every ciphertext block and signature produced
    /// for this key has exactly this length.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Borrow the underlying `rsa` key.
    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl PrivateKey {
    /// Decode a PEM-armored or bare base64 private key in `format`.
    pub fn from_pem(text: &str, format: KeyFormat) -> Result<Self> {
        decode_private_key(text, format)
    }

    /// Modulus size in bytes.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Public half of this key.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from(self.inner.to_public_key())
    }

    /// Borrow the underlying `rsa` key.
    pub fn as_rsa(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(inner: RsaPublicKey) -> Self {
        Self { inner }
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(inner: RsaPrivateKey) -> Self {
        Self { inner }
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> Self {
        private_key.to_public_key()
    }
}

impl AsRef<RsaPublicKey> for PublicKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.inner
    }
}

impl AsRef<RsaPrivateKey> for PrivateKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.inner
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}
