//! Supported encryption padding schemes.

use alloc::string::String;
use alloc::vec::Vec;

use digest::{Digest, DynDigest};
use rand_core::CryptoRngCore;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// PKCS#1 v1.5 encryption padding overhead in bytes.
const PKCS1V15_OVERHEAD: usize = 11;

/// Digest used by OAEP for both the label hash and MGF1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OaepDigest {
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    #[default]
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl OaepDigest {
    /// Digest output size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            OaepDigest::Sha1 => 20,
            OaepDigest::Sha224 => 28,
            OaepDigest::Sha256 => 32,
            OaepDigest::Sha384 => 48,
            OaepDigest::Sha512 => 64,
        }
    }
}

/// Padding scheme applied to every RSA block.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Padding {
    /// RSAES-PKCS1-v1_5.
    #[default]
    Pkcs1v15,
    /// RSAES-OAEP.
    ///
    /// The label is authenticated but not encrypted; decryption only
    /// succeeds with the label used for encryption.
    Oaep {
        /// Label and MGF1 digest.
        digest: OaepDigest,
        /// Optional label. `None` and an empty label are equivalent.
        label: Option<String>,
    },
}

impl Padding {
    /// OAEP without a label.
    pub fn oaep(digest: OaepDigest) -> Self {
        Padding::Oaep {
            digest,
            label: None,
        }
    }

    /// OAEP with an associated `label`.
    pub fn oaep_with_label(digest: OaepDigest, label: impl Into<String>) -> Self {
        Padding::Oaep {
            digest,
            label: Some(label.into()),
        }
    }

    /// Largest message that fits in one block of a `key_size`-byte modulus.
    ///
    /// `k - 11` for PKCS#1 v1.5, `k - 2 * hLen - 2` for OAEP. Returns `None`
    /// when the key is too small to carry any payload.
    pub fn max_message_len(&self, key_size: usize) -> Option<usize> {
        let overhead = match self {
            Padding::Pkcs1v15 => PKCS1V15_OVERHEAD,
            Padding::Oaep { digest, .. } => 2 * digest.output_size() + 2,
        };

        key_size.checked_sub(overhead).filter(|&len| len > 0)
    }

    pub(crate) fn encrypt_block<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        key: &RsaPublicKey,
        block: &[u8],
    ) -> rsa::Result<Vec<u8>> {
        match self {
            Padding::Pkcs1v15 => key.encrypt(rng, Pkcs1v15Encrypt, block),
            Padding::Oaep { digest, label } => {
                key.encrypt(rng, oaep_scheme(*digest, label.as_deref()), block)
            }
        }
    }

    pub(crate) fn decrypt_block<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        key: &RsaPrivateKey,
        block: &[u8],
    ) -> rsa::Result<Vec<u8>> {
        match self {
            Padding::Pkcs1v15 => key.decrypt_blinded(rng, Pkcs1v15Encrypt, block),
            Padding::Oaep { digest, label } => {
                key.decrypt_blinded(rng, oaep_scheme(*digest, label.as_deref()), block)
            }
        }
    }
}

fn oaep_scheme(digest: OaepDigest, label: Option<&str>) -> Oaep {
    match digest {
        OaepDigest::Sha1 => oaep_with::<Sha1>(label),
        OaepDigest::Sha224 => oaep_with::<Sha224>(label),
        OaepDigest::Sha256 => oaep_with::<Sha256>(label),
        OaepDigest::Sha384 => oaep_with::<Sha384>(label),
        OaepDigest::Sha512 => oaep_with::<Sha512>(label),
    }
}

fn oaep_with<D>(label: Option<&str>) -> Oaep
where
    D: 'static + Digest + DynDigest + Send + Sync,
{
    match label {
        Some(label) => Oaep::new_with_label::<D, _>(label),
        None => Oaep::new::<D>(),
    }
}
