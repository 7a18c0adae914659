//! RSASSA-PKCS1-v1_5 signatures with base64 transport encoding.
//!
//! The payload is hashed with the digest selected by [`SignatureAlgorithm`]
//! and the digest is signed together with its `DigestInfo` prefix, which is
//! what `SHA1withRSA` / `SHA256withRSA` verifiers expect.
//!
//! Private-key operations are blinded with randomness from the operating
//! system RNG unless a generator is passed to [`sign_with_rng`].

use alloc::string::String;
use alloc::vec::Vec;

use base64ct::{Base64, Encoding};
use digest::Digest;
use pkcs8::AssociatedOid;
use rand_core::{CryptoRngCore, OsRng};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::Pkcs1v15Sign;
use sha1::Sha1;
use sha2::Sha256;
use signature::hazmat::PrehashVerifier;

use crate::errors::{Error, Result};
use crate::hash::SignatureAlgorithm;
use crate::key::{PrivateKey, PublicKey};

/// Sign `payload` and return the signature as standard base64.
pub fn sign(payload: &[u8], algorithm: SignatureAlgorithm, key: &PrivateKey) -> Result<String> {
    sign_with_rng(&mut OsRng, payload, algorithm, key)
}

/// Sign `payload`, blinding the private-key operation with `rng`.
///
/// PKCS#1 v1.5 signatures are deterministic; `rng` never changes the output.
pub fn sign_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    payload: &[u8],
    algorithm: SignatureAlgorithm,
    key: &PrivateKey,
) -> Result<String> {
    let signature = sign_digest(rng, payload, algorithm, key)?;
    Ok(Base64::encode_string(&signature))
}

/// Sign `payload` using an algorithm name, see [`SignatureAlgorithm::from_name`].
pub fn sign_with_name(payload: &[u8], algorithm: &str, key: &PrivateKey) -> Result<String> {
    sign(payload, SignatureAlgorithm::from_name(algorithm), key)
}

/// Sign `payload` and return the raw signature bytes.
pub fn sign_raw(payload: &[u8], algorithm: SignatureAlgorithm, key: &PrivateKey) -> Result<Vec<u8>> {
    sign_digest(&mut OsRng, payload, algorithm, key)
}

/// Check a base64 `signature` over `payload`.
///
/// Returns `Ok(false)` when the signature does not match. Fails only when
/// `signature` is not valid base64.
pub fn verify(
    payload: &[u8],
    signature: &str,
    algorithm: SignatureAlgorithm,
    key: &PublicKey,
) -> Result<bool> {
    let signature = Base64::decode_vec(signature.trim()).map_err(Error::verification_input)?;
    verify_raw(payload, &signature, algorithm, key)
}

/// Check raw `signature` bytes over `payload`.
pub fn verify_raw(
    payload: &[u8],
    signature: &[u8],
    algorithm: SignatureAlgorithm,
    key: &PublicKey,
) -> Result<bool> {
    let signature = Signature::try_from(signature).map_err(Error::verification_input)?;
    let hashed = algorithm.digest(payload);
    let valid = match algorithm {
        SignatureAlgorithm::Rsa => verify_prehashed::<Sha1>(key, &hashed, &signature),
        SignatureAlgorithm::Rsa2 => verify_prehashed::<Sha256>(key, &hashed, &signature),
    };
    Ok(valid)
}

fn sign_digest<R: CryptoRngCore>(
    rng: &mut R,
    payload: &[u8],
    algorithm: SignatureAlgorithm,
    key: &PrivateKey,
) -> Result<Vec<u8>> {
    let hashed = algorithm.digest(payload);
    match algorithm {
        SignatureAlgorithm::Rsa => sign_prehashed::<Sha1, R>(rng, key, &hashed),
        SignatureAlgorithm::Rsa2 => sign_prehashed::<Sha256, R>(rng, key, &hashed),
    }
}

fn sign_prehashed<D, R>(rng: &mut R, key: &PrivateKey, hashed: &[u8]) -> Result<Vec<u8>>
where
    D: Digest + AssociatedOid,
    R: CryptoRngCore,
{
    key.as_rsa()
        .sign_with_rng(rng, Pkcs1v15Sign::new::<D>(), hashed)
        .map_err(Error::signing)
}

fn verify_prehashed<D>(key: &PublicKey, hashed: &[u8], signature: &Signature) -> bool
where
    D: Digest + AssociatedOid,
{
    let verifying_key = VerifyingKey::<D>::new(key.as_rsa().clone());
    verifying_key.verify_prehash(hashed, signature).is_ok()
}
