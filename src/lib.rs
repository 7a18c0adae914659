#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

//! RSA helpers for API integrations that exchange PEM keys and base64
//! ciphertexts or signatures, as payment gateways commonly do.
//!
//! # Overview
//!
//! - [`armor`]: put PEM boundaries and 64-column line breaks around a bare
//!   base64 key, or strip them again.
//! - [`encoding`]: decode PKCS#1 or PKCS#8 key text into a [`PublicKey`] or
//!   [`PrivateKey`]. The format is always chosen by the caller.
//! - [`cipher`]: RSA encryption with PKCS#1 v1.5 or OAEP padding. Input of
//!   any length is split into RSA-sized blocks.
//! - [`signing`]: `RSA` (SHA-1) and `RSA2` (SHA-256) PKCS#1 v1.5 signatures
//!   encoded as base64.
//!
//! RSA arithmetic, padding and randomness come from the [`rsa`] crate.
//!
//! # Usage
//!
//! ## OAEP encryption
//!
//! ```no_run
//! # fn main() -> Result<(), gateway_rsa::Error> {
//! use gateway_rsa::{cipher, KeyFormat, OaepDigest, Padding, PrivateKey, PublicKey};
//!
//! # let public_pem = "";
//! # let private_pem = "";
//! let public_key = PublicKey::from_pem(public_pem, KeyFormat::Pkcs1)?;
//! let private_key = PrivateKey::from_pem(private_pem, KeyFormat::Pkcs1)?;
//!
//! let padding = Padding::oaep_with_label(OaepDigest::Sha256, "louisMax");
//! let ciphertext = cipher::encrypt(b"https://github.com/", &public_key, &padding)?;
//! let plaintext = cipher::decrypt(&ciphertext, &private_key, &padding)?;
//! assert_eq!(plaintext, b"https://github.com/");
//! # Ok(())
//! # }
//! ```
//!
//! ## RSA2 signatures
//!
//! Gateways often hand out the PKCS#8 private key as a single base64 line;
//! it can be decoded as is, or armored first with [`armor::format_private_key`].
//!
//! ```no_run
//! # fn main() -> Result<(), gateway_rsa::Error> {
//! use gateway_rsa::{armor, signing, KeyFormat, PrivateKey, PublicKey, SignatureAlgorithm};
//!
//! # let raw_private_key = "";
//! # let raw_public_key = "";
//! let private_key = PrivateKey::from_pem(&armor::format_private_key(raw_private_key), KeyFormat::Pkcs8)?;
//! let public_key = PublicKey::from_pem(raw_public_key, KeyFormat::Pkcs8)?;
//!
//! let payload = br#"data={"a":"b"}"#;
//! let signature = signing::sign(payload, SignatureAlgorithm::Rsa2, &private_key)?;
//! assert!(signing::verify(payload, &signature, SignatureAlgorithm::Rsa2, &public_key)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Algorithm names
//!
//! [`SignatureAlgorithm::from_name`] maps every name other than `"RSA"` to
//! `RSA2`. A misspelled name therefore signs with SHA-256 instead of failing;
//! a `warn!` record is emitted through the [`log`] facade when that happens.

extern crate alloc;

pub mod armor;
pub mod cipher;
pub mod encoding;
pub mod errors;
pub mod hash;
pub mod padding;
pub mod signing;

mod algorithms;
mod key;

pub use pkcs1;
pub use pkcs8;
pub use rsa;

pub use crate::{
    armor::KeyKind,
    encoding::{decode_private_key, decode_public_key, KeyFormat},
    errors::{Error, Result},
    hash::SignatureAlgorithm,
    key::{PrivateKey, PublicKey},
    padding::{OaepDigest, Padding},
};
