//! Chunked RSA encryption and decryption.
//!
//! Messages of any length are accepted: they are split into blocks no
//! larger than [`Padding::max_message_len`] and each block is encrypted
//! separately. The ciphertext is the concatenation of the encrypted blocks,
//! each exactly [`PublicKey::size`] bytes long.
//!
//! Decryption blinds every private-key operation; [`decrypt`] draws the
//! blinding factors from the operating system RNG.

use alloc::vec::Vec;

use log::debug;
use rand_core::{CryptoRngCore, OsRng};

use crate::algorithms::blocks::{decrypt_blocks, encrypt_blocks};
use crate::encoding::{decode_private_key, decode_public_key, KeyFormat};
use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKey};
use crate::padding::Padding;

/// Encrypt `plaintext` for `key` using the operating system RNG.
pub fn encrypt(plaintext: &[u8], key: &PublicKey, padding: &Padding) -> Result<Vec<u8>> {
    encrypt_with_rng(&mut OsRng, plaintext, key, padding)
}

/// Encrypt `plaintext` for `key`, drawing padding randomness from `rng`.
pub fn encrypt_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    plaintext: &[u8],
    key: &PublicKey,
    padding: &Padding,
) -> Result<Vec<u8>> {
    let key_size = key.size();
    let max_input_len = padding
        .max_message_len(key_size)
        .ok_or_else(|| Error::encryption("key too small for padding"))?;

    debug!(
        "encrypting {} bytes in blocks of at most {max_input_len} bytes ({key_size}-byte key)",
        plaintext.len()
    );

    encrypt_blocks(plaintext, max_input_len, key_size, |block| {
        padding
            .encrypt_block(rng, key.as_rsa(), block)
            .map_err(Error::encryption)
    })
}

/// Decrypt `ciphertext` produced by [`encrypt`] with the matching padding.
pub fn decrypt(ciphertext: &[u8], key: &PrivateKey, padding: &Padding) -> Result<Vec<u8>> {
    decrypt_with_rng(&mut OsRng, ciphertext, key, padding)
}

/// Decrypt `ciphertext`, blinding each block operation with `rng`.
pub fn decrypt_with_rng<R: CryptoRngCore>(
    rng: &mut R,
    ciphertext: &[u8],
    key: &PrivateKey,
    padding: &Padding,
) -> Result<Vec<u8>> {
    let key_size = key.size();
    if padding.max_message_len(key_size).is_none() {
        return Err(Error::decryption("key too small for padding"));
    }

    debug!(
        "decrypting {} bytes in {key_size}-byte blocks",
        ciphertext.len()
    );

    decrypt_blocks(ciphertext, key_size, |block| {
        padding
            .decrypt_block(rng, key.as_rsa(), block)
            .map_err(Error::decryption)
    })
}

/// Decode `public_key` as `format`, then [`encrypt`].
pub fn encrypt_pem(
    format: KeyFormat,
    plaintext: &[u8],
    public_key: &str,
    padding: &Padding,
) -> Result<Vec<u8>> {
    let key = decode_public_key(public_key, format)?;
    encrypt(plaintext, &key, padding)
}

/// Decode `private_key` as `format`, then [`decrypt`].
pub fn decrypt_pem(
    format: KeyFormat,
    ciphertext: &[u8],
    private_key: &str,
    padding: &Padding,
) -> Result<Vec<u8>> {
    let key = decode_private_key(private_key, format)?;
    decrypt(ciphertext, &key, padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::OaepDigest;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
    use rsa::RsaPrivateKey;

    const PKCS1_PRIVATE: &str = include_str!("../tests/keys/pkcs1-private.pem");
    const PKCS1_PUBLIC: &str = include_str!("../tests/keys/pkcs1-public.pem");

    fn keys() -> (PublicKey, PrivateKey) {
        (
            decode_public_key(PKCS1_PUBLIC, KeyFormat::Pkcs1).unwrap(),
            decode_private_key(PKCS1_PRIVATE, KeyFormat::Pkcs1).unwrap(),
        )
    }

    fn paddings() -> [Padding; 3] {
        [
            Padding::Pkcs1v15,
            Padding::oaep(OaepDigest::Sha1),
            Padding::oaep_with_label(OaepDigest::Sha256, "louisMax"),
        ]
    }

    #[test]
    fn test_encrypt_decrypt_chunk_boundaries() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let (public_key, private_key) = keys();

        for padding in paddings() {
            let max = padding.max_message_len(public_key.size()).unwrap();
            for len in [0, 1, max - 1, max, max + 1, 2 * max + 3] {
                let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
                let ciphertext =
                    encrypt_with_rng(&mut rng, &plaintext, &public_key, &padding).unwrap();

                let expected_blocks = len.div_ceil(max).max(1);
                assert_eq!(ciphertext.len(), expected_blocks * public_key.size());
                assert_eq!(
                    decrypt_with_rng(&mut rng, &ciphertext, &private_key, &padding).unwrap(),
                    plaintext
                );
            }
        }
    }

    #[test]
    fn test_one_past_max_is_two_blocks() {
        let (public_key, private_key) = keys();
        let padding = Padding::Pkcs1v15;
        let plaintext = vec![0xa5; padding.max_message_len(public_key.size()).unwrap() + 1];

        let ciphertext = encrypt(&plaintext, &public_key, &padding).unwrap();
        assert_eq!(ciphertext.len(), 2 * public_key.size());
        assert_eq!(decrypt(&ciphertext, &private_key, &padding).unwrap(), plaintext);
    }

    #[test]
    fn test_ciphertext_is_randomized() {
        let (public_key, _) = keys();
        let padding = Padding::oaep(OaepDigest::Sha256);
        let first = encrypt(b"same input", &public_key, &padding).unwrap();
        let second = encrypt(b"same input", &public_key, &padding).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_oaep_label_mismatch() {
        let (public_key, private_key) = keys();
        let ciphertext = encrypt(
            b"https://github.com/",
            &public_key,
            &Padding::oaep_with_label(OaepDigest::Sha256, "louisMax"),
        )
        .unwrap();

        for padding in [
            Padding::oaep_with_label(OaepDigest::Sha256, "someone else"),
            Padding::oaep(OaepDigest::Sha256),
            Padding::oaep_with_label(OaepDigest::Sha1, "louisMax"),
        ] {
            assert!(matches!(
                decrypt(&ciphertext, &private_key, &padding),
                Err(Error::Decryption { .. })
            ));
        }
    }

    #[test]
    fn test_bad_ciphertext_length() {
        let (public_key, private_key) = keys();
        let ciphertext = encrypt(b"hello", &public_key, &Padding::Pkcs1v15).unwrap();

        assert!(matches!(
            decrypt(&ciphertext[1..], &private_key, &Padding::Pkcs1v15),
            Err(Error::Decryption { .. })
        ));
        assert!(matches!(
            decrypt(&[], &private_key, &Padding::Pkcs1v15),
            Err(Error::Decryption { .. })
        ));
    }

    #[test]
    fn test_corrupt_second_block_fails_whole_message() {
        let (public_key, private_key) = keys();
        let padding = Padding::oaep(OaepDigest::Sha256);
        let mut ciphertext = encrypt(&[1u8; 300], &public_key, &padding).unwrap();
        let k = public_key.size();
        ciphertext[k + 10] ^= 0x01;

        assert!(matches!(
            decrypt(&ciphertext, &private_key, &padding),
            Err(Error::Decryption { .. })
        ));
    }

    #[test]
    fn test_pem_helpers() {
        let ciphertext = encrypt_pem(
            KeyFormat::Pkcs1,
            b"https://github.com/",
            PKCS1_PUBLIC,
            &Padding::Pkcs1v15,
        )
        .unwrap();
        let plaintext =
            decrypt_pem(KeyFormat::Pkcs1, &ciphertext, PKCS1_PRIVATE, &Padding::Pkcs1v15).unwrap();
        assert_eq!(plaintext, b"https://github.com/");

        assert!(matches!(
            encrypt_pem(KeyFormat::Pkcs8, b"x", PKCS1_PUBLIC, &Padding::Pkcs1v15),
            Err(Error::MalformedKey { .. })
        ));
    }

    #[test]
    fn test_key_too_small_for_padding() {
        let mut rng = ChaCha8Rng::from_seed([3; 32]);
        let private_key = PrivateKey::from(RsaPrivateKey::new(&mut rng, 384).unwrap());
        let public_key = private_key.to_public_key();
        // 2 * 64 + 2 bytes of OAEP overhead exceed a 48-byte modulus.
        let padding = Padding::oaep(OaepDigest::Sha512);

        assert!(matches!(
            encrypt(b"hello", &public_key, &padding),
            Err(Error::Encryption { .. })
        ));
        assert!(matches!(
            decrypt(&[0u8; 48], &private_key, &padding),
            Err(Error::Decryption { .. })
        ));

        let ciphertext = encrypt(b"hello", &public_key, &Padding::Pkcs1v15).unwrap();
        assert_eq!(
            decrypt(&ciphertext, &private_key, &Padding::Pkcs1v15).unwrap(),
            b"hello"
        );
    }
}
