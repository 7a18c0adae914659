//! Splitting messages into RSA-sized blocks.
//!
//! RSA only transforms values smaller than the modulus, so longer messages
//! are cut into chunks of at most `max_input_len` bytes that are encrypted
//! one by one. Each encrypted chunk is exactly `block_len` bytes (the
//! modulus size), which makes the ciphertext split unambiguous without any
//! boundary markers.

use alloc::vec::Vec;

use crate::errors::{Error, Result};

/// Encrypt `plaintext` chunk by chunk and concatenate the results in order.
///
/// An empty plaintext is still encrypted as one (empty) block so the
/// ciphertext never reveals it was empty.
pub(crate) fn encrypt_blocks<F>(
    plaintext: &[u8],
    max_input_len: usize,
    block_len: usize,
    mut encrypt_block: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    if max_input_len == 0 || block_len == 0 {
        return Err(Error::encryption("block size must be non-zero"));
    }

    let count = plaintext.len().div_ceil(max_input_len).max(1);
    let mut ciphertext = Vec::with_capacity(count * block_len);

    let mut push = |chunk: &[u8]| -> Result<()> {
        let block = encrypt_block(chunk)?;
        if block.len() != block_len {
            return Err(Error::encryption("ciphertext block has unexpected length"));
        }
        ciphertext.extend_from_slice(&block);
        Ok(())
    };

    if plaintext.is_empty() {
        push(&[])?;
    } else {
        for chunk in plaintext.chunks(max_input_len) {
            push(chunk)?;
        }
    }

    Ok(ciphertext)
}

/// Decrypt `ciphertext` as consecutive `block_len`-byte blocks and
/// concatenate the recovered chunks in order.
pub(crate) fn decrypt_blocks<F>(
    ciphertext: &[u8],
    block_len: usize,
    mut decrypt_block: F,
) -> Result<Vec<u8>>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>>,
{
    if block_len == 0 {
        return Err(Error::decryption("block size must be non-zero"));
    }
    if ciphertext.is_empty() {
        return Err(Error::decryption("empty ciphertext"));
    }
    if ciphertext.len() % block_len != 0 {
        return Err(Error::decryption(format_args!(
            "ciphertext length {} is not a multiple of the {block_len}-byte block size",
            ciphertext.len()
        )));
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks_exact(block_len) {
        plaintext.extend_from_slice(&decrypt_block(block)?);
    }

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const BLOCK_LEN: usize = 8;
    const MAX_INPUT: usize = 5;

    /// Length-prefixed, XOR-masked, zero-padded: enough structure to catch
    /// reordered, merged or truncated blocks.
    fn fake_encrypt(chunk: &[u8]) -> Result<Vec<u8>> {
        assert!(chunk.len() <= MAX_INPUT);
        let mut block = vec![0u8; BLOCK_LEN];
        block[0] = chunk.len() as u8;
        for (dst, src) in block[1..].iter_mut().zip(chunk) {
            *dst = src ^ 0x5a;
        }
        Ok(block)
    }

    fn fake_decrypt(block: &[u8]) -> Result<Vec<u8>> {
        assert_eq!(block.len(), BLOCK_LEN);
        let len = block[0] as usize;
        if len > MAX_INPUT {
            return Err(Error::decryption("bad block"));
        }
        Ok(block[1..1 + len].iter().map(|b| b ^ 0x5a).collect())
    }

    fn roundtrip(plaintext: &[u8]) -> Vec<u8> {
        let ciphertext = encrypt_blocks(plaintext, MAX_INPUT, BLOCK_LEN, fake_encrypt).unwrap();
        assert_eq!(ciphertext.len() % BLOCK_LEN, 0);
        decrypt_blocks(&ciphertext, BLOCK_LEN, fake_decrypt).unwrap()
    }

    #[test]
    fn test_roundtrip_lengths() {
        for len in 0..4 * MAX_INPUT + 3 {
            let plaintext: Vec<u8> = (0..len as u8).collect();
            assert_eq!(roundtrip(&plaintext), plaintext, "len {len}");
        }
    }

    #[test]
    fn test_block_count() {
        let count = |len: usize| {
            encrypt_blocks(&vec![7u8; len], MAX_INPUT, BLOCK_LEN, fake_encrypt)
                .unwrap()
                .len()
                / BLOCK_LEN
        };
        assert_eq!(count(0), 1);
        assert_eq!(count(1), 1);
        assert_eq!(count(MAX_INPUT), 1);
        assert_eq!(count(MAX_INPUT + 1), 2);
        assert_eq!(count(3 * MAX_INPUT), 3);
    }

    #[test]
    fn test_block_order_preserved() {
        let plaintext = b"abcdefghijkl";
        let mut seen = Vec::new();
        encrypt_blocks(plaintext, MAX_INPUT, BLOCK_LEN, |chunk| {
            seen.push(chunk.to_vec());
            fake_encrypt(chunk)
        })
        .unwrap();
        assert_eq!(seen, vec![b"abcde".to_vec(), b"fghij".to_vec(), b"kl".to_vec()]);
    }

    #[test]
    fn test_encrypt_failure_aborts() {
        let mut calls = 0;
        let res = encrypt_blocks(&[1u8; 3 * MAX_INPUT], MAX_INPUT, BLOCK_LEN, |chunk| {
            calls += 1;
            if calls == 2 {
                Err(Error::encryption("boom"))
            } else {
                fake_encrypt(chunk)
            }
        });
        assert_eq!(res, Err(Error::encryption("boom")));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_encrypt_rejects_short_block() {
        let res = encrypt_blocks(b"abc", MAX_INPUT, BLOCK_LEN, |_| Ok(vec![0u8; BLOCK_LEN - 1]));
        assert!(matches!(res, Err(Error::Encryption { .. })));
    }

    #[test]
    fn test_encrypt_rejects_zero_sizes() {
        assert!(encrypt_blocks(b"abc", 0, BLOCK_LEN, fake_encrypt).is_err());
        assert!(encrypt_blocks(b"abc", MAX_INPUT, 0, fake_encrypt).is_err());
    }

    #[test]
    fn test_decrypt_rejects_bad_lengths() {
        assert!(matches!(
            decrypt_blocks(&[], BLOCK_LEN, fake_decrypt),
            Err(Error::Decryption { .. })
        ));
        assert!(matches!(
            decrypt_blocks(&[0u8; BLOCK_LEN + 1], BLOCK_LEN, fake_decrypt),
            Err(Error::Decryption { .. })
        ));
        assert!(matches!(
            decrypt_blocks(&[0u8; BLOCK_LEN], 0, fake_decrypt),
            Err(Error::Decryption { .. })
        ));
    }

    #[test]
    fn test_decrypt_failure_aborts() {
        let mut ciphertext = encrypt_blocks(b"0123456789", MAX_INPUT, BLOCK_LEN, fake_encrypt).unwrap();
        ciphertext[BLOCK_LEN] = 0xff;
        assert_eq!(
            decrypt_blocks(&ciphertext, BLOCK_LEN, fake_decrypt),
            Err(Error::decryption("bad block"))
        );
    }
}
