//! AEAD: AES-256-GCM with a detached 16-byte tag.
//!
//! The cipher appends the tag to its output; the bundle format transports
//! the tag as a separate field, so seal splits it off and open reassembles
//! ciphertext || tag before decrypting.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use getrandom::getrandom;

use crate::error::{DecryptionError, EncryptionError};
use crate::params::{KEY_BYTES, NONCE_BYTES, SALT_BYTES, TAG_BYTES};

/// Generate a random 16-byte salt. Used during encryption only.
pub fn salt() -> Result<[u8; SALT_BYTES], EncryptionError> {
    let mut s = [0u8; SALT_BYTES];
    getrandom(&mut s).map_err(|_| EncryptionError)?;
    Ok(s)
}

/// Generate a random 12-byte nonce. Used during encryption only.
pub fn nonce() -> Result<[u8; NONCE_BYTES], EncryptionError> {
    let mut n = [0u8; NONCE_BYTES];
    getrandom(&mut n).map_err(|_| EncryptionError)?;
    Ok(n)
}

/// AEAD seal (encrypt path). Returns the ciphertext and the detached tag.
pub fn aead_seal(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_BYTES]), EncryptionError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| EncryptionError)?;
    let n = Nonce::from_slice(nonce);
    let mut sealed = cipher.encrypt(n, plaintext).map_err(|_| EncryptionError)?;
    if sealed.len() < TAG_BYTES {
        return Err(EncryptionError);
    }
    let split = sealed.len() - TAG_BYTES;
    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&sealed[split..]);
    sealed.truncate(split);
    Ok((sealed, tag))
}

/// AEAD open (decrypt path). Returns DecryptionError on failure.
pub fn aead_open(
    key: &[u8; KEY_BYTES],
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
    tag: &[u8; TAG_BYTES],
) -> Result<Vec<u8>, DecryptionError> {
    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| DecryptionError)?;
    let n = Nonce::from_slice(nonce);
    let mut sealed = Vec::with_capacity(ciphertext.len() + TAG_BYTES);
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);
    cipher.decrypt(n, sealed.as_slice()).map_err(|_| DecryptionError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let key = [0x42u8; KEY_BYTES];
        let nonce = [0x24u8; NONCE_BYTES];
        let (ct, tag) = aead_seal(&key, &nonce, b"plaintext").unwrap();
        assert_eq!(ct.len(), b"plaintext".len());
        let pt = aead_open(&key, &nonce, &ct, &tag).unwrap();
        assert_eq!(pt, b"plaintext");
    }

    #[test]
    fn open_rejects_bad_tag() {
        let key = [0x42u8; KEY_BYTES];
        let nonce = [0x24u8; NONCE_BYTES];
        let (ct, mut tag) = aead_seal(&key, &nonce, b"plaintext").unwrap();
        tag[0] ^= 0x01;
        assert_eq!(aead_open(&key, &nonce, &ct, &tag), Err(DecryptionError));
    }
}
