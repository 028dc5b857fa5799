//! Client-side unlock path: re-derive the key and open the bundle.
//!
//! This is the native twin of the generated script's decrypt routine. Both
//! run the same derivation against the embedded salt and reassemble
//! ciphertext || tag before authenticated decryption; the round-trip tests
//! hold this side to the encryptor's parameters.

use zeroize::Zeroizing;

use crate::bundle::{decode_bundle, CiphertextBundle};
use crate::error::{DecryptionError, UnlockError};
use crate::{aead, kdf};

/// Decrypt a bundle with a submitted password.
///
/// An empty password short-circuits before any key derivation. Every other
/// failure (wrong password, tampered ciphertext or tag, corrupted or
/// mis-encoded fields) collapses into the same opaque error; the caller
/// cannot tell which sub-cause occurred.
pub fn unlock(bundle: &CiphertextBundle, password: &str) -> Result<String, UnlockError> {
    if password.is_empty() {
        return Err(UnlockError::EmptyPassword);
    }
    let parts = decode_bundle(bundle)?;
    let key = Zeroizing::new(kdf::derive_key(password, &parts.salt));
    let plaintext = aead::aead_open(&key, &parts.nonce, &parts.ciphertext, &parts.tag)?;
    String::from_utf8(plaintext).map_err(|_| UnlockError::from(DecryptionError))
}
