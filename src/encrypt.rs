//! Build-time encryptor.

use zeroize::Zeroizing;

use crate::bundle::{encode_bundle, CiphertextBundle};
use crate::error::EncryptionError;
use crate::{aead, kdf};

/// Encrypt rendered page content under a password-derived key.
///
/// Salt and nonce are freshly random per call, so repeated encryption of
/// identical input never reuses either. Any primitive failure aborts the
/// page; a partial bundle is never returned.
pub fn encrypt_page(content: &str, password: &str) -> Result<CiphertextBundle, EncryptionError> {
    let salt = aead::salt()?;
    let key = Zeroizing::new(kdf::derive_key(password, &salt));
    let nonce = aead::nonce()?;
    let (ciphertext, tag) = aead::aead_seal(&key, &nonce, content.as_bytes())?;
    Ok(encode_bundle(&salt, &nonce, &tag, &ciphertext))
}
