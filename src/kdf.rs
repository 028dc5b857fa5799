//! KDF: PBKDF2-HMAC-SHA256
//!
//! key = PBKDF2-HMAC-SHA256(password, salt, KDF_ITERATIONS, KEY_BYTES)
//!
//! The generated client script re-runs the identical derivation through
//! WebCrypto; iteration count, hash, and output length are interpolated
//! from `params` when the fragment is rendered. The password is hashed as
//! its UTF-8 bytes on both sides.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::params::{KDF_ITERATIONS, KEY_BYTES, SALT_BYTES};

pub fn derive_key(password: &str, salt: &[u8; SALT_BYTES]) -> [u8; KEY_BYTES] {
    let mut key = [0u8; KEY_BYTES];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ITERATIONS, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_inputs() {
        let salt = [7u8; SALT_BYTES];
        assert_eq!(derive_key("hunter2", &salt), derive_key("hunter2", &salt));
    }

    #[test]
    fn differs_across_salts() {
        let a = derive_key("hunter2", &[0u8; SALT_BYTES]);
        let b = derive_key("hunter2", &[1u8; SALT_BYTES]);
        assert_ne!(a, b);
    }

    #[test]
    fn differs_across_passwords() {
        let salt = [7u8; SALT_BYTES];
        assert_ne!(derive_key("hunter2", &salt), derive_key("hunter3", &salt));
    }
}
