//! Ciphertext bundle: the structured text object embedded in the fragment.
//!
//! Fields, all base64-encoded:
//!   salt[16] || iv[12] || authTag[16] || encrypted
//!
//! The JSON field names are part of the wire contract with the client
//! script and must not change.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::error::DecryptionError;
use crate::params::{NONCE_BYTES, SALT_BYTES, TAG_BYTES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextBundle {
    pub salt: String,
    pub iv: String,
    #[serde(rename = "authTag")]
    pub auth_tag: String,
    pub encrypted: String,
}

/// Decoded view of a bundle.
#[derive(Debug, Clone)]
pub struct BundleParts {
    pub salt: [u8; SALT_BYTES],
    pub nonce: [u8; NONCE_BYTES],
    pub tag: [u8; TAG_BYTES],
    pub ciphertext: Vec<u8>,
}

pub fn encode_bundle(
    salt: &[u8; SALT_BYTES],
    nonce: &[u8; NONCE_BYTES],
    tag: &[u8; TAG_BYTES],
    ciphertext: &[u8],
) -> CiphertextBundle {
    CiphertextBundle {
        salt: BASE64.encode(salt),
        iv: BASE64.encode(nonce),
        auth_tag: BASE64.encode(tag),
        encrypted: BASE64.encode(ciphertext),
    }
}

pub fn decode_bundle(bundle: &CiphertextBundle) -> Result<BundleParts, DecryptionError> {
    Ok(BundleParts {
        salt: decode_fixed(&bundle.salt)?,
        nonce: decode_fixed(&bundle.iv)?,
        tag: decode_fixed(&bundle.auth_tag)?,
        ciphertext: BASE64.decode(&bundle.encrypted).map_err(|_| DecryptionError)?,
    })
}

/// Decode a fixed-length field; wrong length or bad base64 is uniform.
fn decode_fixed<const N: usize>(field: &str) -> Result<[u8; N], DecryptionError> {
    let bytes = BASE64.decode(field).map_err(|_| DecryptionError)?;
    bytes.as_slice().try_into().map_err(|_| DecryptionError)
}
