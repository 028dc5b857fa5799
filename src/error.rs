//! Unified error types.

use std::fmt;

/// Build-time cryptographic failure. Fatal for the page being processed;
/// no partial fragment is ever emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionError;

impl fmt::Display for EncryptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encryption failed")
    }
}

impl std::error::Error for EncryptionError {}

/// Uniform decryption failure. Wrong password, tampered ciphertext, and
/// malformed or mis-encoded bundle fields all produce this same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptionError;

impl fmt::Display for DecryptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decryption failed")
    }
}

impl std::error::Error for DecryptionError {}

/// Unlock-path error. The empty-password check is the only failure allowed
/// to be distinguishable; it fires before any key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockError {
    EmptyPassword,
    Failed,
}

impl fmt::Display for UnlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "please enter a password"),
            Self::Failed => write!(f, "decryption failed"),
        }
    }
}

impl std::error::Error for UnlockError {}

/// Normalize all decrypt failures into the opaque unlock error.
impl From<DecryptionError> for UnlockError {
    fn from(_: DecryptionError) -> Self {
        UnlockError::Failed
    }
}
