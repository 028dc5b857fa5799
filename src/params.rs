//! Shared parameters.
//!
//! Every cryptographic and structural constant lives here, and the client
//! script template is interpolated from these values when a fragment is
//! rendered. Changing any of them changes both sides of the system at
//! once; hand-duplicating a value elsewhere breaks that parity.

// ---------------------------------------------------------------------------
// Cryptographic parameters
// ---------------------------------------------------------------------------

/// PBKDF2 salt length in bytes.
pub const SALT_BYTES: usize = 16;

/// AES-GCM nonce length in bytes.
pub const NONCE_BYTES: usize = 12;

/// Detached GCM authentication tag length in bytes.
pub const TAG_BYTES: usize = 16;

/// Derived AES-256 key length in bytes.
pub const KEY_BYTES: usize = 32;

/// PBKDF2-HMAC-SHA256 iteration count.
pub const KDF_ITERATIONS: u32 = 10_000;

// ---------------------------------------------------------------------------
// Page structure
// ---------------------------------------------------------------------------

/// Id of the placeholder element the fragment renders and the client
/// replaces wholesale when no content container is found.
pub const PLACEHOLDER_ID: &str = "password-protected-content";

/// Content container selectors, most specific first. Shared by the native
/// DOM updater, the TOC heading scan, and the generated client script.
pub const CONTENT_SELECTORS: &[&str] = &[
    ".content.e-content",
    ".content",
    ".article-entry",
    ".post-content",
    "article",
];

/// TOC container selectors, theme-specific first.
pub const TOC_SELECTORS: &[&str] = &[
    "#toc ol.toc",
    "#toc-footer ol.toc",
    ".toc",
    ".post-toc",
    ".article-toc",
    ".table-of-contents",
    "#toc",
    ".toc-content",
];

/// Prefix for anchors synthesized onto headings that lack an id.
pub const HEADING_ID_PREFIX: &str = "heading-";

// ---------------------------------------------------------------------------
// User-facing messages
// ---------------------------------------------------------------------------

/// Shown before any key derivation when the password field is empty.
pub const EMPTY_PASSWORD_MSG: &str = "Please enter a password.";

/// The one message shown for every decryption failure.
pub const WRONG_PASSWORD_MSG: &str = "Incorrect password. Please try again.";
