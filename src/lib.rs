//! # Pagelock
//!
//! Password-gated static pages. At build time a page's rendered content is
//! encrypted under a password-derived key; the emitted fragment carries the
//! ciphertext bundle plus the client logic that re-derives the key in the
//! reader's browser and decrypts in place, with no server round trip.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelock::{encrypt_page, render_fragment, unlock, FragmentOptions};
//!
//! let bundle = encrypt_page("<p>secret</p>", "hunter2").unwrap();
//!
//! // Native unlock (same semantics as the generated client script).
//! assert_eq!(unlock(&bundle, "hunter2").unwrap(), "<p>secret</p>");
//!
//! // The self-contained replacement fragment.
//! let fragment = render_fragment(&bundle, "My Post", &FragmentOptions::default()).unwrap();
//! assert!(fragment.contains("password-input"));
//! ```
//!
//! ## Security Properties
//!
//! - **Parameter parity**: PBKDF2-HMAC-SHA256 (10,000 iterations, 32-byte
//!   key) and AES-256-GCM parameters live in one shared constant set; the
//!   client script is generated from it, never hand-duplicated
//! - **Uniform errors**: wrong password, tamper, and malformed bundles are
//!   indistinguishable to the caller
//! - **Freshness**: salt and nonce are random per encryption
//!
//! ## What's NOT Provided
//!
//! - Server-side access control
//! - Key management beyond a single password
//! - Multi-user permissioning

#![deny(unsafe_code)]

// ---------------------------------------------------------------------------
// Internal modules
// ---------------------------------------------------------------------------

mod aead;
mod kdf;

// Script template is generated into the fragment; not stable API.
#[doc(hidden)]
pub mod script;

// ---------------------------------------------------------------------------
// Public modules
// ---------------------------------------------------------------------------

pub mod bundle;
pub mod decrypt;
pub mod dom;
pub mod encrypt;
pub mod error;
pub mod fragment;
pub mod params;
pub mod pipeline;
pub mod themes;
pub mod toc;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use bundle::CiphertextBundle;
pub use decrypt::unlock;
pub use dom::reveal_content;
pub use encrypt::encrypt_page;
pub use error::{DecryptionError, EncryptionError, UnlockError};
pub use fragment::{extract_bundle, render_fragment, FragmentOptions};
pub use pipeline::{capture, PageRecord, PendingPage, SiteConfig};
pub use toc::{annotate_headings, render_toc, Heading, TocMode};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
