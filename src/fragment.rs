//! Fragment generator: the self-contained markup + script unit that
//! replaces a protected page's rendered body in full.
//!
//! The bundle is embedded verbatim as inline JSON; the client script
//! parses exactly the field names and encodings the build side wrote, so
//! nothing here may re-shape it.

use regex::Regex;

use crate::bundle::CiphertextBundle;
use crate::error::EncryptionError;
use crate::params::{
    CONTENT_SELECTORS, EMPTY_PASSWORD_MSG, HEADING_ID_PREFIX, KDF_ITERATIONS, KEY_BYTES,
    PLACEHOLDER_ID, TOC_SELECTORS, WRONG_PASSWORD_MSG,
};
use crate::script::CLIENT_SCRIPT;
use crate::toc::TocMode;

/// Per-fragment options resolved by the build pipeline.
#[derive(Debug, Clone, Default)]
pub struct FragmentOptions<'a> {
    pub toc_mode: TocMode,
    /// Inlined prompt stylesheet; `None` emits an unstyled prompt.
    pub stylesheet: Option<&'a str>,
}

/// Render the replacement fragment for a protected page.
///
/// The unit requires no external fetch: markup, optional stylesheet, the
/// embedded bundle, and the client logic are all inline.
pub fn render_fragment(
    bundle: &CiphertextBundle,
    title: &str,
    options: &FragmentOptions<'_>,
) -> Result<String, EncryptionError> {
    let bundle_json = serde_json::to_string(bundle).map_err(|_| EncryptionError)?;
    let content_selectors =
        serde_json::to_string(CONTENT_SELECTORS).map_err(|_| EncryptionError)?;
    let toc_selectors = serde_json::to_string(TOC_SELECTORS).map_err(|_| EncryptionError)?;

    let script = CLIENT_SCRIPT
        .replace("{{bundle}}", &bundle_json)
        .replace("{{iterations}}", &KDF_ITERATIONS.to_string())
        .replace("{{key_bytes}}", &KEY_BYTES.to_string())
        .replace("{{content_selectors}}", &content_selectors)
        .replace("{{toc_selectors}}", &toc_selectors)
        .replace("{{toc_mode}}", options.toc_mode.as_str())
        .replace("{{placeholder_id}}", PLACEHOLDER_ID)
        .replace("{{heading_id_prefix}}", HEADING_ID_PREFIX)
        .replace("{{empty_password_msg}}", EMPTY_PASSWORD_MSG)
        .replace("{{wrong_password_msg}}", WRONG_PASSWORD_MSG);

    let style = match options.stylesheet {
        Some(css) => format!("<style>\n{css}\n</style>\n"),
        None => String::new(),
    };

    let heading = if title.is_empty() {
        "Protected Content".to_string()
    } else {
        html_escape::encode_text(title).into_owned()
    };

    Ok(format!(
        r#"{style}<div id="{PLACEHOLDER_ID}">
  <div class="unlock-box">
    <h3>{heading}</h3>
    <p>This page is password protected. Enter the password to view it.</p>
    <input type="password" id="password-input" placeholder="Enter password" autocomplete="off">
    <button id="unlock-button" type="button">Unlock</button>
    <div id="unlock-error" hidden></div>
  </div>
</div>
<script>{script}</script>
"#
    ))
}

/// Recover the embedded bundle from a generated fragment.
pub fn extract_bundle(fragment: &str) -> Option<CiphertextBundle> {
    let re = Regex::new(r"const PROTECTED_BUNDLE = (\{.*?\});").unwrap();
    let json = re.captures(fragment)?.get(1)?.as_str();
    serde_json::from_str(json).ok()
}
