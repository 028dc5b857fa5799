//! Build pipeline handoff.
//!
//! The site generator calls in twice per page: `capture` before rendering
//! (takes the password out of the record and marks the page protected) and
//! `PendingPage::seal` after rendering (encrypts and produces the
//! replacement fragment). The password lives only inside the pending value
//! and is consumed by the seal step; it is never logged or serialized.

use zeroize::Zeroizing;

use crate::encrypt::encrypt_page;
use crate::error::EncryptionError;
use crate::fragment::{render_fragment, FragmentOptions};
use crate::themes;
use crate::toc::TocMode;

/// Page record as handed over by the site pipeline.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub title: String,
    pub content: String,
    pub password: Option<String>,
}

/// Site-level configuration relevant to protected pages.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    pub toc_mode: TocMode,
    /// Name of a built-in prompt stylesheet; absence is non-fatal.
    pub theme: Option<String>,
}

/// A page marked protected between the two pipeline phases.
pub struct PendingPage {
    title: String,
    password: Zeroizing<String>,
}

/// Pre-render phase. Removes the password from the record so nothing
/// downstream can retain it; an empty password counts as absent.
pub fn capture(page: &mut PageRecord) -> Option<PendingPage> {
    let password = page.password.take().filter(|p| !p.is_empty())?;
    Some(PendingPage {
        title: page.title.clone(),
        password: Zeroizing::new(password),
    })
}

impl PendingPage {
    /// Post-render phase. Encrypts the rendered content and renders the
    /// replacement fragment, consuming the pending state and its password.
    pub fn seal(self, rendered: &str, config: &SiteConfig) -> Result<String, EncryptionError> {
        let bundle = encrypt_page(rendered, &self.password)?;

        let stylesheet = config.theme.as_deref().and_then(|name| {
            let css = themes::stylesheet(name);
            if css.is_none() {
                log::warn!("unknown theme '{name}', emitting unstyled prompt");
            }
            css
        });

        let options = FragmentOptions {
            toc_mode: config.toc_mode,
            stylesheet,
        };
        let fragment = render_fragment(&bundle, &self.title, &options)?;
        log::info!("sealed protected page '{}'", self.title);
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decrypt::unlock;
    use crate::fragment::extract_bundle;

    fn record(password: Option<&str>) -> PageRecord {
        PageRecord {
            title: "Post".to_string(),
            content: "<p>draft</p>".to_string(),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn unprotected_pages_pass_through() {
        assert!(capture(&mut record(None)).is_none());
    }

    #[test]
    fn empty_password_counts_as_absent() {
        assert!(capture(&mut record(Some(""))).is_none());
    }

    #[test]
    fn capture_removes_password_from_record() {
        let mut page = record(Some("hunter2"));
        let pending = capture(&mut page);
        assert!(pending.is_some());
        assert_eq!(page.password, None);
    }

    #[test]
    fn seal_produces_an_unlockable_fragment() {
        let mut page = record(Some("hunter2"));
        let pending = capture(&mut page).unwrap();
        let fragment = pending.seal("<p>rendered</p>", &SiteConfig::default()).unwrap();

        let bundle = extract_bundle(&fragment).unwrap();
        assert_eq!(unlock(&bundle, "hunter2").unwrap(), "<p>rendered</p>");
    }

    #[test]
    fn fragment_never_contains_password_or_plaintext() {
        let mut page = record(Some("hunter2"));
        let pending = capture(&mut page).unwrap();
        let fragment = pending.seal("<p>rendered</p>", &SiteConfig::default()).unwrap();
        assert!(!fragment.contains("hunter2"));
        assert!(!fragment.contains("<p>rendered</p>"));
    }
}
