//! Built-in prompt stylesheets.
//!
//! Lookup is non-fatal: an unknown name yields `None` and the fragment is
//! emitted unstyled.

pub fn stylesheet(name: &str) -> Option<&'static str> {
    match name {
        "minimal" => Some(MINIMAL_CSS),
        "dark" => Some(DARK_CSS),
        _ => None,
    }
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["minimal", "dark"]
}

// ---------------------------------------------------------------------------
// Minimal
// ---------------------------------------------------------------------------
const MINIMAL_CSS: &str = r#".unlock-box {
  max-width: 400px;
  margin: 50px auto;
  padding: 20px;
  border: 1px solid #ddd;
  border-radius: 8px;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.unlock-box h3 { text-align: center; margin-bottom: 20px; }
.unlock-box p { margin-bottom: 15px; color: #666; }
.unlock-box input {
  width: 100%;
  padding: 8px;
  margin-bottom: 10px;
  border: 1px solid #ccc;
  border-radius: 4px;
}
.unlock-box button {
  width: 100%;
  padding: 10px;
  background: #007cba;
  color: #fff;
  border: none;
  border-radius: 4px;
  cursor: pointer;
}
.unlock-box button:disabled { opacity: 0.6; cursor: default; }
#unlock-error { color: #cc0000; margin-top: 10px; }
.toc { list-style: none; padding-left: 0; }
.toc-child { list-style: none; padding-left: 1.25rem; }
.toc-link { text-decoration: none; }
.toc-link:hover { text-decoration: underline; }
.toc-number { color: #888; }
"#;

// ---------------------------------------------------------------------------
// Dark
// ---------------------------------------------------------------------------
const DARK_CSS: &str = r#".unlock-box {
  max-width: 400px;
  margin: 50px auto;
  padding: 20px;
  background: #1e222a;
  border: 1px solid #3a3f4b;
  border-radius: 8px;
  color: #abb2bf;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.unlock-box h3 { text-align: center; margin-bottom: 20px; color: #e6e6e6; }
.unlock-box p { margin-bottom: 15px; color: #8b93a1; }
.unlock-box input {
  width: 100%;
  padding: 8px;
  margin-bottom: 10px;
  background: #282c34;
  border: 1px solid #3a3f4b;
  border-radius: 4px;
  color: #e6e6e6;
}
.unlock-box button {
  width: 100%;
  padding: 10px;
  background: #61afef;
  color: #1e222a;
  border: none;
  border-radius: 4px;
  cursor: pointer;
}
.unlock-box button:disabled { opacity: 0.6; cursor: default; }
#unlock-error { color: #e06c75; margin-top: 10px; }
.toc { list-style: none; padding-left: 0; }
.toc-child { list-style: none; padding-left: 1.25rem; }
.toc-link { color: #61afef; text-decoration: none; }
.toc-link:hover { text-decoration: underline; }
.toc-number { color: #8b93a1; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_themes_resolve() {
        for name in available_themes() {
            assert!(stylesheet(name).is_some(), "theme {name} missing");
        }
    }

    #[test]
    fn unknown_theme_is_absent() {
        assert_eq!(stylesheet("cactus"), None);
    }
}
