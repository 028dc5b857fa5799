use pagelock::params::{KDF_ITERATIONS, PLACEHOLDER_ID};
use pagelock::{
    encrypt_page, extract_bundle, render_fragment, themes, FragmentOptions, TocMode,
};

fn fragment_with(options: &FragmentOptions<'_>) -> String {
    let bundle = encrypt_page("<p>secret</p>", "hunter2").unwrap();
    render_fragment(&bundle, "My Post", options).unwrap()
}

#[test]
fn bundle_is_embedded_verbatim() {
    let bundle = encrypt_page("<p>secret</p>", "hunter2").unwrap();
    let fragment = render_fragment(&bundle, "My Post", &FragmentOptions::default()).unwrap();
    let extracted = extract_bundle(&fragment).unwrap();
    assert_eq!(extracted, bundle);
}

#[test]
fn bundle_field_names_survive_embedding() {
    let fragment = fragment_with(&FragmentOptions::default());
    for field in ["\"salt\"", "\"iv\"", "\"authTag\"", "\"encrypted\""] {
        assert!(fragment.contains(field), "missing {field}");
    }
}

#[test]
fn kdf_parameters_are_interpolated_from_shared_constants() {
    let fragment = fragment_with(&FragmentOptions::default());
    assert!(fragment.contains(&format!("const KDF_ITERATIONS = {};", KDF_ITERATIONS)));
    assert!(fragment.contains("const KEY_BYTES = 32;"));
    assert!(fragment.contains("hash: 'SHA-256'"));
    // No unexpanded template tokens may survive.
    assert!(!fragment.contains("{{"));
}

#[test]
fn selector_lists_are_shared_with_the_native_side() {
    let fragment = fragment_with(&FragmentOptions::default());
    assert!(fragment.contains("\".content.e-content\""));
    assert!(fragment.contains("\"article\""));
    assert!(fragment.contains("\"#toc ol.toc\""));
}

#[test]
fn toc_mode_is_threaded_explicitly() {
    let hierarchical = fragment_with(&FragmentOptions {
        toc_mode: TocMode::Hierarchical,
        stylesheet: None,
    });
    assert!(hierarchical.contains("const TOC_MODE = 'hierarchical';"));

    let generic = fragment_with(&FragmentOptions {
        toc_mode: TocMode::Generic,
        stylesheet: None,
    });
    assert!(generic.contains("const TOC_MODE = 'generic';"));
}

#[test]
fn fragment_carries_guards_and_messages() {
    let fragment = fragment_with(&FragmentOptions::default());
    // Empty-password short-circuit fires before key derivation.
    assert!(fragment.contains("Please enter a password."));
    // Uniform failure message for every decrypt error.
    assert!(fragment.contains("Incorrect password. Please try again."));
    // Single-flight guard on the unlock trigger.
    assert!(fragment.contains("unlockInFlight"));
    // TOC rebuild deferred one scheduling turn.
    assert!(fragment.contains("setTimeout(rebuildToc, 0)"));
}

#[test]
fn placeholder_and_controls_are_present() {
    let fragment = fragment_with(&FragmentOptions::default());
    assert!(fragment.contains(&format!("id=\"{}\"", PLACEHOLDER_ID)));
    assert!(fragment.contains("id=\"password-input\""));
    assert!(fragment.contains("id=\"unlock-button\""));
    assert!(fragment.contains("id=\"unlock-error\""));
}

#[test]
fn stylesheet_is_inlined_when_present() {
    let css = themes::stylesheet("minimal").unwrap();
    let styled = fragment_with(&FragmentOptions {
        toc_mode: TocMode::Hierarchical,
        stylesheet: Some(css),
    });
    assert!(styled.contains("<style>"));
    assert!(styled.contains(".unlock-box"));

    let unstyled = fragment_with(&FragmentOptions::default());
    assert!(!unstyled.contains("<style>"));
}

#[test]
fn title_is_escaped() {
    let bundle = encrypt_page("<p>secret</p>", "hunter2").unwrap();
    let fragment = render_fragment(
        &bundle,
        "<script>alert(1)</script>",
        &FragmentOptions::default(),
    )
    .unwrap();
    assert!(fragment.contains("&lt;script&gt;"));
    assert!(!fragment.contains("<h3><script>"));
}

#[test]
fn empty_title_falls_back_to_default_heading() {
    let bundle = encrypt_page("<p>secret</p>", "hunter2").unwrap();
    let fragment = render_fragment(&bundle, "", &FragmentOptions::default()).unwrap();
    assert!(fragment.contains("<h3>Protected Content</h3>"));
}

#[test]
fn extract_bundle_rejects_foreign_markup() {
    assert!(extract_bundle("<div>no bundle here</div>").is_none());
}
