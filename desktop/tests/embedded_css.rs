#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present & non‑trivial.
//!
//! The desktop binary inlines `ui/assets/theme/main.css` via `ui::THEME_CSS`; a
//! truncation or path break would otherwise only show up as unstyled windows.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_matches_ui_export() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", ".sidebar", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
