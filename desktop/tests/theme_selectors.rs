#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the dashboard components render (sidebar, chart cards,
  prediction cards, export panel) remain present in the shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, instead of shipping a silently
  unstyled desktop build.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-dashboard",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Navbar
    ".navbar__inner",
    ".navbar__link",
    // Sidebar
    ".sidebar__field",
    ".sidebar__label",
    ".sidebar__upload",
    ".sidebar__error",
    // Dashboard
    ".dashboard__row",
    ".dashboard__placeholder",
    ".dashboard__error",
    ".dashboard__warning",
    // Cards
    ".chart-card__title",
    ".chart-card__image",
    ".summary-card__grid",
    ".summary-card__metric-value",
    ".prediction-card--risk",
    ".prediction-card--clear",
    ".prediction-card__tips",
    // Export panel
    ".report-panel__actions",
    ".report-panel__meta--success",
    ".report-panel__meta--error",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn shared_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in shared theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn shared_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}
