use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link` elements,
/// so `ui` never needs to know each platform's `Route` enum.
///
/// Call [`register_nav`] before rendering the root (e.g. at the top of `App()`),
/// then use `AppNavbar {}` with no children. Without a builder the navbar falls
/// back to any raw `children` passed in.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     analysis: |label| rsx!( Link { class: "navbar__link", to: Route::Analysis {}, "{label}" } ),
///     risk: |label| rsx!( Link { class: "navbar__link", to: Route::Risk {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    // Each closure returns a Link whose children are exactly the label passed in.
    pub home: fn(label: &str) -> Element,
    pub analysis: fn(label: &str) -> Element,
    pub risk: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub const NAV_HOME: &str = "Home";
pub const NAV_ANALYSIS: &str = "EEG Analysis";
pub const NAV_RISK: &str = "Seizure Risk";

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        [
            (b.home)(NAV_HOME),
            (b.analysis)(NAV_ANALYSIS),
            (b.risk)(NAV_RISK),
        ]
    });

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "NeuroScope" }
                    }
                    span { class: "navbar__brand-subtitle", "EEG dashboards" }
                }

                nav { class: "navbar__links",
                    if let Some([home, analysis, risk]) = links {
                        {home}
                        {analysis}
                        {risk}
                    } else {
                        {children}
                    }
                }
            }
        }
    }
}
