use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::views::{Analysis, Home, Risk};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
    #[route("/risk")]
    Risk {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analysis(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analysis {},
        "{label}"
    })
}
fn nav_risk(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Risk {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // No config file in the browser; defaults only.
    use_context_provider(DashboardConfig::default);

    register_nav(NavBuilder {
        home: nav_home,
        analysis: nav_analysis,
        risk: nav_risk,
    });

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
