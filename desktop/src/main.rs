#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;

use ui::views::{Analysis, Home, Risk};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/analysis")]
    Analysis {},
    #[route("/risk")]
    Risk {},
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    log::info!("starting NeuroScope desktop v{}", env!("CARGO_PKG_VERSION"));

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("NeuroScope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_analysis(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Analysis {}, "{label}" })
}
fn nav_risk(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Risk {}, "{label}" })
}

#[component]
fn App() -> Element {
    use_context_provider(DashboardConfig::load);

    register_nav(NavBuilder {
        home: nav_home,
        analysis: nav_analysis,
        risk: nav_risk,
    });

    rsx! {
        // Always inline the embedded theme (no external file dependency for desktop builds)
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> { }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
