//! Shared crate for NeuroScope: CSV ingestion, charts, risk scoring, PDF export,
//! and the Dioxus views both platform binaries mount.

pub mod charts;
pub mod core;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod views;

pub mod components {
    // Shared application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod chart_card;
    mod patient_sidebar;
    mod prediction_card;
    mod report_panel;
    mod summary_card;

    pub use chart_card::ChartCard;
    pub use patient_sidebar::{parse_profile, PatientSidebar};
    pub use prediction_card::PredictionCard;
    pub use report_panel::ReportPanel;
    pub use summary_card::SummaryCard;
}

/// Shared theme, embedded by both binaries.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
