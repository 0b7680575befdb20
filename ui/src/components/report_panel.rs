use dioxus::prelude::*;

use crate::charts::Visualizations;
use crate::core::config::DashboardConfig;
use crate::core::session::SessionContext;
use crate::pipeline::run_report_export;
use crate::report::ReportDocument;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

impl ExportStatus {
    /// CSS class and message for the inline feedback line.
    fn feedback(&self) -> Option<(&'static str, String)> {
        match self {
            ExportStatus::Idle => None,
            ExportStatus::Done(message) => Some((
                "report-panel__meta report-panel__meta--success",
                format!("✅ {message}"),
            )),
            ExportStatus::Error(err) => Some((
                "report-panel__meta report-panel__meta--error",
                format!("⚠️ {err}"),
            )),
        }
    }
}

#[component]
pub fn ReportPanel(
    session: Signal<SessionContext>,
    charts: Visualizations,
    config: DashboardConfig,
) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let mut report = use_signal(|| None::<ReportDocument>);
    let page_count = charts.artifacts().len();

    // Synchronous: there is no in-progress state to paint.
    let export_handler = move |_| {
        match run_report_export(&session.read(), &charts, &config) {
            Ok(document) => {
                status.set(ExportStatus::Done(delivery_message(&document)));
                report.set(Some(document));
            }
            Err(err) => {
                report.set(None);
                status.set(ExportStatus::Error(err.to_string()));
            }
        }
    };

    let download = report.read().as_ref().map(|doc| (doc.data_uri(), doc.filename()));

    rsx! {
        section { class: "report-panel",
            div { class: "report-panel__header",
                h2 { "Export" }
                span { class: "report-panel__meta", "{page_count} pages" }
            }
            p { "Bundle every chart above into a PDF report, one chart per page." }

            div { class: "report-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: export_handler,
                    "Export Visualizations as PDF"
                }
                if let Some((href, file_name)) = download {
                    a {
                        class: "button button--accent",
                        href: "{href}",
                        download: "{file_name}",
                        "Download PDF Report"
                    }
                }
            }

            if let Some((class_name, message)) = status().feedback() {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn delivery_message(document: &ReportDocument) -> String {
    match crate::report::save_to_export_dir(document) {
        Ok(path) => format!("Report ready; saved to {}", path.display()),
        Err(err) => {
            log::warn!("couldn't save report copy: {err}");
            format!("Report ready ({} pages)", document.page_count())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn delivery_message(document: &ReportDocument) -> String {
    format!("Report ready ({} pages)", document.page_count())
}
