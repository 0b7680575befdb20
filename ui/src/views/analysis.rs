use dioxus::prelude::*;

use crate::charts::HeatmapOutcome;
use crate::components::{ChartCard, PatientSidebar, ReportPanel, SummaryCard};
use crate::core::config::DashboardConfig;
use crate::core::session::SessionContext;
use crate::pipeline::run_visualization;

#[component]
pub fn Analysis() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let session = use_signal(SessionContext::new);

    let charts = {
        let config = config.clone();
        use_memo(move || {
            let session = session.read();
            session.upload()?;
            Some(run_visualization(&session, &config).map_err(|err| err.to_string()))
        })
    };

    let upload_key = session
        .read()
        .upload()
        .map(|upload| format!("{}@{}", upload.file_name, upload.loaded_at.unix_timestamp_nanos()))
        .unwrap_or_default();
    let signal_name = session
        .read()
        .dataset()
        .map(|dataset| dataset.signal_column().name.clone())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-dashboard",
            PatientSidebar { session }

            div { class: "dashboard",
                h1 { "EEG Data Visualization Dashboard" }

                match charts() {
                    None => rsx! {
                        p { class: "dashboard__placeholder", "Upload a CSV file to begin." }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "dashboard__error", "⚠️ {message}" }
                    },
                    Some(Ok(visuals)) => rsx! {
                        SummaryCard { column: signal_name, summary: visuals.summary }

                        div { class: "dashboard__row",
                            ChartCard { chart: visuals.signal.clone(), raster_scale: config.raster_scale }
                            ChartCard { chart: visuals.histogram.clone(), raster_scale: config.raster_scale }
                        }

                        match &visuals.heatmap {
                            HeatmapOutcome::Rendered { chart, .. } => rsx! {
                                ChartCard { chart: chart.clone(), raster_scale: config.raster_scale }
                            },
                            HeatmapOutcome::Skipped(warning) => rsx! {
                                p { class: "dashboard__warning", "{warning.message()}" }
                            },
                        }

                        div { key: "{upload_key}",
                            ReportPanel { session, charts: visuals.clone(), config: config.clone() }
                        }
                    },
                }
            }
        }
    }
}
