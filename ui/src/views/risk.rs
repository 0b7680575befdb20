use dioxus::prelude::*;

use crate::components::{ChartCard, PatientSidebar, PredictionCard};
use crate::core::config::DashboardConfig;
use crate::core::format::format_percent;
use crate::core::session::SessionContext;
use crate::pipeline::run_risk_assessment;
use crate::scoring::MockScorer;

#[component]
pub fn Risk() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let session = use_signal(SessionContext::new);

    let assessment = {
        let config = config.clone();
        use_memo(move || {
            let session = session.read();
            session.upload()?;
            let mut scorer = MockScorer::from_entropy().with_config(&config);
            Some(run_risk_assessment(&session, &mut scorer).map_err(|err| err.to_string()))
        })
    };
    let threshold = format_percent(config.risk_threshold);

    rsx! {
        section { class: "page page-dashboard",
            PatientSidebar { session }

            div { class: "dashboard",
                h1 { "Seizure Risk Prediction Dashboard" }
                p { class: "dashboard__meta", "Rows scoring above {threshold} are flagged as seizure risk." }

                match assessment() {
                    None => rsx! {
                        p { class: "dashboard__placeholder", "Upload a CSV file to begin." }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "dashboard__error", "⚠️ {message}" }
                    },
                    Some(Ok(result)) => rsx! {
                        p { class: "dashboard__meta",
                            "{result.risk_count()} of {result.rows.len()} rows flagged"
                        }
                        for (idx, row) in result.rows.iter().enumerate() {
                            div { key: "{idx}", class: "dashboard__row risk-row",
                                ChartCard { chart: row.gauge.clone(), raster_scale: config.raster_scale }
                                PredictionCard {
                                    profile: result.profile.clone(),
                                    prediction: row.prediction.clone(),
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
