use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::core::stats::SignalSummary;

#[component]
pub fn SummaryCard(column: String, summary: Option<SignalSummary>) -> Element {
    let metrics: Vec<(&str, String)> = match summary {
        Some(s) => vec![
            ("Samples", s.count.to_string()),
            ("Mean", format_number(s.mean, 3)),
            ("Std dev", format_number(s.std_dev, 3)),
            ("Min", format_number(s.min, 3)),
            ("Max", format_number(s.max, 3)),
        ],
        None => Vec::new(),
    };

    rsx! {
        section { class: "summary-card",
            div { class: "summary-card__header",
                h2 { "Signal summary" }
                span { class: "summary-card__meta", "column `{column}`" }
            }
            if metrics.is_empty() {
                p { class: "summary-card__placeholder", "No numeric samples in the signal column." }
            } else {
                div { class: "summary-card__grid",
                    for (label, value) in metrics {
                        div { key: "{label}", class: "summary-card__metric",
                            span { class: "summary-card__metric-label", "{label}" }
                            span { class: "summary-card__metric-value", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
