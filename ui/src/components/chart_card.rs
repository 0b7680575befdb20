use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::prelude::*;

use crate::charts::ChartArtifact;
use crate::report::encode_chart_png;

#[component]
pub fn ChartCard(chart: ChartArtifact, raster_scale: f32) -> Element {
    let mut png = use_signal(|| None::<Result<String, String>>);
    let source = chart.data_uri();
    let file_name = png_file_name(&chart.title);

    let prepare = {
        let chart = chart.clone();
        move |_| {
            let outcome = encode_chart_png(&chart, raster_scale)
                .map(|bytes| format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
                .map_err(|err| err.to_string());
            png.set(Some(outcome));
        }
    };

    rsx! {
        figure { class: "chart-card",
            figcaption { class: "chart-card__title", "{chart.title}" }
            img {
                class: "chart-card__image",
                src: "{source}",
                alt: "{chart.title}",
                width: "{chart.width}",
            }
            div { class: "chart-card__actions",
                match png() {
                    None => rsx! {
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: prepare,
                            "Prepare PNG"
                        }
                    },
                    Some(Ok(href)) => rsx! {
                        a {
                            class: "button button--ghost",
                            href: "{href}",
                            download: "{file_name}",
                            "Download PNG"
                        }
                    },
                    Some(Err(message)) => rsx! {
                        p { class: "chart-card__error", "⚠️ {message}" }
                    },
                }
            }
        }
    }
}

/// `"EEG Time Series"` → `"eeg_time_series.png"`.
fn png_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();
    format!("{stem}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_slugged() {
        assert_eq!(png_file_name("EEG Time Series"), "eeg_time_series.png");
        assert_eq!(png_file_name("Patient 3 Risk (%)"), "patient_3_risk_.png");
    }
}
