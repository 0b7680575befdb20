use dioxus::prelude::*;

use crate::core::format::format_percent;
use crate::core::profile::PatientProfile;
use crate::scoring::{RiskLabel, RowPrediction};

#[component]
pub fn PredictionCard(profile: PatientProfile, prediction: RowPrediction) -> Element {
    let modifier = match prediction.label {
        RiskLabel::SeizureRisk => "prediction-card--risk",
        RiskLabel::NoRisk => "prediction-card--clear",
    };
    let probability = format_percent(prediction.probability);

    rsx! {
        article { class: "prediction-card {modifier}",
            h3 { class: "prediction-card__name", "{profile.display_name()}" }
            dl { class: "prediction-card__facts",
                dt { "Age" }
                dd { "{profile.age()}" }
                dt { "Gender" }
                dd { "{profile.gender()}" }
                dt { "Prediction" }
                dd { class: "prediction-card__label",
                    "{prediction.label.badge()} {prediction.label} ({probability})"
                }
            }

            if prediction.tips.is_empty() {
                p { class: "prediction-card__placeholder", "No specific precautions." }
            } else {
                h4 { class: "prediction-card__tips-title", "Prevention Tips" }
                ul { class: "prediction-card__tips",
                    for tip in prediction.tips.iter() {
                        li { key: "{tip}", "{tip}" }
                    }
                }
            }
        }
    }
}
