use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "NeuroScope" }
            p { "Explore EEG recordings and flag rows that may precede a seizure." }
            p {
                "Upload a CSV export with a header row. The first column is treated as the signal; "
                "any further numeric columns feed the correlation heatmap."
            }

            ul { class: "page-home__features",
                li { strong { "EEG Analysis" } " · time series, distribution and correlation charts, exportable as a PDF report." }
                li { strong { "Seizure Risk" } " · a per-row risk gauge with prevention tips tailored to the patient." }
                li { strong { "Local only" } " · files are parsed in memory and never leave this device." }
            }
            p { class: "page-home__note",
                "Risk scores are placeholders drawn at random until a trained model is connected. "
                "They are not a diagnosis."
            }
        }
    }
}
