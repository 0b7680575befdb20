use dioxus::prelude::*;

use crate::core::profile::{Gender, PatientProfile, MAX_AGE, MIN_AGE};
use crate::core::session::SessionContext;

/// Patient details plus the CSV upload. Writes straight into the dashboard's session.
#[component]
pub fn PatientSidebar(session: Signal<SessionContext>) -> Element {
    let mut session = session;
    let initial = session.peek().profile().clone();

    let mut name = use_signal(|| initial.name().to_string());
    let mut age = use_signal(|| initial.age().to_string());
    let mut gender = use_signal(|| initial.gender());
    let mut profile_error = use_signal(|| None::<String>);
    let mut upload_error = use_signal(|| None::<String>);

    let mut apply_profile = move || match parse_profile(&name(), &age(), gender()) {
        Ok(profile) => {
            session.write().set_profile(profile);
            profile_error.set(None);
        }
        Err(message) => profile_error.set(Some(message)),
    };

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&file_name).await else {
            upload_error.set(Some(format!("Error processing file: couldn't read `{file_name}`")));
            return;
        };

        let outcome = session.write().load_csv(file_name, &bytes);
        match outcome {
            Ok(()) => upload_error.set(None),
            Err(err) => {
                log::warn!("upload rejected: {err}");
                upload_error.set(Some(format!("Error processing file: {err}")));
            }
        }
    };

    let upload_label = session
        .read()
        .upload()
        .map(|upload| {
            format!(
                "{} · {} rows",
                upload.file_name,
                upload.dataset.row_count()
            )
        });

    rsx! {
        aside { class: "sidebar",
            h2 { class: "sidebar__title", "Patient Info" }

            label { class: "sidebar__field",
                span { class: "sidebar__label", "Patient Name" }
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt| {
                        name.set(evt.value());
                        apply_profile();
                    },
                }
            }

            label { class: "sidebar__field",
                span { class: "sidebar__label", "Age" }
                input {
                    r#type: "number",
                    min: "{MIN_AGE}",
                    max: "{MAX_AGE}",
                    value: "{age}",
                    oninput: move |evt| {
                        age.set(evt.value());
                        apply_profile();
                    },
                }
            }

            label { class: "sidebar__field",
                span { class: "sidebar__label", "Gender" }
                select {
                    value: "{gender}",
                    onchange: move |evt| {
                        if let Ok(selected) = evt.value().parse::<Gender>() {
                            gender.set(selected);
                            apply_profile();
                        }
                    },
                    for choice in Gender::ALL {
                        option { key: "{choice}", value: "{choice}", "{choice}" }
                    }
                }
            }

            if let Some(message) = profile_error() {
                p { class: "sidebar__error", "{message}" }
            }

            div { class: "sidebar__upload",
                span { class: "sidebar__label", "Upload EEG CSV File" }
                input {
                    r#type: "file",
                    accept: ".csv",
                    multiple: false,
                    onchange: on_file,
                }
                if let Some(label) = upload_label {
                    p { class: "sidebar__meta", "{label}" }
                }
                if let Some(message) = upload_error() {
                    p { class: "sidebar__error", "{message}" }
                }
            }
        }
    }
}

/// Validates raw sidebar inputs into a profile.
pub fn parse_profile(name: &str, age: &str, gender: Gender) -> Result<PatientProfile, String> {
    let age: i64 = age
        .trim()
        .parse()
        .map_err(|_| format!("Age must be a whole number between {MIN_AGE} and {MAX_AGE}."))?;
    PatientProfile::new(name.trim(), age, gender).map_err(|err| err.to_string())
}
