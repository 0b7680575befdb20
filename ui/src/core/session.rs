//! Per-dashboard session: the patient profile plus the most recent upload.
//!
//! A session starts empty. Each upload replaces the previous dataset wholesale, so
//! charts and predictions derived from the old file never outlive it.

use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::dataset::Dataset;
use crate::core::error::ParseError;
use crate::core::profile::PatientProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub dataset: Arc<Dataset>,
    pub loaded_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    id: Uuid,
    profile: PatientProfile,
    upload: Option<Upload>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            profile: PatientProfile::default(),
            upload: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn profile(&self) -> &PatientProfile {
        &self.profile
    }

    pub fn set_profile(&mut self, profile: PatientProfile) {
        self.profile = profile;
    }

    pub fn upload(&self) -> Option<&Upload> {
        self.upload.as_ref()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.upload.as_ref().map(|upload| upload.dataset.as_ref())
    }

    /// Parses `bytes` and replaces the current upload. A parse failure clears it,
    /// so the dashboards never keep showing results for a file they couldn't read.
    pub fn load_csv(&mut self, file_name: impl Into<String>, bytes: &[u8]) -> Result<(), ParseError> {
        let file_name = file_name.into();
        self.upload = None;

        let dataset = Dataset::from_csv_bytes(bytes)?;
        log::info!(
            "session {}: loaded `{file_name}` ({} rows × {} columns)",
            self.id,
            dataset.row_count(),
            dataset.column_count()
        );
        self.upload = Some(Upload {
            file_name,
            dataset: Arc::new(dataset),
            loaded_at: OffsetDateTime::now_utc(),
        });
        Ok(())
    }

    pub fn clear(&mut self) {
        self.upload = None;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Gender;

    #[test]
    fn new_upload_replaces_previous_dataset() {
        let mut session = SessionContext::new();
        assert!(session.dataset().is_none());

        session.load_csv("first.csv", b"a\n1\n2\n").unwrap();
        assert_eq!(session.dataset().unwrap().row_count(), 2);

        session.load_csv("second.csv", b"b,c\n1,2\n").unwrap();
        let upload = session.upload().unwrap();
        assert_eq!(upload.file_name, "second.csv");
        assert_eq!(upload.dataset.column_count(), 2);
    }

    #[test]
    fn failed_upload_clears_session() {
        let mut session = SessionContext::new();
        session.load_csv("good.csv", b"a\n1\n").unwrap();
        assert!(session.load_csv("bad.csv", b"").is_err());
        assert!(session.upload().is_none());
    }

    #[test]
    fn profile_survives_uploads() {
        let mut session = SessionContext::new();
        let profile = PatientProfile::new("Ada", 64, Gender::Female).unwrap();
        session.set_profile(profile.clone());
        session.load_csv("x.csv", b"a\n1\n").unwrap();
        session.clear();
        assert_eq!(session.profile(), &profile);
        assert!(session.dataset().is_none());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(SessionContext::new().id(), SessionContext::new().id());
    }
}
