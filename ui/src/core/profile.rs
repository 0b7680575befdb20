//! Patient details entered in the dashboard sidebar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ProfileError;

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;
pub const DEFAULT_AGE: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ProfileError::UnknownGender(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    name: String,
    age: u8,
    gender: Gender,
}

impl PatientProfile {
    pub fn new(name: impl Into<String>, age: i64, gender: Gender) -> Result<Self, ProfileError> {
        if age < MIN_AGE as i64 || age > MAX_AGE as i64 {
            return Err(ProfileError::AgeOutOfRange {
                age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        Ok(Self {
            name: name.into(),
            age: age as u8,
            gender,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name as shown on cards; blank names fall back to a placeholder.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Unnamed patient"
        } else {
            trimmed
        }
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::Male,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(PatientProfile::new("A", 1, Gender::Male).is_ok());
        assert!(PatientProfile::new("A", 120, Gender::Male).is_ok());
        assert_eq!(
            PatientProfile::new("A", 0, Gender::Male),
            Err(ProfileError::AgeOutOfRange {
                age: 0,
                min: 1,
                max: 120
            })
        );
        assert!(PatientProfile::new("A", 121, Gender::Other).is_err());
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" Other ".parse::<Gender>(), Ok(Gender::Other));
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn blank_name_uses_placeholder() {
        let profile = PatientProfile::new("  ", 30, Gender::Female).unwrap();
        assert_eq!(profile.display_name(), "Unnamed patient");
    }
}
