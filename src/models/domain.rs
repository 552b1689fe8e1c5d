use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pipeline::report::ReportError;

/// Disease domain a report is read against.
///
/// Each domain owns one field dictionary (`Domain::dictionary`), one request
/// schema (`Domain::schema`) and one prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Liver,
    Diabetes,
    HeartAttack,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Liver, Domain::Diabetes, Domain::HeartAttack];

    /// The `Prediction_Type` tag sent to the prediction service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liver => "Liver disease prediction",
            Self::Diabetes => "Diabetes prediction",
            Self::HeartAttack => "Heart attack prediction",
        }
    }

    /// Short command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Liver => "liver",
            Self::Diabetes => "diabetes",
            Self::HeartAttack => "heart-attack",
        }
    }

    /// Endpoint path relative to the prediction API base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Liver => "liver-disease/predict",
            Self::Diabetes => "diabetes-disease/predict",
            Self::HeartAttack => "heart-attack/predict",
        }
    }

    /// Name of the sex/gender indicator field in this domain's request.
    pub fn sex_field(&self) -> &'static str {
        match self {
            Self::Liver => "Gender",
            Self::Diabetes | Self::HeartAttack => "Sex",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the slug (`heart-attack`) or the full tag (`Heart attack prediction`),
/// case-insensitively.
impl FromStr for Domain {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.slug() == wanted || d.as_str().to_lowercase() == wanted)
            .ok_or_else(|| ReportError::UnknownDomain(s.to_string()))
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Domain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
