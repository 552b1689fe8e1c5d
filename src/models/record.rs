use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Domain;

/// Demographics captured from the report. Every field is optional: a label
/// that never appears (or whose value does not parse) leaves it `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientInformation {
    pub name: Option<String>,
    pub age: Option<i64>,
    /// Capitalized as captured ("Male", "Female", ...).
    pub sex: Option<String>,
}

/// Intermediate scan result.
///
/// `panel_results` holds only values that were observed and coerced; an
/// absent key means "not in the report", which is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub patient_information: PatientInformation,
    pub panel_results: BTreeMap<String, f64>,
}

impl ParsedRecord {
    pub fn panel_value(&self, field: &str) -> Option<f64> {
        self.panel_results.get(field).copied()
    }
}

/// A single request value. `Age` is the only integer field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// Fixed-schema record posted to a domain's prediction endpoint.
///
/// Serializes as one flat JSON object: `Prediction_Type` plus every schema field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRequest {
    #[serde(rename = "Prediction_Type")]
    pub prediction_type: Domain,
    #[serde(flatten)]
    pub fields: BTreeMap<&'static str, FieldValue>,
}

impl CanonicalRequest {
    pub fn get(&self, field: &str) -> Option<FieldValue> {
        self.fields.get(field).copied()
    }

    /// Numeric view of a field, `None` if the schema has no such field.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.get(field).map(|v| v.as_f64())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CanonicalRequest {
        let mut fields = BTreeMap::new();
        fields.insert("Age", FieldValue::Int(45));
        fields.insert("Sex", FieldValue::Float(1.0));
        fields.insert("BMI", FieldValue::Float(27.4));
        CanonicalRequest {
            prediction_type: Domain::Diabetes,
            fields,
        }
    }

    #[test]
    fn request_serializes_flat() {
        let json = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(json["Prediction_Type"], "Diabetes prediction");
        assert_eq!(json["Age"], 45);
        assert_eq!(json["Sex"], 1.0);
        assert_eq!(json["BMI"], 27.4);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn age_serializes_as_integer() {
        let json = serde_json::to_string(&sample_request()).unwrap();
        assert!(json.contains("\"Age\":45,") || json.contains("\"Age\":45}"));
        assert!(json.contains("\"Sex\":1.0"));
    }

    #[test]
    fn value_widens_integers() {
        let request = sample_request();
        assert_eq!(request.value("Age"), Some(45.0));
        assert_eq!(request.value("Missing"), None);
    }

    #[test]
    fn parsed_record_defaults_empty() {
        let record = ParsedRecord::default();
        assert!(record.patient_information.name.is_none());
        assert!(record.panel_results.is_empty());
        assert_eq!(record.panel_value("LDL"), None);
    }
}
