use std::collections::BTreeMap;

use crate::models::{CanonicalRequest, Domain, FieldValue, ParsedRecord};

/// Where a request field takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// `patient_information.age`, emitted as an integer (default 0).
    Age,
    /// `patient_information.sex`, emitted as the 1.0/0.0 male indicator.
    Sex,
    /// A `panel_results` key, emitted as a float (default 0.0).
    Panel(&'static str),
}

/// One field of a domain's fixed request schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub source: FieldSource,
}

const fn panel(name: &'static str, key: &'static str) -> SchemaField {
    SchemaField {
        name,
        source: FieldSource::Panel(key),
    }
}

const AGE: SchemaField = SchemaField {
    name: "Age",
    source: FieldSource::Age,
};

pub static LIVER_SCHEMA: &[SchemaField] = &[
    AGE,
    SchemaField {
        name: "Gender",
        source: FieldSource::Sex,
    },
    panel("Total_Bilirubin", "total_bilirubin"),
    panel("Direct_Bilirubin", "direct_bilirubin"),
    panel("Alkaline_Phosphotase", "alkaline_phosphatase"),
    panel("Sgpt", "sgpt"),
    panel("Sgot", "sgot"),
    panel("Total_Proteins", "total_proteins"),
    panel("Albumin", "albumin"),
    panel("Albumin_and_Globulin_Ratio", "albumin_globulin_ratio"),
];

pub static DIABETES_SCHEMA: &[SchemaField] = &[
    AGE,
    SchemaField {
        name: "Sex",
        source: FieldSource::Sex,
    },
    panel("BMI", "BMI"),
    panel("BP", "BP"),
    panel("TC", "TC"),
    panel("LDL", "LDL"),
    panel("HDL", "HDL"),
    panel("TCH", "TCH"),
    panel("LTG", "LTG"),
    panel("GLU", "GLU"),
    panel("Diabetes_Value", "Diabetes_Value"),
];

pub static HEART_ATTACK_SCHEMA: &[SchemaField] = &[
    AGE,
    SchemaField {
        name: "Sex",
        source: FieldSource::Sex,
    },
    panel("LDL", "LDL"),
    panel("HDL", "HDL"),
    panel("Triglycerides", "Triglycerides"),
    panel("Fasting_Blood_Sugar", "Fasting_Blood_Sugar"),
    panel("Complete_Blood_Count", "Complete_Blood_Count"),
    panel("Total_Cholesterol", "Total_Cholesterol"),
    panel("Non_HDL_Cholesterol", "Non_HDL_Cholesterol"),
    panel("C_Reactive_Protein", "C_Reactive_Protein"),
    panel("Lipoprotein", "Lipoprotein"),
    panel("Plasma_Ceramides", "Plasma_Ceramides"),
    panel("Natriuretic_Peptides", "Natriuretic_Peptides"),
    panel("Troponin_T", "Troponin_T"),
];

impl Domain {
    /// Fixed request schema posted to this domain's prediction endpoint.
    pub fn schema(&self) -> &'static [SchemaField] {
        match self {
            Self::Liver => LIVER_SCHEMA,
            Self::Diabetes => DIABETES_SCHEMA,
            Self::HeartAttack => HEART_ATTACK_SCHEMA,
        }
    }
}

/// 1.0 when the captured sex/gender text is "male" (any case), else 0.0.
/// Absent text is 0.0 as well.
pub fn map_sex(sex: Option<&str>) -> f64 {
    match sex {
        Some(s) if s.to_lowercase() == "male" => 1.0,
        _ => 0.0,
    }
}

/// Build the canonical request for `domain`, defaulting every field the
/// parsed record does not supply.
pub fn assemble(domain: Domain, parsed: &ParsedRecord) -> CanonicalRequest {
    let fields: BTreeMap<&'static str, FieldValue> = domain
        .schema()
        .iter()
        .map(|field| (field.name, resolve(field.source, parsed)))
        .collect();

    tracing::debug!(
        domain = domain.slug(),
        observed = observed_fields(domain, parsed).len(),
        schema = fields.len(),
        "Canonical request assembled"
    );

    CanonicalRequest {
        prediction_type: domain,
        fields,
    }
}

fn resolve(source: FieldSource, parsed: &ParsedRecord) -> FieldValue {
    let patient = &parsed.patient_information;
    match source {
        FieldSource::Age => FieldValue::Int(patient.age.unwrap_or(0)),
        FieldSource::Sex => FieldValue::Float(map_sex(patient.sex.as_deref())),
        FieldSource::Panel(key) => FieldValue::Float(parsed.panel_value(key).unwrap_or(0.0)),
    }
}

/// Schema fields whose value came from the report rather than a default.
pub fn observed_fields(domain: Domain, parsed: &ParsedRecord) -> Vec<&'static str> {
    let patient = &parsed.patient_information;
    domain
        .schema()
        .iter()
        .filter(|field| match field.source {
            FieldSource::Age => patient.age.is_some(),
            FieldSource::Sex => patient.sex.is_some(),
            FieldSource::Panel(key) => parsed.panel_results.contains_key(key),
        })
        .map(|field| field.name)
        .collect()
}
