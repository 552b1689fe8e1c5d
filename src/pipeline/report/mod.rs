//! Report-to-record extraction: label/value scanning against per-domain
//! field dictionaries, tolerant numeric coercion, and default-filling
//! assembly into the prediction service's request schema.

pub mod dictionary;
pub mod coerce;
pub mod scanner;
pub mod assembler;

pub use dictionary::*;
pub use coerce::*;
pub use scanner::*;
pub use assembler::*;

use thiserror::Error;

use crate::models::{CanonicalRequest, Domain, ParsedRecord};
use crate::pipeline::extraction::normalize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Unknown prediction domain: {0:?} (expected liver, diabetes or heart-attack)")]
    UnknownDomain(String),
}

/// Normalize and scan raw report text against `domain`'s dictionary.
pub fn parse_report(domain: Domain, raw_text: &str) -> ParsedRecord {
    let lines = normalize(raw_text);
    scan(&lines, domain.dictionary())
}

/// Raw report text → canonical request, in one call. Never fails: anything
/// the text does not supply is defaulted.
pub fn extract_request(domain: Domain, raw_text: &str) -> CanonicalRequest {
    assemble(domain, &parse_report(domain, raw_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_yields_fully_defaulted_request() {
        for domain in Domain::ALL {
            let request = extract_request(domain, "  \n\n \t ");
            assert_eq!(request.fields.len(), domain.schema().len());
            assert!(request.fields.values().all(|v| v.as_f64() == 0.0));
        }
    }

    #[test]
    fn inline_liver_report() {
        let text = "\
            City Diagnostics Lab\n\
            Name: Jane Roe\n\
            Age: 52\n\
            Gender: female\n\
            Total Bilirubin: 0.9 mg/dL\n\
            Direct Bilirubin: 0.2 mg/dL\n\
            Alkaline Phosphatase: 110 U/L\n\
            SGPT: 35 U/L\n\
            SGOT: 40 U/L\n\
            Total Proteins: 7.1 g/dL\n\
            Albumin: 4.0 g/dL\n\
            Albumin / Globulin Ratio: 1.3\n";

        let parsed = parse_report(Domain::Liver, text);
        assert_eq!(parsed.patient_information.name.as_deref(), Some("Jane Roe"));
        assert_eq!(parsed.patient_information.sex.as_deref(), Some("Female"));

        let request = extract_request(Domain::Liver, text);
        assert_eq!(request.get("Age"), Some(crate::models::FieldValue::Int(52)));
        assert_eq!(request.value("Gender"), Some(0.0));
        assert_eq!(request.value("Total_Bilirubin"), Some(0.9));
        assert_eq!(request.value("Direct_Bilirubin"), Some(0.2));
        assert_eq!(request.value("Alkaline_Phosphotase"), Some(110.0));
        assert_eq!(request.value("Sgpt"), Some(35.0));
        assert_eq!(request.value("Sgot"), Some(40.0));
        assert_eq!(request.value("Total_Proteins"), Some(7.1));
        assert_eq!(request.value("Albumin"), Some(4.0));
        assert_eq!(request.value("Albumin_and_Globulin_Ratio"), Some(1.3));
    }

    #[test]
    fn stacked_heart_report() {
        let text = "Name\nA. Patient\nAge\n61\nSex\nMALE\nLDL\n160 mg/dL\nHDL\n38\n\
                    Troponin T\n0.02 ng/mL\nC Reactive Protein\n3.4 mg/L\n";
        let request = extract_request(Domain::HeartAttack, text);
        assert_eq!(request.value("Age"), Some(61.0));
        assert_eq!(request.value("Sex"), Some(1.0));
        assert_eq!(request.value("LDL"), Some(160.0));
        assert_eq!(request.value("HDL"), Some(38.0));
        assert_eq!(request.value("Troponin_T"), Some(0.02));
        assert_eq!(request.value("C_Reactive_Protein"), Some(3.4));
        assert_eq!(request.value("Plasma_Ceramides"), Some(0.0));
    }

    #[test]
    fn same_text_differs_by_domain_dictionary() {
        let text = "LDL: 130\nBMI: 31.2\nTriglycerides: 200";
        let diabetes = extract_request(Domain::Diabetes, text);
        let heart = extract_request(Domain::HeartAttack, text);

        assert_eq!(diabetes.value("BMI"), Some(31.2));
        assert_eq!(diabetes.value("LDL"), Some(130.0));
        assert_eq!(diabetes.value("Triglycerides"), None);

        assert_eq!(heart.value("Triglycerides"), Some(200.0));
        assert_eq!(heart.value("LDL"), Some(130.0));
        assert_eq!(heart.value("BMI"), None);
    }
}
