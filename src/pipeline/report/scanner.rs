use crate::models::ParsedRecord;

use super::coerce::{capitalize, coerce_number, parse_age};
use super::dictionary::{FieldDictionary, PatientLabel};

/// Outcome of looking at one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanStep {
    /// Nothing recognized (or nothing left to pair with): move one line.
    Scanning,
    /// A label and its value line were consumed: move two lines.
    ConsumedPair,
}

/// What a recognized label line refers to.
enum LabelMatch {
    Patient(PatientLabel),
    Panel(&'static str),
}

impl ScanStep {
    fn advance(self) -> usize {
        match self {
            Self::Scanning => 1,
            Self::ConsumedPair => 2,
        }
    }
}

/// Walk normalized lines once, pairing recognized labels with the line after them.
///
/// Patient labels (`name*`, `age*`, `sex*`, `gender*`) match by prefix; panel
/// labels match the dictionary exactly. A value that fails to parse leaves the
/// field as it was. A label on the last line has no value and is ignored.
pub fn scan<S: AsRef<str>>(lines: &[S], dictionary: &FieldDictionary) -> ParsedRecord {
    let mut record = ParsedRecord::default();
    let mut i = 0;

    while i < lines.len() {
        let step = scan_line(lines, i, dictionary, &mut record);
        i += step.advance();
    }

    tracing::debug!(
        lines = lines.len(),
        panel_fields = record.panel_results.len(),
        has_name = record.patient_information.name.is_some(),
        has_age = record.patient_information.age.is_some(),
        has_sex = record.patient_information.sex.is_some(),
        "Report scan complete"
    );

    record
}

fn scan_line<S: AsRef<str>>(
    lines: &[S],
    i: usize,
    dictionary: &FieldDictionary,
    record: &mut ParsedRecord,
) -> ScanStep {
    let label = lines[i].as_ref().trim();
    let lower = label.to_lowercase();

    let matched = match PatientLabel::classify(&lower) {
        Some(patient_label) => LabelMatch::Patient(patient_label),
        None => match dictionary.lookup(&lower) {
            Some(field) => LabelMatch::Panel(field),
            None => return ScanStep::Scanning,
        },
    };

    let Some(value) = lines.get(i + 1).map(|v| v.as_ref().trim()) else {
        tracing::trace!(line = i, "Label on final line has no value");
        return ScanStep::Scanning;
    };

    let patient = &mut record.patient_information;
    match matched {
        LabelMatch::Patient(PatientLabel::Name) => patient.name = Some(value.to_string()),
        LabelMatch::Patient(PatientLabel::Age) => match parse_age(value) {
            Some(age) => patient.age = Some(age),
            None => tracing::debug!(line = i, "Age value is not an integer, leaving unset"),
        },
        LabelMatch::Patient(PatientLabel::Sex) => patient.sex = Some(capitalize(value)),
        LabelMatch::Panel(field) => match coerce_number(value) {
            Some(number) => {
                tracing::trace!(field, "Panel value captured");
                record.panel_results.insert(field.to_string(), number);
            }
            None => tracing::debug!(field, "Panel value did not coerce to a number"),
        },
    }

    ScanStep::ConsumedPair
}
