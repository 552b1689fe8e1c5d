use crate::models::Domain;

/// Static label → canonical field table for one domain.
///
/// Labels are stored lowercase. Lookup is exact after trimming and
/// lowercasing the candidate: no partial, fuzzy or reordered-word matching.
#[derive(Debug)]
pub struct FieldDictionary {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldDictionary {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Canonical field for `label`, if it is one of this dictionary's labels.
    pub fn lookup(&self, label: &str) -> Option<&'static str> {
        let wanted = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(known, _)| *known == wanted)
            .map(|(_, field)| *field)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(_, field)| *field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static LIVER_FIELDS: FieldDictionary = FieldDictionary::new(&[
    ("total bilirubin", "total_bilirubin"),
    ("direct bilirubin", "direct_bilirubin"),
    ("alkaline phosphatase", "alkaline_phosphatase"),
    ("sgpt", "sgpt"),
    ("sgot", "sgot"),
    ("total proteins", "total_proteins"),
    ("albumin", "albumin"),
    ("albumin / globulin ratio", "albumin_globulin_ratio"),
]);

pub static DIABETES_FIELDS: FieldDictionary = FieldDictionary::new(&[
    ("bmi", "BMI"),
    ("bp", "BP"),
    ("tc", "TC"),
    ("ldl", "LDL"),
    ("hdl", "HDL"),
    ("tch", "TCH"),
    ("ltg", "LTG"),
    ("glu", "GLU"),
    ("diabetes value", "Diabetes_Value"),
]);

pub static HEART_ATTACK_FIELDS: FieldDictionary = FieldDictionary::new(&[
    ("ldl", "LDL"),
    ("hdl", "HDL"),
    ("triglycerides", "Triglycerides"),
    ("fasting blood sugar", "Fasting_Blood_Sugar"),
    ("complete blood count", "Complete_Blood_Count"),
    ("total cholesterol", "Total_Cholesterol"),
    ("non hdl cholesterol", "Non_HDL_Cholesterol"),
    ("c reactive protein", "C_Reactive_Protein"),
    ("lipoprotein", "Lipoprotein"),
    ("plasma ceramides", "Plasma_Ceramides"),
    ("natriuretic peptides", "Natriuretic_Peptides"),
    ("troponin t", "Troponin_T"),
]);

impl Domain {
    /// This domain's numeric panel dictionary.
    pub fn dictionary(&self) -> &'static FieldDictionary {
        match self {
            Self::Liver => &LIVER_FIELDS,
            Self::Diabetes => &DIABETES_FIELDS,
            Self::HeartAttack => &HEART_ATTACK_FIELDS,
        }
    }
}

/// Demographic labels captured as text/integers rather than panel numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientLabel {
    Name,
    Age,
    Sex,
}

impl PatientLabel {
    /// Prefix match on an already lowercased line. Checked in this order, so a
    /// line like "name / age" counts as a name label.
    pub fn classify(lower: &str) -> Option<Self> {
        if lower.starts_with("name") {
            Some(Self::Name)
        } else if lower.starts_with("age") {
            Some(Self::Age)
        } else if lower.starts_with("sex") || lower.starts_with("gender") {
            Some(Self::Sex)
        } else {
            None
        }
    }
}
