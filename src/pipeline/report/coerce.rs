use std::sync::LazyLock;

use regex::Regex;

/// First run of digits and decimal points anywhere in a value line.
static NUMBER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.]+").unwrap());

/// Best-effort number from a loosely formatted value ("12.5 mg/dL" → 12.5).
///
/// Takes the first `[0-9.]+` run and parses it; returns `None` when there is
/// no run or it is not a valid float ("1.2.3", "."). Signs, exponents and
/// thousands separators are not understood: "-5" reads as 5.0 and "1,200"
/// as 1.0.
pub fn coerce_number(value_text: &str) -> Option<f64> {
    let run = NUMBER_RUN.find(value_text)?;
    run.as_str().parse::<f64>().ok()
}

/// Whole-line integer parse for the age field ("45" → 45, "45 years" → None).
///
/// Values outside the `i64` range also come back as `None` and so default to 0.
pub fn parse_age(value_text: &str) -> Option<i64> {
    value_text.trim().parse::<i64>().ok()
}

/// Upper-case the first character and lower-case the rest ("mALE" → "Male").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
