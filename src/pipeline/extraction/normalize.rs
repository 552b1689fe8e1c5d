/// Normalize extracted report text into a label/value token stream.
///
/// Splits on line breaks, drops blank lines, trims the rest, then splits every
/// "Label: Value" line on its first colon so that inline and stacked layouts
/// both end up as consecutive `label`, `value` lines.
pub fn normalize(raw_text: &str) -> Vec<String> {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    split_label_value(&lines)
}

/// Split each line containing a colon on the first colon into two trimmed
/// lines. Colon-free lines pass through trimmed. An empty side is still
/// emitted ("Name:" → "Name", "").
pub fn split_label_value<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        match line.split_once(':') {
            Some((label, value)) => {
                out.push(label.trim().to_string());
                out.push(value.trim().to_string());
            }
            None => out.push(line.trim().to_string()),
        }
    }

    out
}
