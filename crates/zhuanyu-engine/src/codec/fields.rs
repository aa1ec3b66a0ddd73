//! Line-level helpers shared by the decoder and encoder.

/// A `key: value` or `key=value` field with the key lower-cased and both sides trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub key: String,
    pub value: &'a str,
}

/// Split a field line into key and value.
///
/// The colon form is tried first; `=` is only considered when there is no
/// colon or the text before the first colon is blank. Blank lines and lines
/// with neither separator are not fields.
pub fn parse_field(line: &str) -> Option<Field<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    [':', '='].into_iter().find_map(|separator| {
        let (key, value) = trimmed.split_once(separator)?;
        let key = key.trim();
        (!key.is_empty()).then(|| Field {
            key: key.to_lowercase(),
            value: value.trim(),
        })
    })
}

/// Split text into physical lines on `\r\n`, `\n` or a lone `\r`.
///
/// A trailing line terminator does not produce an extra empty line.
pub fn physical_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(index) = rest.find(['\n', '\r']) {
        lines.push(&rest[..index]);
        let terminator_len = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[index + terminator_len..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Turn literal `\n` sequences into newlines
pub fn unescape_text(value: &str) -> String {
    value.replace("\\n", "\n")
}

/// Turn newlines into literal `\n` sequences so text stays on one line
pub fn escape_text(value: &str) -> String {
    value.replace("\r\n", "\n").replace(['\n', '\r'], "\\n")
}
