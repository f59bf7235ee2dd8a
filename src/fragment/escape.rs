/// Characters that are escaped wherever a literal lands in a generated pattern.
///
/// The meta set of `regex::escape` (regex-syntax `is_meta_character`) plus `/`.
/// `/` and `-` are escaped even outside a bracket expression.
const ESCAPED: &[char] = &[
    '\\', '.', '^', '$', '*', '+', '?', '{', '}', '[', ']', '(', ')', '|', '/', '-', '#', '&',
    '~',
];

#[inline]
fn needs_escape(ch: char) -> bool {
    ESCAPED.contains(&ch)
}

pub fn escape_into(text: &str, out: &mut String) {
    out.reserve(text.len());
    for ch in text.chars() {
        if needs_escape(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    escape_into(text, &mut out);
    out
}
