//! Markup helpers for display-ready preview text.

/// Wraps `text` in a `<pre>` block. The text is inserted as-is.
pub fn preformatted(text: &str) -> String {
    format!("<pre>{}</pre>", text)
}

/// Wraps `text` in a `<pre>` block tagged with a display language.
pub fn preformatted_lang(lang: &str, text: &str) -> String {
    format!("<pre lang=\"{}\">{}</pre>", lang, text)
}

/// Replaces the five XML-unsafe characters with their named entities.
pub fn escape_xml(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
