//! Body interpretation.
//!
//! Classifies a request body by its media type and renders it into a single
//! [`PreviewBlock`]. JSON is pretty-printed, XML is beautified and escaped,
//! form bodies become tables and anything else gets an empty placeholder.

use super::types::{PreviewBlock, Row};
use crate::error::Result;
use crate::infra::beautify_xml;
use crate::request::{Body, FormField, MediaType};
use crate::shared::{escape_xml, preformatted, preformatted_lang, to_ecma_pretty_string};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// JSON string literal standing in for unresolved `{{ ... }}` placeholders.
pub const MISSING_DECLARATION: &str = "\"!!Missing declaration in environment!!\"";

// Greedy and line-bound: spans from the first `{{` to the last `}}` of a line.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{.*\}\}").unwrap());

/// Renders `body` into its preview block.
///
/// Returns `Ok(None)` when a JSON body has no text to render.
///
/// # Errors
///
/// Only XML bodies can fail: malformed XML is returned as
/// [`PreviewError::MalformedXml`](crate::PreviewError::MalformedXml).
pub fn interpret(body: &Body) -> Result<Option<PreviewBlock>> {
    let media_type = body.media_type();
    match body {
        Body::Json { text } => Ok(render_json(text.as_deref())),
        Body::Xml { text } => render_xml(text.as_deref().unwrap_or_default()).map(Some),
        Body::Form { fields, .. } => Ok(Some(render_form(media_type, fields))),
        Body::Other { .. } => Ok(Some(render_fallback())),
    }
}

/// Substitutes every placeholder span with [`MISSING_DECLARATION`].
pub fn replace_placeholders(text: &str) -> Cow<'_, str> {
    PLACEHOLDER_RE.replace_all(text, MISSING_DECLARATION)
}

/// Parses `text` as JSON and re-serializes it with two-space indentation,
/// keeping object keys in document order and writing numbers the way
/// `JSON.stringify` does.
pub fn pretty_print_json(text: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    to_ecma_pretty_string(&value)
}

/// JSON handler. Unparsable text is shown verbatim instead of failing.
pub fn render_json(text: Option<&str>) -> Option<PreviewBlock> {
    let original = text.filter(|t| !t.is_empty())?;
    let rewritten = replace_placeholders(original);

    let pretty = match pretty_print_json(&rewritten) {
        Ok(pretty) => pretty,
        Err(e) => {
            tracing::warn!(
                error = %e,
                body = %original,
                "Failed to parse JSON body (expect incorrect tokenization)"
            );
            original.to_string()
        }
    };

    Some(PreviewBlock::Plain {
        note: MediaType::Json.note(),
        text: preformatted(&pretty),
    })
}

/// XML handler. Beautifies, escapes and tags the text for XML display.
pub fn render_xml(text: &str) -> Result<PreviewBlock> {
    let beautified = beautify_xml(text)?;
    Ok(PreviewBlock::Plain {
        note: MediaType::Xml.note(),
        text: preformatted_lang("xml", &escape_xml(&beautified)),
    })
}

/// Form handler. One row per field, in input order.
pub fn render_form(media_type: MediaType, fields: &[FormField]) -> PreviewBlock {
    PreviewBlock::Tabular {
        note: media_type.note(),
        rows: fields.iter().map(Row::from).collect(),
    }
}

/// Fallback handler for media types without a dedicated renderer.
pub fn render_fallback() -> PreviewBlock {
    PreviewBlock::Plain {
        note: MediaType::Other.note(),
        text: preformatted(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreviewError;
    use crate::request::FormEncoding;

    fn json_body(text: &str) -> Body {
        Body::Json {
            text: Some(text.to_string()),
        }
    }

    fn plain_text(block: Option<PreviewBlock>) -> (&'static str, String) {
        match block {
            Some(PreviewBlock::Plain { note, text }) => (note, text),
            other => panic!("expected plain block, got {:?}", other),
        }
    }

    #[test]
    fn test_json_is_pretty_printed_in_key_order() {
        let block = interpret(&json_body(r#"{"b":1,"a":[1,2]}"#)).unwrap();
        let (note, text) = plain_text(block);
        assert_eq!(note, "json");
        assert_eq!(
            text,
            "<pre>{\n  \"b\": 1,\n  \"a\": [\n    1,\n    2\n  ]\n}</pre>"
        );
    }

    #[test]
    fn test_json_pretty_print_is_idempotent() {
        let once = pretty_print_json(r#"{"user":{"name":"x","tags":["a"]},"n":null}"#).unwrap();
        let twice = pretty_print_json(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_json_numbers_are_written_like_ecmascript() {
        let (_, text) =
            plain_text(render_json(Some(r#"{"a":1.0,"b":1e2,"c":12345678901234567890123,"d":0.25}"#)));
        assert_eq!(
            text,
            "<pre>{\n  \"a\": 1,\n  \"b\": 100,\n  \"c\": 1.2345678901234568e+22,\n  \"d\": 0.25\n}</pre>"
        );
    }

    #[test]
    fn test_json_numbers_pretty_print_is_idempotent() {
        let once = pretty_print_json("[1.0, 1e2, 3e21, -0.5]").unwrap();
        assert_eq!(once, "[\n  1,\n  100,\n  3e+21,\n  -0.5\n]");
        assert_eq!(pretty_print_json(&once).unwrap(), once);
    }

    #[test]
    fn test_json_placeholder_is_replaced_by_sentinel() {
        let block = interpret(&json_body(r#"{"id": {{ id }}, "n": 1}"#)).unwrap();
        let (_, text) = plain_text(block);
        assert_eq!(
            text,
            "<pre>{\n  \"id\": \"!!Missing declaration in environment!!\",\n  \"n\": 1\n}</pre>"
        );
    }

    #[test]
    fn test_json_placeholders_on_separate_lines() {
        let body = "{\n  \"a\": {{ a }},\n  \"b\": {{ b }}\n}";
        let (_, text) = plain_text(render_json(Some(body)));
        assert_eq!(text.matches("!!Missing declaration in environment!!").count(), 2);
    }

    #[test]
    fn test_json_fallback_keeps_original_text() {
        // Greedy substitution swallows the closing brace, so parsing fails.
        let original = r#"{"a": {{x}}, "b": {{y}}}"#;
        let (note, text) = plain_text(interpret(&json_body(original)).unwrap());
        assert_eq!(note, "json");
        assert_eq!(text, format!("<pre>{}</pre>", original));
    }

    #[test]
    fn test_invalid_json_is_shown_verbatim() {
        let (_, text) = plain_text(render_json(Some("not json")));
        assert_eq!(text, "<pre>not json</pre>");
    }

    #[test]
    fn test_json_without_text_renders_nothing() {
        assert_eq!(interpret(&Body::Json { text: None }).unwrap(), None);
        assert_eq!(interpret(&json_body("")).unwrap(), None);
    }

    #[test]
    fn test_caller_body_is_not_mutated() {
        let body = json_body(r#"{"id": {{ id }}, "n": 1}"#);
        let before = body.clone();
        interpret(&body).unwrap();
        assert_eq!(body, before);
    }

    #[test]
    fn test_xml_is_beautified_and_escaped() {
        let body = Body::Xml {
            text: Some("<a><b/></a>".to_string()),
        };
        let (note, text) = plain_text(interpret(&body).unwrap());
        assert_eq!(note, "XML");
        assert_eq!(
            text,
            "<pre lang=\"xml\">&lt;a&gt;\n  &lt;b/&gt;\n&lt;/a&gt;</pre>"
        );

        let inner = text
            .strip_prefix("<pre lang=\"xml\">")
            .and_then(|t| t.strip_suffix("</pre>"))
            .unwrap();
        assert!(!inner.contains('<'));
        assert!(!inner.contains('>'));
    }

    #[test]
    fn test_xml_attribute_quotes_are_escaped() {
        let block = render_xml(r#"<a href="x"></a>"#).unwrap();
        let (_, text) = plain_text(Some(block));
        assert_eq!(text, "<pre lang=\"xml\">&lt;a href=&quot;x&quot;/&gt;</pre>");
    }

    #[test]
    fn test_malformed_xml_propagates() {
        let body = Body::Xml {
            text: Some("<a><b></a>".to_string()),
        };
        let err = interpret(&body).unwrap_err();
        assert!(matches!(err, PreviewError::MalformedXml { .. }));
    }

    #[test]
    fn test_xml_without_text_renders_empty_block() {
        let (_, text) = plain_text(interpret(&Body::Xml { text: None }).unwrap());
        assert_eq!(text, "<pre lang=\"xml\"></pre>");
    }

    #[test]
    fn test_form_fields_become_rows_in_order() {
        let fields = vec![
            FormField {
                name: "a".to_string(),
                value: "1".to_string(),
                description: String::new(),
            },
            FormField {
                name: "b".to_string(),
                value: "2".to_string(),
                description: "d".to_string(),
            },
        ];

        for encoding in [FormEncoding::Multipart, FormEncoding::UrlEncoded] {
            let body = Body::Form {
                encoding,
                fields: fields.clone(),
            };
            match interpret(&body).unwrap() {
                Some(PreviewBlock::Tabular { note, rows }) => {
                    assert_eq!(note, "formdata");
                    assert_eq!(rows, vec![Row::new("a", "1", ""), Row::new("b", "2", "d")]);
                }
                other => panic!("expected tabular block, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_form_duplicates_are_kept() {
        let field = FormField {
            name: "tag".to_string(),
            value: "x".to_string(),
            description: String::new(),
        };
        let block = render_form(MediaType::Multipart, &[field.clone(), field]);
        match block {
            PreviewBlock::Tabular { rows, .. } => assert_eq!(rows.len(), 2),
            other => panic!("expected tabular block, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_media_type_uses_fallback() {
        for mime in ["text/plain", "application/octet-stream", "application/json; charset=utf-8", ""] {
            let body = Body::from_parts(mime, Some("ignored <content>".to_string()), vec![]);
            let (note, text) = plain_text(interpret(&body).unwrap());
            assert_eq!(note, "raw");
            assert_eq!(text, "<pre></pre>");
        }
    }
}
