//! XML beautification.
//!
//! Re-indents an XML document one element per line, optionally collapsing
//! empty elements into their self-closing form.

use crate::error::{PreviewError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Configurable XML pretty-printer.
#[derive(Debug, Clone, Copy)]
pub struct XmlBeautifier {
    /// Spaces per nesting level.
    pub indent_size: usize,
    /// Write `<a></a>` as `<a/>`.
    pub self_closing: bool,
}

impl Default for XmlBeautifier {
    fn default() -> Self {
        Self {
            indent_size: 2,
            self_closing: true,
        }
    }
}

impl XmlBeautifier {
    /// Creates a beautifier with two-space indentation and self-closing empty elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beautifies `text`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::MalformedXml`] for syntax errors, mismatched
    /// end tags and elements left open at the end of the document.
    pub fn beautify(&self, text: &str) -> Result<String> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent_size);
        // Start tag held back until we know whether the element is empty.
        let mut pending: Option<BytesStart<'_>> = None;
        let mut depth = 0usize;

        loop {
            let event = reader.read_event().map_err(|e| PreviewError::MalformedXml {
                position: reader.buffer_position() as u64,
                message: e.to_string(),
            })?;

            match event {
                Event::Start(start) => {
                    if let Some(open) = pending.take() {
                        write_event(&mut writer, Event::Start(open))?;
                    }
                    depth += 1;
                    if self.self_closing {
                        pending = Some(start);
                    } else {
                        write_event(&mut writer, Event::Start(start))?;
                    }
                }
                Event::End(end) => {
                    depth = depth.saturating_sub(1);
                    match pending.take() {
                        Some(open) => write_event(&mut writer, Event::Empty(open))?,
                        None => write_event(&mut writer, Event::End(end))?,
                    }
                }
                Event::Eof => break,
                other => {
                    if let Some(open) = pending.take() {
                        write_event(&mut writer, Event::Start(open))?;
                    }
                    write_event(&mut writer, other)?;
                }
            }
        }

        if depth > 0 {
            return Err(PreviewError::MalformedXml {
                position: reader.buffer_position() as u64,
                message: format!("{} element(s) left unclosed", depth),
            });
        }

        String::from_utf8(writer.into_inner()).map_err(|e| PreviewError::MalformedXml {
            position: e.utf8_error().valid_up_to() as u64,
            message: e.to_string(),
        })
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| PreviewError::Io(std::io::Error::other(e.to_string())))
}

/// Convenience function beautifying with the default settings.
pub fn beautify_xml(text: &str) -> Result<String> {
    XmlBeautifier::new().beautify(text)
}
