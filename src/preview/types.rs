use crate::request::{FormField, Parameter};
use serde::Serialize;

/// One `name`/`value`/`description` table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl Row {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

impl From<&Parameter> for Row {
    fn from(param: &Parameter) -> Self {
        Row::new(&param.name, &param.value, &param.description)
    }
}

impl From<&FormField> for Row {
    fn from(field: &FormField) -> Self {
        Row::new(&field.name, &field.value, &field.description)
    }
}

/// Display-ready rendering of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PreviewBlock {
    /// Markup, already escaped where the format requires it.
    Plain { note: &'static str, text: String },
    Tabular { note: &'static str, rows: Vec<Row> },
}

/// Labeled group of the assembled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
}

impl Section {
    /// A section carrying only its title.
    pub fn empty(title: &'static str) -> Self {
        Self {
            title,
            note: None,
            text: None,
            rows: None,
        }
    }

    pub fn with_rows(title: &'static str, rows: Vec<Row>) -> Self {
        Self {
            rows: Some(rows),
            ..Self::empty(title)
        }
    }

    /// Republishes a preview block under `title`. No block yields a
    /// title-only section.
    pub fn from_block(title: &'static str, block: Option<PreviewBlock>) -> Self {
        match block {
            Some(PreviewBlock::Plain { note, text }) => Self {
                note: Some(note),
                text: Some(text),
                ..Self::empty(title)
            },
            Some(PreviewBlock::Tabular { note, rows }) => Self {
                note: Some(note),
                rows: Some(rows),
                ..Self::empty(title)
            },
            None => Self::empty(title),
        }
    }

    /// True when the section has nothing besides its title.
    pub fn is_empty(&self) -> bool {
        self.note.is_none() && self.text.is_none() && self.rows.is_none()
    }
}

/// The three sections describing one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub parameters: Section,
    pub headers: Section,
    pub body: Section,
}

impl Content {
    /// Sections in display order: Parameters, Headers, Body.
    pub fn into_sections(self) -> Vec<Section> {
        vec![self.parameters, self.headers, self.body]
    }
}
