//! Environment-variable formatting for header values.
//!
//! Header values may reference environment variables as `{{ name }}`. A
//! formatter either substitutes the value or marks the reference so that a
//! reader of the preview can see which variable was meant.

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static ENV_REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").unwrap());

/// Trait for environment formatters.
///
/// Implementations must be total: every input string, including the empty
/// string, maps to an output string.
pub trait EnvFormatter: Send + Sync {
    /// Formats the environment references contained in `value`.
    fn format(&self, value: &str) -> String;
}

impl<F> EnvFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, value: &str) -> String {
        self(value)
    }
}

/// Named environment variables.
///
/// Defined references are replaced by their value. Undefined references are
/// rendered as `<span class="env-var">name</span>`, so an empty environment
/// only highlights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one variable.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Builds an environment from a JSON object. Non-string values are kept
    /// as their JSON text.
    pub fn from_json(value: Value) -> crate::error::Result<Self> {
        let object: Map<String, Value> = serde_json::from_value(value)?;
        Ok(object
            .into_iter()
            .map(|(name, value)| match value {
                Value::String(s) => (name, s),
                other => (name, other.to_string()),
            })
            .collect())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvFormatter for Environment {
    fn format(&self, value: &str) -> String {
        ENV_REFERENCE_RE
            .replace_all(value, |caps: &Captures| {
                let name = &caps[1];
                // Insomnia scopes environment lookups under `_.`
                let key = name.strip_prefix("_.").unwrap_or(name);
                match self.get(key) {
                    Some(value) => value.to_string(),
                    None => format!(r#"<span class="env-var">{}</span>"#, name),
                }
            })
            .into_owned()
    }
}
