//! Request description types consumed by the content assembler.
//!
//! The JSON shape follows the request objects found in Insomnia exports:
//! `parameters`, `headers`, `body { mimeType, text, params }` and an optional
//! `authentication { type, ... }` descriptor.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Immutable description of one HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestDescription {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub body: Body,
    #[serde(default, deserialize_with = "deserialize_authentication")]
    pub authentication: Option<Authentication>,
}

impl RequestDescription {
    /// Parses a request description from its JSON form.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Query parameter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
}

/// Request header. A missing value is read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
}

/// One field of a form-encoded or multipart body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormField {
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
}

/// Closed set of media types the body interpreter knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml,
    Multipart,
    UrlEncoded,
    Other,
}

impl MediaType {
    /// Classifies a declared media type. Matching is exact; anything not in
    /// the table is `Other`.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/json" => MediaType::Json,
            "application/xml" => MediaType::Xml,
            "multipart/form-data" => MediaType::Multipart,
            "application/x-www-form-urlencoded" => MediaType::UrlEncoded,
            _ => MediaType::Other,
        }
    }

    /// Label attached to the preview block produced for this media type.
    pub fn note(&self) -> &'static str {
        match self {
            MediaType::Json => "json",
            MediaType::Xml => "XML",
            MediaType::Multipart | MediaType::UrlEncoded => "formdata",
            MediaType::Other => "raw",
        }
    }
}

/// Encoding of a form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEncoding {
    Multipart,
    UrlEncoded,
}

impl From<FormEncoding> for MediaType {
    fn from(encoding: FormEncoding) -> Self {
        match encoding {
            FormEncoding::Multipart => MediaType::Multipart,
            FormEncoding::UrlEncoded => MediaType::UrlEncoded,
        }
    }
}

/// Request body, one variant per media-type family.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBody")]
pub enum Body {
    Json {
        text: Option<String>,
    },
    Xml {
        text: Option<String>,
    },
    Form {
        encoding: FormEncoding,
        fields: Vec<FormField>,
    },
    Other {
        mime_type: String,
        text: Option<String>,
    },
}

impl Body {
    /// Builds a body from its declared media type, keeping whichever of
    /// `text`/`fields` that media type reads.
    pub fn from_parts(mime_type: &str, text: Option<String>, fields: Vec<FormField>) -> Self {
        match MediaType::from_mime(mime_type) {
            MediaType::Json => Body::Json { text },
            MediaType::Xml => Body::Xml { text },
            MediaType::Multipart => Body::Form {
                encoding: FormEncoding::Multipart,
                fields,
            },
            MediaType::UrlEncoded => Body::Form {
                encoding: FormEncoding::UrlEncoded,
                fields,
            },
            MediaType::Other => Body::Other {
                mime_type: mime_type.to_string(),
                text,
            },
        }
    }

    pub fn media_type(&self) -> MediaType {
        match self {
            Body::Json { .. } => MediaType::Json,
            Body::Xml { .. } => MediaType::Xml,
            Body::Form { encoding, .. } => (*encoding).into(),
            Body::Other { .. } => MediaType::Other,
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Other {
            mime_type: String::new(),
            text: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBody {
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    params: Option<Vec<FormField>>,
}

impl From<RawBody> for Body {
    fn from(raw: RawBody) -> Self {
        Body::from_parts(
            raw.mime_type.as_deref().unwrap_or_default(),
            raw.text,
            raw.params.unwrap_or_default(),
        )
    }
}

/// Authentication descriptor, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Authentication {
    Basic {
        #[serde(default, deserialize_with = "scalar_string")]
        username: String,
        #[serde(default, deserialize_with = "scalar_string")]
        password: String,
    },
    Bearer {
        #[serde(default, deserialize_with = "scalar_string")]
        token: String,
        #[serde(default, deserialize_with = "scalar_string")]
        prefix: String,
    },
    Digest {
        #[serde(default, deserialize_with = "scalar_string")]
        username: String,
    },
    #[serde(rename = "oauth2")]
    OAuth2 {
        #[serde(default, rename = "accessToken", deserialize_with = "scalar_string")]
        access_token: String,
        #[serde(default, rename = "tokenPrefix", deserialize_with = "scalar_string")]
        token_prefix: String,
    },
    #[serde(rename = "apikey")]
    ApiKey {
        #[serde(default, deserialize_with = "scalar_string")]
        key: String,
        #[serde(default, deserialize_with = "scalar_string")]
        value: String,
    },
    /// Any scheme without a dedicated generator (ntlm, hawk, ...).
    #[serde(skip)]
    Other { kind: String },
}

const KNOWN_SCHEMES: [&str; 5] = ["basic", "bearer", "digest", "oauth2", "apikey"];

impl Authentication {
    /// Reads a descriptor from JSON. A missing or empty `type` means the
    /// request carries no authentication.
    pub fn from_value(value: Value) -> Option<Self> {
        let kind = value.get("type").and_then(Value::as_str)?.trim().to_string();
        if kind.is_empty() {
            return None;
        }

        match serde_json::from_value(value) {
            Ok(auth) => Some(auth),
            Err(e) => {
                if KNOWN_SCHEMES.contains(&kind.as_str()) {
                    tracing::warn!(kind = %kind, error = %e, "Malformed authentication descriptor");
                } else {
                    tracing::debug!(kind = %kind, "No dedicated authentication scheme");
                }
                Some(Authentication::Other { kind })
            }
        }
    }

    /// The `type` name of this descriptor.
    pub fn kind(&self) -> &str {
        match self {
            Authentication::Basic { .. } => "basic",
            Authentication::Bearer { .. } => "bearer",
            Authentication::Digest { .. } => "digest",
            Authentication::OAuth2 { .. } => "oauth2",
            Authentication::ApiKey { .. } => "apikey",
            Authentication::Other { kind } => kind,
        }
    }
}

fn deserialize_authentication<'de, D>(deserializer: D) -> Result<Option<Authentication>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(Authentication::from_value))
}

/// Reads a string field, accepting `null` as empty and numbers or booleans
/// as their JSON text.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}
