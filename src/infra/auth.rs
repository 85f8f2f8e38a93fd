//! Authentication header generation.
//!
//! Turns an [`Authentication`] descriptor into the header a client would
//! send for it.

use crate::request::Authentication;
use base64::Engine;

/// Header produced for an authentication descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub name: String,
    pub value: String,
}

impl AuthHeader {
    fn authorization(value: String) -> Self {
        Self {
            name: "Authorization".to_string(),
            value,
        }
    }
}

/// Trait for authentication header generators.
///
/// Generation is deterministic and has no failure mode.
pub trait AuthHeaderGenerator: Send + Sync {
    fn generate(&self, auth: &Authentication) -> AuthHeader;
}

impl<F> AuthHeaderGenerator for F
where
    F: Fn(&Authentication) -> AuthHeader + Send + Sync,
{
    fn generate(&self, auth: &Authentication) -> AuthHeader {
        self(auth)
    }
}

/// Default generator for the common HTTP authentication schemes.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardAuthHeaders;

impl StandardAuthHeaders {
    pub fn new() -> Self {
        Self
    }
}

impl AuthHeaderGenerator for StandardAuthHeaders {
    fn generate(&self, auth: &Authentication) -> AuthHeader {
        match auth {
            Authentication::Basic { username, password } => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                AuthHeader::authorization(format!("Basic {}", credentials))
            }
            Authentication::Bearer { token, prefix } => {
                AuthHeader::authorization(format!("{} {}", or_bearer(prefix), token))
            }
            Authentication::Digest { username } => {
                AuthHeader::authorization(format!("Digest username=\"{}\"", username))
            }
            Authentication::OAuth2 {
                access_token,
                token_prefix,
            } => AuthHeader::authorization(format!("{} {}", or_bearer(token_prefix), access_token)),
            Authentication::ApiKey { key, value } => AuthHeader {
                name: key.clone(),
                value: value.clone(),
            },
            Authentication::Other { kind } => AuthHeader::authorization(kind.clone()),
        }
    }
}

fn or_bearer(prefix: &str) -> &str {
    if prefix.trim().is_empty() {
        "Bearer"
    } else {
        prefix
    }
}
