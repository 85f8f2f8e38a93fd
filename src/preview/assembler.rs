//! Content assembly for request descriptions.
//!
//! Builds the Parameters, Headers and Body sections of a request. Header
//! values go through an [`EnvFormatter`], authentication is rendered by an
//! [`AuthHeaderGenerator`] and the body is delegated to the interpreter.

use super::interpreter::interpret;
use super::types::{Content, Row, Section};
use crate::error::Result;
use crate::infra::{AuthHeaderGenerator, EnvFormatter, Environment, StandardAuthHeaders};
use crate::request::RequestDescription;
use crate::shared::preformatted;

pub const PARAMETERS_TITLE: &str = "Parameters";
pub const HEADERS_TITLE: &str = "Headers";
pub const BODY_TITLE: &str = "Body";

/// Assembles preview sections using the given collaborators.
#[derive(Debug, Clone, Default)]
pub struct ContentAssembler<E = Environment, A = StandardAuthHeaders> {
    env: E,
    auth: A,
}

impl<E, A> ContentAssembler<E, A>
where
    E: EnvFormatter,
    A: AuthHeaderGenerator,
{
    pub fn new(env: E, auth: A) -> Self {
        Self { env, auth }
    }

    /// One row per parameter, copied verbatim.
    pub fn parameters(&self, request: &RequestDescription) -> Section {
        let rows = request.parameters.iter().map(Row::from).collect();
        Section::with_rows(PARAMETERS_TITLE, rows)
    }

    /// One row per declared header with its value env-formatted, followed by
    /// the generated authentication header when the request has one.
    pub fn headers(&self, request: &RequestDescription) -> Section {
        let mut rows: Vec<Row> = request
            .headers
            .iter()
            .map(|header| Row::new(&header.name, self.env.format(&header.value), &header.description))
            .collect();

        if let Some(auth) = &request.authentication {
            let header = self.auth.generate(auth);
            tracing::debug!(kind = auth.kind(), header = %header.name, "Adding authentication header");
            rows.push(Row::new(
                header.name,
                preformatted(&self.env.format(&header.value)),
                "",
            ));
        }

        Section::with_rows(HEADERS_TITLE, rows)
    }

    /// The interpreted body. Carries only the title when there is nothing to render.
    ///
    /// # Errors
    ///
    /// Propagates malformed XML bodies.
    pub fn body(&self, request: &RequestDescription) -> Result<Section> {
        let block = interpret(&request.body)?;
        Ok(Section::from_block(BODY_TITLE, block))
    }

    /// Builds all three sections.
    pub fn assemble(&self, request: &RequestDescription) -> Result<Content> {
        let content = Content {
            parameters: self.parameters(request),
            headers: self.headers(request),
            body: self.body(request)?,
        };

        tracing::debug!(
            parameters = request.parameters.len(),
            headers = request.headers.len(),
            media_type = ?request.body.media_type(),
            body_empty = content.body.is_empty(),
            "Assembled request content"
        );

        Ok(content)
    }
}

/// Assembles a request description with an empty [`Environment`] and the
/// [`StandardAuthHeaders`] generator.
pub fn assemble(request: &RequestDescription) -> Result<Content> {
    ContentAssembler::<Environment, StandardAuthHeaders>::default().assemble(request)
}
