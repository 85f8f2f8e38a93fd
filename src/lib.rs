pub mod config;
pub mod error;
pub mod infra;
pub mod preview;
pub mod request;
pub mod shared;

pub use config::Config;
pub use error::PreviewError;
pub use preview::{assemble, interpret, Content, ContentAssembler, PreviewBlock, Row, Section};
pub use request::{Authentication, Body, FormField, Header, MediaType, Parameter, RequestDescription};
