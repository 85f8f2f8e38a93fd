//! Shared utilities used across the preview pipeline.

pub mod json;
pub mod markup;

pub use json::{to_ecma_pretty_string, EcmaPrettyFormatter};
pub use markup::{escape_xml, preformatted, preformatted_lang};
