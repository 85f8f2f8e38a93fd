//! Infrastructure layer providing abstractions for external collaborators.
//!
//! This module contains traits and implementations for:
//! - Environment-variable formatting of header values
//! - Authentication header generation
//! - XML beautification
//!
//! The traits let callers plug in their own environment resolution or
//! authentication schemes without touching the assembler.

pub mod auth;
pub mod env;
pub mod xml;

pub use auth::{AuthHeader, AuthHeaderGenerator, StandardAuthHeaders};
pub use env::{EnvFormatter, Environment};
pub use xml::{beautify_xml, XmlBeautifier};
