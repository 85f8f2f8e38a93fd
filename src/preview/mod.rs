pub mod assembler;
pub mod interpreter;
pub mod types;

pub use assembler::{assemble, ContentAssembler, BODY_TITLE, HEADERS_TITLE, PARAMETERS_TITLE};
pub use interpreter::{interpret, pretty_print_json, replace_placeholders, MISSING_DECLARATION};
pub use types::*;
