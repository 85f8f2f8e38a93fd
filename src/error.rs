use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Malformed XML body at byte {position}: {message}")]
    MalformedXml { position: u64, message: String },

    #[error("Invalid request description: {0}")]
    InvalidDescription(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PreviewError {
    /// Short machine-readable code, mirroring the codes reported by the CLI.
    pub fn code(&self) -> &'static str {
        match self {
            PreviewError::MalformedXml { .. } => "MALFORMED_XML",
            PreviewError::InvalidDescription(_) => "INVALID_DESCRIPTION",
            PreviewError::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, PreviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = PreviewError::MalformedXml {
            position: 3,
            message: "unexpected end".to_string(),
        };
        assert_eq!(err.code(), "MALFORMED_XML");
        assert_eq!(err.to_string(), "Malformed XML body at byte 3: unexpected end");

        let err: PreviewError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert_eq!(err.code(), "INVALID_DESCRIPTION");
    }
}
