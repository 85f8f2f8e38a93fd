use request_preview::infra::{Environment, StandardAuthHeaders};
use request_preview::{Config, ContentAssembler, PreviewError, RequestDescription};
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the rendered sections
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "request_preview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<String, PreviewError> {
    let input = match &config.input_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading request description");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let environment = match &config.environment_path {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    render(&input, environment.as_deref(), config.pretty)
}

/// Assembles one JSON request description and serializes its sections.
fn render(input: &str, environment: Option<&str>, pretty: bool) -> Result<String, PreviewError> {
    let request = RequestDescription::from_json(input)?;

    let environment = match environment {
        Some(raw) => Environment::from_json(serde_json::from_str(raw)?)?,
        None => Environment::new(),
    };
    tracing::debug!(variables = environment.len(), "Loaded environment");

    let assembler = ContentAssembler::new(environment, StandardAuthHeaders::new());
    let sections = assembler.assemble(&request)?.into_sections();

    let output = if pretty {
        serde_json::to_string_pretty(&sections)?
    } else {
        serde_json::to_string(&sections)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const REQUEST: &str = r#"{
        "headers": [{ "name": "Host", "value": "{{ host }}" }],
        "body": { "mimeType": "text/plain", "text": "hi" }
    }"#;

    #[test]
    fn test_render_compact_output() {
        let output = render(REQUEST, None, false).unwrap();
        assert!(!output.contains('\n'));

        let sections: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(sections[0]["title"], "Parameters");
        assert_eq!(sections[1]["rows"][0]["value"], "<span class=\"env-var\">host</span>");
        assert_eq!(sections[2]["note"], "raw");
    }

    #[test]
    fn test_render_pretty_output_with_environment() {
        let output = render(REQUEST, Some(r#"{ "host": "example.com" }"#), true).unwrap();
        assert!(output.starts_with("[\n  {"));

        let sections: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(sections[1]["rows"][0]["value"], "example.com");
    }

    #[test]
    fn test_render_rejects_invalid_input() {
        let err = render("not json", None, true).unwrap_err();
        assert_eq!(err.code(), "INVALID_DESCRIPTION");

        let err = render(REQUEST, Some("[1, 2]"), true).unwrap_err();
        assert_eq!(err.code(), "INVALID_DESCRIPTION");
    }

    #[test]
    fn test_run_reads_input_file() {
        let path = std::env::temp_dir().join(format!("request-preview-{}.json", std::process::id()));
        std::fs::write(&path, REQUEST).unwrap();

        let config = Config {
            input_path: Some(path.clone()),
            environment_path: None,
            pretty: false,
        };
        let output = run(&config);
        std::fs::remove_file(&path).ok();

        assert!(output.unwrap().contains("\"title\":\"Body\""));
    }

    #[test]
    fn test_run_missing_input_file() {
        let config = Config {
            input_path: Some(PathBuf::from("/nonexistent/request-preview/input.json")),
            environment_path: None,
            pretty: true,
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
