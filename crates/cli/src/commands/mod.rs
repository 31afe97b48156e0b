pub mod collections;
pub mod config;
pub mod doctor;
pub mod quote;

use std::path::Path;

use coverly_core::config::AppConfig;
use coverly_core::{ProductCatalog, QuestionCatalog, RecommendationEngine};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Builds the engine from the effective config: catalog paths when
/// configured, compiled-in seeds otherwise.
pub(crate) fn build_engine(config: &AppConfig) -> Result<RecommendationEngine, String> {
    let products = match config.catalog.products_path.as_deref() {
        Some(path) => load_products(path)?,
        None => ProductCatalog::builtin(),
    };
    let questions = match config.catalog.questions_path.as_deref() {
        Some(path) => load_questions(path)?,
        None => QuestionCatalog::builtin(),
    };
    Ok(RecommendationEngine::new(questions, products))
}

fn load_products(path: &Path) -> Result<ProductCatalog, String> {
    ProductCatalog::from_path(path).map_err(|error| error.to_string())
}

fn load_questions(path: &Path) -> Result<QuestionCatalog, String> {
    QuestionCatalog::from_path(path).map_err(|error| error.to_string())
}
