use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use coverly_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "server.bind_address",
        &config.server.bind_address,
        field_source(
            "server.bind_address",
            Some("COVERLY_SERVER_BIND_ADDRESS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.port",
        &config.server.port.to_string(),
        field_source(
            "server.port",
            Some("COVERLY_SERVER_PORT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "server.graceful_shutdown_secs",
        &config.server.graceful_shutdown_secs.to_string(),
        field_source(
            "server.graceful_shutdown_secs",
            Some("COVERLY_SERVER_GRACEFUL_SHUTDOWN_SECS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "checkout.enabled",
        &config.checkout.enabled.to_string(),
        field_source(
            "checkout.enabled",
            Some("COVERLY_CHECKOUT_ENABLED"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "checkout.endpoint",
        config.checkout.endpoint.as_deref().unwrap_or("<unset>"),
        field_source(
            "checkout.endpoint",
            Some("COVERLY_CHECKOUT_ENDPOINT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    let checkout_api_key = if config.checkout.api_key.is_some() { "<redacted>" } else { "<unset>" };
    lines.push(render_line(
        "checkout.api_key",
        checkout_api_key,
        field_source(
            "checkout.api_key",
            Some("COVERLY_CHECKOUT_API_KEY"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "checkout.timeout_secs",
        &config.checkout.timeout_secs.to_string(),
        field_source(
            "checkout.timeout_secs",
            Some("COVERLY_CHECKOUT_TIMEOUT_SECS"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "catalog.products_path",
        &config
            .catalog
            .products_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<builtin>".to_string()),
        field_source(
            "catalog.products_path",
            Some("COVERLY_CATALOG_PRODUCTS_PATH"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "catalog.questions_path",
        &config
            .catalog
            .questions_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<builtin>".to_string()),
        field_source(
            "catalog.questions_path",
            Some("COVERLY_CATALOG_QUESTIONS_PATH"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        field_source(
            "logging.level",
            Some("COVERLY_LOGGING_LEVEL"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        field_source(
            "logging.format",
            Some("COVERLY_LOGGING_FORMAT"),
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        ),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("coverly.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/coverly.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: Option<&str>,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_key {
        if env::var_os(env_key).is_some() {
            return format!("env ({env_key})");
        }
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
