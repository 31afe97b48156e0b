use std::sync::Arc;

use anyhow::{Context, Result};
use coverly_core::checkout::CheckoutGateway;
use coverly_core::config::AppConfig;
use coverly_core::{ProductCatalog, QuestionCatalog, RecommendationEngine};

use crate::gateway::HttpCheckoutGateway;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub engine: Arc<RecommendationEngine>,
    pub gateway: Option<Arc<dyn CheckoutGateway>>,
}

/// Builds the shared application state: catalogs (configured paths or
/// compiled-in seeds), the rating engine, and the checkout gateway when
/// one is configured.
pub fn bootstrap_with_config(config: AppConfig) -> Result<AppState> {
    let products = match config.catalog.products_path.as_deref() {
        Some(path) => ProductCatalog::from_path(path)
            .with_context(|| format!("loading product catalog from `{}`", path.display()))?,
        None => ProductCatalog::builtin(),
    };
    let questions = match config.catalog.questions_path.as_deref() {
        Some(path) => QuestionCatalog::from_path(path)
            .with_context(|| format!("loading question catalog from `{}`", path.display()))?,
        None => QuestionCatalog::builtin(),
    };

    let engine = Arc::new(RecommendationEngine::new(questions, products));

    let gateway: Option<Arc<dyn CheckoutGateway>> = if config.checkout.enabled {
        let endpoint = config
            .checkout
            .endpoint
            .clone()
            .context("checkout.enabled requires checkout.endpoint")?;
        Some(Arc::new(HttpCheckoutGateway::new(
            endpoint,
            config.checkout.api_key.clone(),
            config.checkout.timeout_secs,
        )?))
    } else {
        None
    };

    Ok(AppState { config: Arc::new(config), engine, gateway })
}

#[cfg(test)]
mod tests {
    use coverly_core::config::AppConfig;

    use super::bootstrap_with_config;

    #[test]
    fn default_config_boots_with_builtin_catalogs_and_no_gateway() {
        let state = bootstrap_with_config(AppConfig::default()).expect("bootstrap");

        assert!(state.gateway.is_none());
        assert_eq!(state.engine.product_catalog().collections.len(), 5);
    }

    #[test]
    fn missing_catalog_files_fail_bootstrap() {
        let mut config = AppConfig::default();
        config.catalog.products_path = Some("no-such-catalog.json".into());

        assert!(bootstrap_with_config(config).is_err());
    }
}
