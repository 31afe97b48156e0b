use coverly_core::config::{AppConfig, LoadOptions};

use super::build_engine;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(error) => return format!("catalog load failed: {error}"),
    };

    let mut lines = Vec::new();
    for collection in &engine.product_catalog().collections {
        lines.push(format!(
            "{} ({} variants) - {}",
            collection.name,
            collection.products.len(),
            collection.description
        ));
        for product in &collection.products {
            lines.push(format!("  - {} [{}]", product.name, product.sku));
        }
    }

    lines.join("\n")
}
