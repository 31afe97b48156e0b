use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use coverly_core::InsuranceLine;
use serde::Serialize;

use crate::bootstrap::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "coverly-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(state: &AppState) -> HealthCheck {
    let missing: Vec<&str> = InsuranceLine::ALL
        .iter()
        .map(|line| line.collection_name())
        .filter(|name| {
            state
                .engine
                .product_catalog()
                .collection(name)
                .map(|collection| collection.products.is_empty())
                .unwrap_or(true)
        })
        .collect();

    if missing.is_empty() {
        HealthCheck {
            status: "ready",
            detail: "all insurance lines have rateable products".to_string(),
        }
    } else {
        HealthCheck {
            status: "degraded",
            detail: format!("lines without products: {}", missing.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, Json};
    use coverly_core::config::AppConfig;

    use crate::bootstrap::bootstrap_with_config;
    use crate::health::health;

    #[tokio::test]
    async fn health_returns_ready_with_builtin_catalogs() {
        let state = bootstrap_with_config(AppConfig::default()).expect("bootstrap");

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
    }
}
