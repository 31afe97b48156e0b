use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use coverly_core::checkout::{CartDraft, CartReceipt};
use coverly_core::errors::{ApplicationError, InterfaceError};
use coverly_core::{ProductCollection, ProductRecommendation, RawAnswers};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bootstrap::AppState;
use crate::health;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/collections", get(list_collections))
        .route("/api/recommendations", post(recommend))
        .route("/api/checkout", post(checkout))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub collection_name: String,
    #[serde(default)]
    pub answers: RawAnswers,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<ProductRecommendation>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub correlation_id: String,
}

async fn list_collections(State(state): State<AppState>) -> Json<Vec<ProductCollection>> {
    Json(state.engine.product_catalog().collections.clone())
}

async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, (StatusCode, Json<ErrorBody>)> {
    let correlation_id = Uuid::new_v4().to_string();

    match state.engine.recommend(&request.answers, &request.collection_name) {
        Ok(recommendations) => {
            tracing::info!(
                event_name = "recommendation.served",
                correlation_id = %correlation_id,
                collection_name = %request.collection_name,
                results = recommendations.len(),
                "recommendation request served"
            );
            Ok(Json(RecommendationResponse { recommendations }))
        }
        Err(error) => {
            tracing::warn!(
                event_name = "recommendation.rejected",
                correlation_id = %correlation_id,
                collection_name = %request.collection_name,
                error = %error,
                "recommendation request rejected"
            );
            Err(error_response(ApplicationError::from(error).into_interface(correlation_id)))
        }
    }
}

async fn checkout(
    State(state): State<AppState>,
    Json(draft): Json<CartDraft>,
) -> Result<Json<CartReceipt>, (StatusCode, Json<ErrorBody>)> {
    let correlation_id = Uuid::new_v4().to_string();

    let Some(gateway) = state.gateway.as_ref() else {
        return Err(error_response(
            ApplicationError::Integration("checkout is not configured".to_string())
                .into_interface(correlation_id),
        ));
    };

    if draft.is_empty() {
        return Err(error_response(
            ApplicationError::Domain(coverly_core::DomainError::InvariantViolation(
                "cart draft has no items".to_string(),
            ))
            .into_interface(correlation_id),
        ));
    }

    match gateway.create_cart(&draft).await {
        Ok(receipt) => {
            tracing::info!(
                event_name = "checkout.cart_created",
                correlation_id = %correlation_id,
                cart_id = %receipt.cart_id,
                "cart created"
            );
            Ok(Json(receipt))
        }
        Err(error) => {
            tracing::error!(
                event_name = "checkout.cart_failed",
                correlation_id = %correlation_id,
                error = %error,
                "cart creation failed"
            );
            Err(error_response(error.into_interface(correlation_id)))
        }
    }
}

fn error_response(error: InterfaceError) -> (StatusCode, Json<ErrorBody>) {
    let (status, correlation_id) = match &error {
        InterfaceError::BadRequest { correlation_id, .. } => {
            (StatusCode::BAD_REQUEST, correlation_id.clone())
        }
        InterfaceError::ServiceUnavailable { correlation_id, .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, correlation_id.clone())
        }
        InterfaceError::Internal { correlation_id, .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, correlation_id.clone())
        }
    };

    (status, Json(ErrorBody { error: error.user_message(), correlation_id }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use coverly_core::config::AppConfig;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::bootstrap::bootstrap_with_config;

    use super::router;

    fn app() -> axum::Router {
        router(bootstrap_with_config(AppConfig::default()).expect("bootstrap"))
    }

    async fn body_json(body: Body) -> Value {
        let bytes = to_bytes(body, usize::MAX).await.expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn post_json(uri: &str, payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn recommendations_endpoint_rates_an_accident_intake() {
        let response = app()
            .oneshot(post_json(
                "/api/recommendations",
                json!({
                    "collection_name": "Accident Insurance",
                    "answers": {
                        "accident-plan-choice": "Plan B - Lower reimbursements, but more budget-friendly",
                        "accident-coverage-type": "My Family"
                    }
                }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response.into_body()).await;
        let recommendations = payload["recommendations"].as_array().expect("array");
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0]["price"], "63.78");
        assert_eq!(
            recommendations[0]["product"]["name"],
            "Accident Insurance - Plan B, Family"
        );
    }

    #[tokio::test]
    async fn unknown_collections_return_an_empty_result_not_an_error() {
        let response = app()
            .oneshot(post_json(
                "/api/recommendations",
                json!({ "collection_name": "Pet Insurance", "answers": {} }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response.into_body()).await;
        assert!(payload["recommendations"].as_array().expect("array").is_empty());
    }

    #[tokio::test]
    async fn the_critical_illness_contract_violation_maps_to_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/recommendations",
                json!({
                    "collection_name": "Critical Illness Insurance",
                    "answers": { "critical-coverage-amount": "$10,000" }
                }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = body_json(response.into_body()).await;
        assert!(payload["correlation_id"].is_string());
        assert_eq!(
            payload["error"],
            "The request could not be processed. Check inputs and try again."
        );
    }

    #[tokio::test]
    async fn collections_endpoint_lists_the_catalog() {
        let response = app()
            .oneshot(Request::builder().uri("/api/collections").body(Body::empty()).expect("req"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response.into_body()).await;
        assert_eq!(payload.as_array().expect("array").len(), 5);
    }

    #[tokio::test]
    async fn checkout_without_a_gateway_returns_service_unavailable() {
        let response = app()
            .oneshot(post_json(
                "/api/checkout",
                json!({
                    "lineItems": [{ "quantity": 1, "productId": 101, "variantId": 7101 }],
                    "customItems": []
                }),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn health_endpoint_reports_ready() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("req"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response.into_body()).await;
        assert_eq!(payload["status"], "ready");
    }
}
