//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{DisplayLanguage, InvalidLanguage, Language};
use crate::summary::{SearchResultSummary, SummaryError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dataset", get(dataset_info))
        .route("/search-result", post(search_result))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Describe the loaded dataset.
async fn dataset_info(State(state): State<AppState>) -> Json<DatasetInfoResponse> {
    let info = state.dataset.info().await;
    Json(DatasetInfoResponse::from_info(&info))
}

/// Summarise one search result: badges, stop summary and time-report
/// targets.
async fn search_result(
    State(state): State<AppState>,
    payload: Result<Json<SearchResultRequest>, JsonRejection>,
) -> Result<Json<SearchResultResponse>, AppError> {
    let Json(req) = payload?;
    let requested = match req.language.as_deref() {
        Some(code) => Language::parse(code)?,
        None => (*state.default_language).clone(),
    };
    let language =
        DisplayLanguage::new(requested).with_fallback((*state.default_language).clone());

    let dataset = state.dataset.current().await;
    let summary = SearchResultSummary::build(
        &req.legs,
        req.stop_idx.as_deref(),
        &*dataset,
        &*dataset,
        &language,
    )?;

    debug!(
        legs = req.legs.len(),
        language = %language.requested,
        "summarised search result"
    );

    Ok(Json(SearchResultResponse::from_summary(&summary)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<SummaryError> for AppError {
    fn from(e: SummaryError) -> Self {
        match e {
            SummaryError::InvalidInput(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SummaryError::Lookup(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<InvalidLanguage> for AppError {
    fn from(e: InvalidLanguage) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetStore};
    use crate::domain::Leg;
    use crate::summary::fixtures::{lang, leg, routes, stops};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    fn state() -> AppState {
        let dataset = Dataset::new(routes(), stops());
        AppState::new(DatasetStore::from_dataset(dataset, "unused.json"), Language::english())
    }

    fn request(
        legs: Vec<Leg>,
        language: Option<&str>,
        stop_idx: Option<Vec<usize>>,
    ) -> SearchResultRequest {
        SearchResultRequest {
            legs,
            language: language.map(str::to_string),
            stop_idx,
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn dataset_info_reports_counts() {
        let Json(info) = dataset_info(State(state())).await;
        assert_eq!(info.routes, 3);
        assert_eq!(info.stops, 9);
    }

    #[tokio::test]
    async fn search_result_uses_default_language() {
        let req = request(vec![leg("R1", 0, 2), leg("R2", 2, 5)], None, Some(vec![0, 1]));
        let Json(resp) = search_result(State(state()), Ok(Json(req))).await.unwrap();

        assert_eq!(resp.summary, "Star Ferry ($2.5) → Admiralty → Wan Chai");
        assert_eq!(resp.badges.len(), 2);
        assert_eq!(resp.time_reports[1].seq, 3);
    }

    #[tokio::test]
    async fn search_result_in_requested_language() {
        let req = request(vec![leg("R1", 0, 4)], Some("ZH"), None);
        let Json(resp) = search_result(State(state()), Ok(Json(req))).await.unwrap();
        assert_eq!(resp.summary, "天星碼頭 ($2.5) → 銅鑼灣");
    }

    #[tokio::test]
    async fn search_result_falls_back_to_server_default() {
        let dataset = Dataset::new(routes(), stops());
        let state = AppState::new(DatasetStore::from_dataset(dataset, "unused.json"), lang("zh"));

        let req = request(vec![leg("R1", 0, 4)], Some("fr"), None);
        let Json(resp) = search_result(State(state), Ok(Json(req))).await.unwrap();
        assert_eq!(resp.summary, "天星碼頭 ($2.5) → 銅鑼灣");
    }

    #[tokio::test]
    async fn empty_legs_is_bad_request() {
        let req = request(vec![], None, None);
        let err = search_result(State(state()), Ok(Json(req))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_language_is_bad_request() {
        let req = request(vec![leg("R1", 0, 4)], Some("x"), None);
        let err = search_result(State(state()), Ok(Json(req))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let req = request(vec![leg("R404", 0, 1)], None, None);
        let err = search_result(State(state()), Ok(Json(req))).await.unwrap_err();
        match &err {
            AppError::NotFound { message } => assert_eq!(message, "route not found: R404"),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    async fn post_search_result(body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/search-result")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = create_router(state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn router_serves_search_result() {
        let (status, body) =
            post_search_result(r#"{"legs": [{"routeId": "R1", "on": 0, "off": 4}], "language": "zh"}"#)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"], "天星碼頭 ($2.5) → 銅鑼灣");
        assert_eq!(body["timeReports"][0]["seq"], 0);
    }

    #[tokio::test]
    async fn negative_index_is_bad_request() {
        let (status, body) =
            post_search_result(r#"{"legs": [{"routeId": "R1", "on": -1, "off": 2}]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_bodies_are_bad_request() {
        for body in [
            r#"{}"#,
            r#"{"legs": [], "language": 5}"#,
            r#"{"legs": "#,
        ] {
            let (status, json) = post_search_result(body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert!(json["error"].is_string(), "body: {body}");
        }
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/search-result")
            .body(Body::from(r#"{"legs": []}"#))
            .unwrap();
        let response = create_router(state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn offset_overflow_is_bad_request() {
        let body = format!(
            r#"{{"legs": [{{"routeId": "R1", "on": 1, "off": 2}}], "stopIdx": [{}]}}"#,
            usize::MAX
        );
        let (status, json) = post_search_result(&body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["error"]
                .as_str()
                .unwrap()
                .starts_with("stop offset")
        );
    }

    #[tokio::test]
    async fn router_unknown_route_is_not_found() {
        let (status, json) =
            post_search_result(r#"{"legs": [{"routeId": "R404", "on": 0, "off": 1}]}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "route not found: R404");
    }

    #[test]
    fn error_body_carries_message() {
        let err: AppError = SummaryError::from(crate::summary::InvalidInputError::EmptyLegs).into();
        match err {
            AppError::BadRequest { ref message } => {
                assert_eq!(message, "itinerary must have at least one leg")
            }
            ref other => panic!("expected BadRequest, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
