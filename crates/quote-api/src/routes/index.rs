//! 루트 안내 및 헬스 체크 endpoint.
//!
//! 루트(`/`)는 제공되는 엔드포인트 목록을 안내하고, `/health`는
//! 로드밸런서/오케스트레이션용 liveness probe로 사용됩니다.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// 루트 응답 구조체.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    /// 서버 배너 메시지
    pub message: String,
    /// 제공되는 엔드포인트 목록
    pub endpoints: Vec<String>,
}

/// 서버 안내.
///
/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "quote API server is running".to_string(),
        endpoints: vec![
            "/api/quote?symbol=SYMBOL".to_string(),
            "/api/search?query=QUERY".to_string(),
        ],
    })
}

/// 간단한 헬스 체크 (liveness probe용).
///
/// 서버가 응답 가능한 상태인지만 확인합니다.
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// 루트/헬스 라우터 생성.
pub fn index_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
