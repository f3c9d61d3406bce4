//! API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 일관된 에러 형식 `{"error": <메시지>}`를 제공합니다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 에러 응답 본문.
///
/// # 예시
///
/// ```json
/// {"error": "No price data"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
}

/// API 핸들러 에러.
///
/// 2단계 분류를 따릅니다: 클라이언트 입력 문제([`ApiError::InvalidRequest`])는
/// 400으로, 제공자 측 문제([`ApiError::NotFound`]/[`ApiError::Upstream`])는
/// 404/500으로 응답합니다. 검색 경로의 후보별 실패는 세 번째 암묵적
/// 단계로, 이 타입에 도달하지 않고 조용히 건너뜁니다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 클라이언트 입력 문제 (400)
    #[error("{0}")]
    InvalidRequest(String),

    /// 데이터 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 상류 제공자 실패 (500)
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    /// HTTP 상태 코드 반환.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;
