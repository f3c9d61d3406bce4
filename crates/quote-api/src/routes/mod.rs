//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `GET /` - 서버 안내 (엔드포인트 목록)
//! - `GET /health` - 헬스 체크 (liveness)
//! - `GET /api/quote` - 단일 종목 시세 조회
//! - `GET /api/search` - 심볼 검색

pub mod index;
pub mod quote;
pub mod search;

pub use index::{index_router, IndexResponse};
pub use quote::{quote_router, QuoteQuery};
pub use search::{search_router, SearchQuery, SearchResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(index_router())
        .nest("/api", quote_router().merge(search_router()))
}
