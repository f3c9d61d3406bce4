//! 심볼 검색 endpoint.
//!
//! `GET /api/search?query=QUERY` - 자유 텍스트 쿼리에서 후보 심볼을
//! 유도하고, 각 후보를 상류 제공자에 순차 검증한 뒤 최대 20개의 결과를
//! 반환합니다. 이 작업은 어떤 경우에도 200을 반환합니다.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use quote_core::{CandidateSet, KoreanBuckets, SearchResult};

use crate::services::search::validate_candidate;
use crate::state::AppState;

/// 반환할 최대 검색 결과 수.
const MAX_RESULTS: usize = 20;

/// 검색 쿼리.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// 자유 텍스트 쿼리 (선택, 공백 트림)
    pub query: Option<String>,
}

/// 검색 응답.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    /// 검증을 통과한 결과 목록 (최대 20개)
    pub results: Vec<SearchResult>,
}

/// 심볼 검색.
///
/// GET /api/search?query=QUERY
///
/// 빈 쿼리는 상류 호출 없이 빈 목록을 반환합니다. bare 후보는 검증 통과
/// 즉시 결과에 추가되고, 한국 후보(`.KS`/`.KQ`)는 거래소 접미사별로 첫
/// 번째 유효 결과만 유지한 뒤 `.KS` → `.KQ` 순서로 덧붙입니다.
pub async fn search_symbols(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let query = query.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Json(SearchResponse {
            results: Vec::new(),
        });
    }

    let candidates = CandidateSet::derive(query);
    debug!(
        query = %query,
        bare = candidates.bare.len(),
        korean = candidates.korean.len(),
        "검색 후보 유도"
    );

    let mut results = Vec::new();

    // bare 후보는 검증 통과 즉시 추가
    for symbol in &candidates.bare {
        if let Some(result) = validate_candidate(state.provider.as_ref(), symbol).await {
            results.push(result);
        }
    }

    // 한국 후보는 접미사별 버킷으로 중복 제거
    let mut buckets = KoreanBuckets::default();
    for symbol in &candidates.korean {
        if let Some(result) = validate_candidate(state.provider.as_ref(), symbol).await {
            buckets.offer(result);
        }
    }
    results.extend(buckets.into_results());

    results.truncate(MAX_RESULTS);

    info!(query = %query, count = results.len(), "검색 완료");

    Json(SearchResponse { results })
}

/// 검색 라우터 생성.
pub fn search_router() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_symbols))
}
