//! 단일 종목 시세 endpoint.
//!
//! `GET /api/quote?symbol=SYMBOL` - 최근 2일의 일봉에서 최신 종가와
//! 전일 대비 등락률을 계산해 반환합니다.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use quote_core::Quote;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// 시세 계산에 사용하는 일봉 개수. 최신 종가와 전일 종가만 필요합니다.
const HISTORY_DAYS: u32 = 2;

/// 시세 조회 쿼리.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    /// 조회할 심볼 (필수)
    pub symbol: Option<String>,
}

/// 단일 종목 시세 조회.
///
/// GET /api/quote?symbol=SYMBOL
///
/// - `symbol` 누락/공백: 400 `{"error": "no symbol"}` (상류 호출 없음)
/// - 가격 데이터 없음: 404 `{"error": "No price data"}`
/// - 그 외 상류 실패: 500, 내부 에러 메시지를 로그에 남긴 뒤 그대로 전달
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<Quote>> {
    let symbol = query.symbol.as_deref().map(str::trim).unwrap_or_default();
    if symbol.is_empty() {
        return Err(ApiError::InvalidRequest("no symbol".to_string()));
    }

    let bars = state
        .provider
        .daily_history(symbol, HISTORY_DAYS)
        .await
        .map_err(|e| {
            error!(symbol = %symbol, error = %e, "시세 조회 실패");
            ApiError::Upstream(e.to_string())
        })?;

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let quote = Quote::from_daily_closes(symbol, &closes)
        .ok_or_else(|| ApiError::NotFound("No price data".to_string()))?;

    info!(
        symbol = %symbol,
        price = quote.price,
        change_pct = quote.change_pct,
        "시세 조회 성공"
    );

    Ok(Json(quote))
}

/// 시세 라우터 생성.
pub fn quote_router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", get(get_quote))
}
