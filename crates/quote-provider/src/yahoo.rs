//! Yahoo Finance 시세 제공자.
//!
//! Yahoo Finance 공개 JSON 엔드포인트를 사용합니다:
//!
//! - `/v8/finance/chart/{symbol}?interval=1d&range={N}d` - 일봉 OHLCV
//! - `/v10/finance/quoteSummary/{symbol}?modules=price,summaryProfile,financialData`
//!   - 종목 메타데이터 (종목명, 섹터, 현재가)
//!
//! # 심볼 형식
//!
//! 모든 심볼은 Yahoo Finance 형식으로 전달되어야 합니다:
//! - 한국 주식: "005930.KS" (코스피) 또는 "247540.KQ" (코스닥)
//! - 미국 주식: "AAPL", "GOOGL"
//!
//! # 에러 규약
//!
//! 유효하지 않은 심볼은 에러가 아니라 "데이터 없음"(빈 목록 / `None`)으로
//! 취급합니다. Yahoo는 같은 상황을 HTTP 404로 줄 때도 있고 200 응답 본문의
//! 구조화된 `error` 필드로 줄 때도 있는데, 둘 다 동일하게 처리합니다.
//! 전송 실패나 그 외 상태 코드만 [`ProviderError`]로 전파됩니다.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use quote_core::UpstreamConfig;

use crate::models::{
    ChartResponse, ChartResult, DailyBar, QuoteSummaryResponse, QuoteSummaryResult, SymbolProfile,
};
use crate::ProviderError;

/// 거래소 중립적 시세 데이터 제공자 trait.
///
/// API 핸들러와 HTTP 클라이언트 사이의 경계입니다. 핸들러는
/// `Arc<dyn MarketDataProvider>`를 들고 있으므로 테스트에서는 스크립트된
/// 스텁으로 교체할 수 있습니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// 최근 `days`일의 일봉을 시간순(과거 → 최신)으로 조회합니다.
    ///
    /// 유효하지 않은 심볼은 빈 목록을 반환합니다.
    async fn daily_history(&self, symbol: &str, days: u32)
        -> Result<Vec<DailyBar>, ProviderError>;

    /// 종목 메타데이터를 조회합니다.
    ///
    /// 유효하지 않은 심볼은 `None`을 반환합니다.
    async fn profile(&self, symbol: &str) -> Result<Option<SymbolProfile>, ProviderError>;
}

/// Yahoo Finance HTTP 클라이언트.
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    /// 설정으로부터 클라이언트를 생성합니다.
    ///
    /// 타임아웃과 User-Agent는 [`UpstreamConfig`]를 따릅니다.
    ///
    /// # Errors
    /// reqwest 클라이언트 구성이 실패하면 에러를 반환합니다.
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ProviderError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET 요청을 보내고 상태 코드와 본문을 반환합니다.
    async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, String), ProviderError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// 차트 결과를 DailyBar 목록으로 변환합니다.
    ///
    /// 종가가 null인 슬롯은 제외하고 시간순으로 정렬합니다.
    fn bars_from_chart(result: ChartResult) -> Vec<DailyBar> {
        let Some(quote) = result.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        let mut bars: Vec<DailyBar> = result
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let close = quote.close.get(i).copied().flatten()?;
                let date = DateTime::from_timestamp(*ts, 0)?.date_naive();
                Some(DailyBar {
                    date,
                    open: quote.open.get(i).copied().flatten(),
                    high: quote.high.get(i).copied().flatten(),
                    low: quote.low.get(i).copied().flatten(),
                    close,
                    volume: quote.volume.get(i).copied().flatten(),
                })
            })
            .collect();

        bars.sort_by_key(|b| b.date);
        bars
    }

    /// quoteSummary 결과를 SymbolProfile로 변환합니다.
    ///
    /// price 모듈에 심볼 식별자가 없으면 유효하지 않은 종목으로 봅니다.
    fn profile_from_summary(result: QuoteSummaryResult) -> Option<SymbolProfile> {
        let price = result.price?;
        let symbol = price.symbol?;

        Some(SymbolProfile {
            symbol,
            long_name: price.long_name,
            short_name: price.short_name,
            sector: result.summary_profile.and_then(|p| p.sector),
            current_price: result
                .financial_data
                .and_then(|f| f.current_price)
                .and_then(|v| v.raw),
            regular_market_price: price.regular_market_price.and_then(|v| v.raw),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn daily_history(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<Vec<DailyBar>, ProviderError> {
        let url = format!(
            "{}/v8/finance/chart/{}",
            self.base_url,
            urlencoding::encode(symbol)
        );
        let range = format!("{}d", days);

        debug!(symbol = %symbol, range = %range, "일봉 조회");

        let (status, body) = self
            .get_text(&url, &[("interval", "1d"), ("range", &range)])
            .await?;

        if status == StatusCode::NOT_FOUND {
            debug!(symbol = %symbol, "차트 데이터 없음 (404)");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                code: status.as_u16() as i32,
                message: body,
            });
        }

        let parsed: ChartResponse = serde_json::from_str(&body)?;

        if let Some(error) = parsed.chart.error {
            warn!(
                symbol = %symbol,
                code = ?error.code,
                description = ?error.description,
                "차트 응답에 에러 포함, 데이터 없음으로 처리"
            );
            return Ok(Vec::new());
        }

        let Some(result) = parsed
            .chart
            .result
            .and_then(|mut r| (!r.is_empty()).then(|| r.remove(0)))
        else {
            return Ok(Vec::new());
        };

        let mut bars = Self::bars_from_chart(result);

        // range 파라미터와 무관하게 최근 days개만 반환 (뒤에서부터)
        if bars.len() > days as usize {
            let skip = bars.len() - days as usize;
            bars.drain(..skip);
        }

        debug!(symbol = %symbol, count = bars.len(), "일봉 수신");
        Ok(bars)
    }

    async fn profile(&self, symbol: &str) -> Result<Option<SymbolProfile>, ProviderError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}",
            self.base_url,
            urlencoding::encode(symbol)
        );

        debug!(symbol = %symbol, "메타데이터 조회");

        let (status, body) = self
            .get_text(&url, &[("modules", "price,summaryProfile,financialData")])
            .await?;

        if status == StatusCode::NOT_FOUND {
            debug!(symbol = %symbol, "메타데이터 없음 (404)");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                code: status.as_u16() as i32,
                message: body,
            });
        }

        let parsed: QuoteSummaryResponse = serde_json::from_str(&body)?;
        let summary = parsed.quote_summary;

        if let Some(error) = summary.error {
            warn!(
                symbol = %symbol,
                code = ?error.code,
                description = ?error.description,
                "메타데이터 응답에 에러 포함, 없음으로 처리"
            );
            return Ok(None);
        }

        let Some(result) = summary
            .result
            .and_then(|mut r| (!r.is_empty()).then(|| r.remove(0)))
        else {
            return Ok(None);
        };

        Ok(Self::profile_from_summary(result))
    }
}
