//! Yahoo Finance 응답 와이어 모델.
//!
//! 차트(`/v8/finance/chart`)와 메타데이터(`/v10/finance/quoteSummary`)
//! 엔드포인트의 JSON 구조를 serde 모델로 정의합니다. 파싱이 끝난 뒤에는
//! [`DailyBar`]와 [`SymbolProfile`]만 크레이트 밖으로 노출됩니다.

use chrono::NaiveDate;
use serde::Deserialize;

// ==================== 일봉 ====================

/// 파싱이 끝난 일봉 하나.
///
/// 종가가 null인 바는 파싱 단계에서 걸러지므로 `close`는 항상 존재합니다.
/// 나머지 필드는 거래소/시점에 따라 비어 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBar {
    /// 거래일 (UTC 기준)
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// 종가
    pub close: f64,
    pub volume: Option<i64>,
}

/// `/v8/finance/chart` 최상위 응답.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<UpstreamErrorBody>,
}

/// Yahoo가 응답 본문에 싣는 구조화된 에러.
#[derive(Debug, Deserialize)]
pub(crate) struct UpstreamErrorBody {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// OHLCV 배열. 거래가 없던 슬롯은 null로 채워져 옵니다.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

// ==================== 메타데이터 ====================

/// 검색 후보 검증에 필요한 종목 메타데이터 요약.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolProfile {
    /// 제공자가 확인해 준 심볼
    pub symbol: String,
    /// 정식 종목명 (longName)
    pub long_name: Option<String>,
    /// 축약 종목명 (shortName)
    pub short_name: Option<String>,
    /// 섹터
    pub sector: Option<String>,
    /// 현재가 (financialData.currentPrice)
    pub current_price: Option<f64>,
    /// 정규장 가격 (price.regularMarketPrice)
    pub regular_market_price: Option<f64>,
}

impl SymbolProfile {
    /// 표시 이름: longName 우선, 없거나 비어 있으면 shortName.
    pub fn display_name(&self) -> Option<&str> {
        self.long_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.short_name.as_deref().filter(|n| !n.is_empty()))
    }
}

/// `/v10/finance/quoteSummary` 최상위 응답.
#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummary {
    pub result: Option<Vec<QuoteSummaryResult>>,
    pub error: Option<UpstreamErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    #[serde(rename = "summaryProfile")]
    pub summary_profile: Option<SummaryProfileModule>,
    #[serde(rename = "financialData")]
    pub financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceModule {
    pub symbol: Option<String>,
    #[serde(rename = "longName")]
    pub long_name: Option<String>,
    #[serde(rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryProfileModule {
    pub sector: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FinancialDataModule {
    #[serde(rename = "currentPrice")]
    pub current_price: Option<RawValue>,
}

/// Yahoo의 `{raw, fmt}` 수치 래퍼.
#[derive(Debug, Deserialize)]
pub(crate) struct RawValue {
    pub raw: Option<f64>,
}
