//! 시세 도메인 타입.
//!
//! 단일 종목 조회(`/api/quote`)의 응답 모델과 종가 기반 등락률 계산을 제공합니다.

use serde::{Deserialize, Serialize};

/// 단일 종목의 현재 시세.
///
/// `price`는 가장 최근 일봉 종가, `change_pct`는 전일 종가 대비 등락률(%)입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// 조회한 심볼 (예: "AAPL", "005930.KS")
    pub symbol: String,
    /// 가장 최근 종가
    pub price: f64,
    /// 전일 종가 대비 등락률 (%)
    pub change_pct: f64,
}

impl Quote {
    /// 시간순(과거 → 최신) 일봉 종가 목록에서 시세를 계산합니다.
    ///
    /// - 종가가 없으면 `None`
    /// - 종가가 1개뿐이면 전일 종가를 최신 종가로 간주하여 등락률은 0
    /// - 전일 종가가 0 이하면 등락률은 0
    ///
    /// 반올림하지 않고 `f64` 정밀도를 그대로 유지합니다.
    pub fn from_daily_closes(symbol: impl Into<String>, closes: &[f64]) -> Option<Self> {
        let price = *closes.last()?;
        let prev_close = if closes.len() > 1 {
            closes[closes.len() - 2]
        } else {
            price
        };

        let change_pct = if prev_close > 0.0 {
            (price - prev_close) / prev_close * 100.0
        } else {
            0.0
        };

        Some(Self {
            symbol: symbol.into(),
            price,
            change_pct,
        })
    }
}
