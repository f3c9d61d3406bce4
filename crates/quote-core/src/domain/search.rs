//! 심볼 검색 결과 타입.

use serde::{Deserialize, Serialize};

/// 섹터 정보가 없을 때 사용하는 기본값.
pub const UNKNOWN_SECTOR: &str = "N/A";

/// 검색 결과의 변동성 필드 고정값.
///
/// 검색 경로에서는 변동성을 실제로 계산하지 않습니다. 등락률(`change_pct`)도
/// 같은 이유로 항상 0입니다. 실제 계산은 `/api/quote`에서만 수행합니다.
pub const SEARCH_VOLATILITY: &str = "medium";

/// 검증을 통과한 검색 후보 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 검증된 심볼 (예: "AAPL", "005930.KS")
    pub symbol: String,
    /// 종목명 (longName 우선, 없으면 shortName)
    pub name: String,
    /// 가장 최근 종가 (또는 메타데이터의 현재가)
    pub price: f64,
    /// 항상 0 (검색 경로에서는 계산하지 않음)
    pub change_pct: f64,
    /// 섹터, 없으면 "N/A"
    pub sector: String,
    /// 항상 "medium"
    pub volatility: String,
}

impl SearchResult {
    /// 검증된 값들로 검색 결과를 조립합니다.
    ///
    /// `change_pct`와 `volatility`는 고정 값으로 채워집니다.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64, sector: Option<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            change_pct: 0.0,
            sector: sector.unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
            volatility: SEARCH_VOLATILITY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_placeholder_fields() {
        let result = SearchResult::new("AAPL", "Apple Inc.", 150.0, Some("Technology".to_string()));

        assert_eq!(result.change_pct, 0.0);
        assert_eq!(result.volatility, "medium");
        assert_eq!(result.sector, "Technology");
    }

    #[test]
    fn test_new_defaults_missing_sector() {
        let result = SearchResult::new("005930.KS", "삼성전자", 78_000.0, None);

        assert_eq!(result.sector, "N/A");
    }

    #[test]
    fn test_json_field_names() {
        let result = SearchResult::new("AAPL", "Apple Inc.", 150.0, None);
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains(r#""symbol":"AAPL""#));
        assert!(json.contains(r#""name":"Apple Inc.""#));
        assert!(json.contains(r#""change_pct":0.0"#));
        assert!(json.contains(r#""sector":"N/A""#));
        assert!(json.contains(r#""volatility":"medium""#));
    }
}
