//! 검색 후보 검증.
//!
//! 후보 심볼 하나를 상류 제공자에 대해 검증하는 best-effort 로직입니다.
//! 모든 후보별 실패는 `None`으로 흡수되며 호출자에게 전파되지 않습니다.
//! 한 후보의 실패가 배치 전체를 중단시키지 않습니다.

use tracing::debug;

use quote_core::SearchResult;
use quote_provider::MarketDataProvider;

/// 가격 확인에 사용하는 일봉 개수.
const HISTORY_DAYS: u32 = 2;

/// 표시 이름 최소 길이 (문자 수).
const MIN_NAME_CHARS: usize = 2;

/// 펀드 클래스 등 자리 표시 상장에 붙는 이름 접두사.
const PLACEHOLDER_NAME_PREFIX: &str = "0P";

/// 후보 심볼 하나를 검증합니다.
///
/// 통과 조건:
///
/// 1. 메타데이터가 존재하고 심볼 식별자가 있다.
/// 2. 표시 이름(longName 우선, 없으면 shortName)이 2자 이상이고, 쉼표가
///    없고, `0P`로 시작하지 않는다. 쉼표와 `0P` 접두사는 펀드
///    클래스/자리 표시 상장을 거르는 휴리스틱이다.
/// 3. 양수 가격을 찾을 수 있다. 일봉 조회가 성공하면 최신 종가를 쓰고,
///    성공했는데 비어 있으면 후보를 버린다. 조회가 *실패한* 경우에만
///    메타데이터의 currentPrice → regularMarketPrice로 폴백한다
///    (기본값 0).
///
/// 결과의 `change_pct`는 항상 0, `volatility`는 항상 "medium"입니다.
/// 검색 경로에서는 계산하지 않습니다.
pub async fn validate_candidate(
    provider: &dyn MarketDataProvider,
    symbol: &str,
) -> Option<SearchResult> {
    let profile = match provider.profile(symbol).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            debug!(symbol = %symbol, "메타데이터 없음, 후보 제외");
            return None;
        }
        Err(e) => {
            debug!(symbol = %symbol, error = %e, "메타데이터 조회 실패, 후보 제외");
            return None;
        }
    };

    let Some(name) = profile.display_name().map(str::to_string) else {
        debug!(symbol = %symbol, "종목명 없음, 후보 제외");
        return None;
    };
    if name.chars().count() < MIN_NAME_CHARS {
        debug!(symbol = %symbol, name = %name, "종목명이 너무 짧음, 후보 제외");
        return None;
    }
    if name.contains(',') || name.starts_with(PLACEHOLDER_NAME_PREFIX) {
        debug!(symbol = %symbol, name = %name, "자리 표시 상장으로 판단, 후보 제외");
        return None;
    }

    let price = match provider.daily_history(symbol, HISTORY_DAYS).await {
        Ok(bars) => match bars.last() {
            Some(bar) => bar.close,
            None => {
                debug!(symbol = %symbol, "가격 데이터 없음, 후보 제외");
                return None;
            }
        },
        Err(e) => {
            debug!(symbol = %symbol, error = %e, "일봉 조회 실패, 메타데이터 가격으로 폴백");
            profile
                .current_price
                .or(profile.regular_market_price)
                .unwrap_or(0.0)
        }
    };

    if price <= 0.0 {
        debug!(symbol = %symbol, price, "양수 가격 없음, 후보 제외");
        return None;
    }

    Some(SearchResult::new(symbol, name, price, profile.sector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{named_profile, HistoryScript, ProfileScript, StubProvider};
    use quote_provider::SymbolProfile;

    #[tokio::test]
    async fn test_valid_candidate() {
        let provider = StubProvider::default()
            .with_profile(
                "AAPL",
                ProfileScript::Found(SymbolProfile {
                    sector: Some("Technology".to_string()),
                    ..named_profile("AAPL", "Apple Inc.")
                }),
            )
            .with_history("AAPL", HistoryScript::Bars(vec![218.36, 219.86]));

        let result = validate_candidate(&provider, "AAPL").await.unwrap();

        assert_eq!(result.symbol, "AAPL");
        assert_eq!(result.name, "Apple Inc.");
        assert_eq!(result.price, 219.86);
        assert_eq!(result.sector, "Technology");
        // 검색 경로의 고정값
        assert_eq!(result.change_pct, 0.0);
        assert_eq!(result.volatility, "medium");
    }

    #[tokio::test]
    async fn test_missing_profile_is_skipped() {
        let provider = StubProvider::default();

        assert!(validate_candidate(&provider, "XXXX").await.is_none());
    }

    #[tokio::test]
    async fn test_profile_error_is_skipped() {
        let provider = StubProvider::default().with_profile("AAPL", ProfileScript::Fail);

        assert!(validate_candidate(&provider, "AAPL").await.is_none());
    }

    #[tokio::test]
    async fn test_short_name_is_skipped() {
        let provider = StubProvider::default()
            .with_profile("X", ProfileScript::Found(named_profile("X", "X")))
            .with_history("X", HistoryScript::Bars(vec![10.0]));

        assert!(validate_candidate(&provider, "X").await.is_none());
    }

    #[tokio::test]
    async fn test_comma_name_is_skipped_despite_valid_price() {
        let provider = StubProvider::default()
            .with_profile(
                "FUND",
                ProfileScript::Found(named_profile("FUND", "Fund Class A, Acc")),
            )
            .with_history("FUND", HistoryScript::Bars(vec![100.0, 101.0]));

        assert!(validate_candidate(&provider, "FUND").await.is_none());
    }

    #[tokio::test]
    async fn test_placeholder_prefix_is_skipped() {
        let provider = StubProvider::default()
            .with_profile(
                "0P0000ABCD",
                ProfileScript::Found(named_profile("0P0000ABCD", "0P Placeholder Fund")),
            )
            .with_history("0P0000ABCD", HistoryScript::Bars(vec![1.0]));

        assert!(validate_candidate(&provider, "0P0000ABCD").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_history_is_skipped_without_fallback() {
        // 일봉 조회가 "성공했지만 비어 있음"이면 메타데이터 가격이 있어도
        // 폴백하지 않고 후보를 버린다
        let provider = StubProvider::default()
            .with_profile(
                "GHOST",
                ProfileScript::Found(SymbolProfile {
                    current_price: Some(42.0),
                    ..named_profile("GHOST", "Ghost Corp")
                }),
            )
            .with_history("GHOST", HistoryScript::Empty);

        assert!(validate_candidate(&provider, "GHOST").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_history_falls_back_to_current_price() {
        let provider = StubProvider::default()
            .with_profile(
                "AAPL",
                ProfileScript::Found(SymbolProfile {
                    current_price: Some(220.1),
                    regular_market_price: Some(219.86),
                    ..named_profile("AAPL", "Apple Inc.")
                }),
            )
            .with_history("AAPL", HistoryScript::Fail);

        let result = validate_candidate(&provider, "AAPL").await.unwrap();

        assert_eq!(result.price, 220.1);
    }

    #[tokio::test]
    async fn test_failed_history_falls_back_to_regular_market_price() {
        let provider = StubProvider::default()
            .with_profile(
                "AAPL",
                ProfileScript::Found(SymbolProfile {
                    regular_market_price: Some(219.86),
                    ..named_profile("AAPL", "Apple Inc.")
                }),
            )
            .with_history("AAPL", HistoryScript::Fail);

        let result = validate_candidate(&provider, "AAPL").await.unwrap();

        assert_eq!(result.price, 219.86);
    }

    #[tokio::test]
    async fn test_failed_history_without_metadata_price_is_skipped() {
        let provider = StubProvider::default()
            .with_profile("AAPL", ProfileScript::Found(named_profile("AAPL", "Apple Inc.")))
            .with_history("AAPL", HistoryScript::Fail);

        assert!(validate_candidate(&provider, "AAPL").await.is_none());
    }

    #[tokio::test]
    async fn test_non_positive_price_is_skipped() {
        let provider = StubProvider::default()
            .with_profile(
                "DEAD",
                ProfileScript::Found(named_profile("DEAD", "Delisted Corp")),
            )
            .with_history("DEAD", HistoryScript::Bars(vec![0.0]));

        assert!(validate_candidate(&provider, "DEAD").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_sector_defaults_to_na() {
        let provider = StubProvider::default()
            .with_profile(
                "005930.KS",
                ProfileScript::Found(named_profile("005930.KS", "삼성전자")),
            )
            .with_history("005930.KS", HistoryScript::Bars(vec![78_000.0]));

        let result = validate_candidate(&provider, "005930.KS").await.unwrap();

        assert_eq!(result.sector, "N/A");
        assert_eq!(result.name, "삼성전자");
    }
}
