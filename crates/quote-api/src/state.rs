//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 Arc로 래핑되어 Axum의 State extractor를 통해 핸들러에
//! 주입됩니다. 핵심 로직은 공유 가변 상태를 갖지 않으므로 잠금이 필요
//! 없습니다.

use std::sync::Arc;

use quote_provider::MarketDataProvider;

/// 애플리케이션 공유 상태.
///
/// 핸들러가 필요로 하는 것은 상류 제공자 핸들과 약간의 메타데이터뿐입니다.
#[derive(Clone)]
pub struct AppState {
    /// 상류 시세 제공자
    pub provider: Arc<dyn MarketDataProvider>,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초) 반환.
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}
