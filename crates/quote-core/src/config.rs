//! 설정 관리.
//!
//! 선택적 설정 파일(`config/default.toml`)과 `QUOTE__` 접두사 환경 변수에서
//! 애플리케이션 설정을 로드합니다.

use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::path::Path;
use std::time::Duration;

/// 애플리케이션 전체 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 서버 설정
    pub server: ServerConfig,
    /// 상류 시세 제공자 설정
    pub upstream: UpstreamConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// HTTP 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5002,
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// 상류 시세 제공자(Yahoo Finance) 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API 기본 URL. 테스트에서는 로컬 목 서버로 교체한다.
    pub base_url: String,
    /// 요청 타임아웃 (초). 상류가 응답하지 않아도 핸들러가 무한정
    /// 블록되지 않도록 항상 적용된다.
    pub timeout_secs: u64,
    /// User-Agent 헤더. 기본 reqwest UA는 Yahoo가 차단한다.
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

impl UpstreamConfig {
    /// 요청 타임아웃을 Duration으로 반환.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨 (예: "info", "quote_api=debug")
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일은 없어도 됩니다. 환경 변수는 `QUOTE__` 접두사와 `__` 구분자를
    /// 사용합니다 (예: `QUOTE__SERVER__PORT=8080`,
    /// `QUOTE__UPSTREAM__TIMEOUT_SECS=5`).
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("QUOTE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 기본 경로(`config/default.toml`)에서 설정을 로드합니다.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5002);
        assert_eq!(config.upstream.base_url, "https://query1.finance.yahoo.com");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::default();
        let addr = config.socket_addr().unwrap();

        assert_eq!(addr.port(), 5002);
    }

    #[test]
    fn test_upstream_timeout_duration() {
        let config = UpstreamConfig {
            timeout_secs: 3,
            ..Default::default()
        };

        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist.toml").unwrap();

        assert_eq!(config.server.port, 5002);
    }
}
