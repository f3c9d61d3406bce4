//! 시세 제공자 에러 타입.

use thiserror::Error;

/// 상류 시세 제공자 관련 에러.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 상류 API가 실패 상태 코드를 반환
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// 응답 본문 파싱 실패
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// 재시도 가능한 에러인지 확인.
    ///
    /// 이 서비스는 재시도하지 않지만, 호출 측 로깅에서 일시적 에러와
    /// 영구적 에러를 구분하는 데 사용합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(ProviderError::Network("connection refused".to_string()).is_retryable());
        assert!(ProviderError::Timeout("deadline elapsed".to_string()).is_retryable());
        assert!(!ProviderError::Parse("bad json".to_string()).is_retryable());
        assert!(!ProviderError::Api {
            code: 500,
            message: "internal".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::Api {
            code: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: Too Many Requests");
    }
}
