//! # Quote Provider
//!
//! Yahoo Finance 상류 시세 제공자 클라이언트를 제공합니다.
//!
//! - [`MarketDataProvider`]: API 핸들러와 HTTP 클라이언트 사이의 경계 trait
//! - [`YahooClient`]: reqwest 기반 구현체
//! - [`ProviderError`]: 제공자 에러 타입

pub mod error;
pub mod models;
pub mod yahoo;

pub use error::ProviderError;
pub use models::{DailyBar, SymbolProfile};
pub use yahoo::{MarketDataProvider, YahooClient};
