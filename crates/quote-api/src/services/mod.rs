//! 핸들러에서 사용하는 서비스 로직.

pub mod search;

pub use search::validate_candidate;
