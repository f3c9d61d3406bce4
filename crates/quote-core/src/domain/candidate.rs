//! 검색 후보 심볼 유도.
//!
//! 사용자가 입력한 자유 텍스트 쿼리에서 검증 대상 후보 심볼을 추측합니다.
//!
//! # 심볼 형식
//!
//! 모든 후보는 Yahoo Finance 심볼 형식입니다:
//! - 한국 주식: "005930.KS" (코스피) 또는 "247540.KQ" (코스닥)
//! - 미국 주식: "AAPL", "GOOGL"

use crate::domain::search::SearchResult;

/// 한국 거래소 구분 (Yahoo Finance 심볼 접미사 기준).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KoreanExchange {
    /// 유가증권시장 (코스피)
    Kospi,
    /// 코스닥
    Kosdaq,
}

impl KoreanExchange {
    /// Yahoo Finance 심볼 접미사 반환.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Kospi => ".KS",
            Self::Kosdaq => ".KQ",
        }
    }

    /// 심볼 접미사로 거래소 판별.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol.ends_with(".KS") {
            Some(Self::Kospi)
        } else if symbol.ends_with(".KQ") {
            Some(Self::Kosdaq)
        } else {
            None
        }
    }
}

/// 쿼리에서 유도된 후보 심볼 집합.
///
/// `bare` 후보는 검증을 통과하면 결과 목록에 바로 추가되고, `korean` 후보는
/// 거래소 접미사별 버킷([`KoreanBuckets`])을 거쳐 중복 제거됩니다.
/// 후보는 `bare` → `korean` 순서로 순회합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    /// 접미사 없는 후보 (미국식 심볼)
    pub bare: Vec<String>,
    /// `.KS`/`.KQ` 후보
    pub korean: Vec<String>,
}

impl CandidateSet {
    /// 트림된 검색 쿼리에서 후보 심볼을 유도합니다.
    ///
    /// # 규칙
    ///
    /// 1. 대문자로 변환한 쿼리는 bare 후보가 된다. 단, 규칙 2 또는 3에
    ///    해당하면 제외된다.
    /// 2. 쿼리가 순수 숫자 6자리면 `<쿼리>.KS`와 `<쿼리>.KQ` 둘 다 후보가
    ///    된다. 한국 종목코드는 코스피/코스닥 어느 쪽에 상장됐는지
    ///    호출자가 알 수 없으므로 양쪽을 독립적으로 검증해야 한다.
    ///    6자리 종목코드는 한국 주식이므로 bare 후보는 만들지 않는다.
    /// 3. 원본 쿼리가 이미 `.KS`/`.KQ`로 끝나면 사용자가 거래소를 지정한
    ///    것이므로 후보는 그 쿼리 하나뿐이다. 이 접미사 검사는 대문자 변환
    ///    전의 원본 문자열 기준이다 (소문자 ".ks"는 해당하지 않음).
    /// 4. 숫자지만 6자리가 아니면 `.KS`만 추가로 시도한다.
    pub fn derive(query: &str) -> Self {
        if query.is_empty() {
            return Self::default();
        }

        // 규칙 3: 이미 거래소가 지정된 쿼리는 그대로 사용
        if query.ends_with(".KS") || query.ends_with(".KQ") {
            return Self {
                bare: Vec::new(),
                korean: vec![query.to_string()],
            };
        }

        let is_numeric = query.chars().all(|c| c.is_ascii_digit());

        // 규칙 2: 6자리 종목코드는 한국 양시장만 시도
        if is_numeric && query.len() == 6 {
            return Self {
                bare: Vec::new(),
                korean: vec![format!("{query}.KS"), format!("{query}.KQ")],
            };
        }

        let mut korean = Vec::new();
        if is_numeric {
            // 규칙 4: 자릿수가 다른 숫자는 코스피만 추측
            korean.push(format!("{query}.KS"));
        }

        Self {
            bare: vec![query.to_uppercase()],
            korean,
        }
    }

    /// 전체 후보 개수.
    pub fn len(&self) -> usize {
        self.bare.len() + self.korean.len()
    }

    /// 후보가 하나도 없는지 확인.
    pub fn is_empty(&self) -> bool {
        self.bare.is_empty() && self.korean.is_empty()
    }
}

/// 거래소 접미사별 단일 슬롯 버킷.
///
/// 같은 접미사의 유효한 후보가 여러 번 나와도 첫 번째 결과만 유지합니다.
/// 모든 후보 검증이 끝난 뒤 `.KS` → `.KQ` 고정 순서로 결과에 추가됩니다.
#[derive(Debug, Default)]
pub struct KoreanBuckets {
    kospi: Option<SearchResult>,
    kosdaq: Option<SearchResult>,
}

impl KoreanBuckets {
    /// 검증된 한국 후보 결과를 버킷에 제안합니다.
    ///
    /// 슬롯이 이미 채워져 있으면 기존 결과를 유지합니다. 접미사가 한국
    /// 거래소가 아니면 무시합니다.
    pub fn offer(&mut self, result: SearchResult) {
        let Some(exchange) = KoreanExchange::from_symbol(&result.symbol) else {
            return;
        };

        let slot = match exchange {
            KoreanExchange::Kospi => &mut self.kospi,
            KoreanExchange::Kosdaq => &mut self.kosdaq,
        };
        if slot.is_none() {
            *slot = Some(result);
        }
    }

    /// 버킷 내용을 고정된 순서(`.KS`, `.KQ`)로 꺼냅니다.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.kospi.into_iter().chain(self.kosdaq).collect()
    }
}
