//! 도메인 정책(허용 prefix / 차단 substring 필터링 규칙).

use crate::domain::entry::ConfigLine;

/// 기본 허용 prefix 목록(대소문자 구분).
pub const DEFAULT_ALLOW_PREFIXES: &[&str] = &[
    "VITE_SUPABASE",
    "SUPABASE",
    "STRIPE",
    "VITE_STRIPE",
    "OPENROUTER",
    "VITE_APP",
    "ADMIN",
    "VITE_SITE_URL",
];

/// 기본 차단 substring 목록(대소문자 구분).
pub const DEFAULT_BLOCK_SUBSTRINGS: &[&str] =
    &["POSTHOG", "SENTRY", "LIVEKIT", "R2_", "CLOUDFLARE", "AWS"];

/// 라인을 마이그레이션 대상에서 제외한 사유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyValue,
    Blocked,
    NonCore,
    Malformed,
}

impl SkipReason {
    /// 진행 로그에 출력할 한 줄 메시지.
    /// `subject`는 Malformed일 때 원본 라인, 나머지는 key 이름이다.
    pub fn describe(self, subject: &str) -> String {
        match self {
            Self::EmptyValue => format!("Skipping empty key: {subject}"),
            Self::Blocked => format!("Skipping blocked third-party key: {subject}"),
            Self::NonCore => format!("Skipping non-core key: {subject}"),
            Self::Malformed => format!("Skipping malformed line: {subject}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Accepted,
    Skipped(SkipReason),
}

/// 허용/차단 패턴 묶음. 생성 이후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    allow_prefixes: Vec<String>,
    block_substrings: Vec<String>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOW_PREFIXES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_BLOCK_SUBSTRINGS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl FilterPolicy {
    pub fn new(allow_prefixes: Vec<String>, block_substrings: Vec<String>) -> Self {
        Self {
            allow_prefixes,
            block_substrings,
        }
    }

    pub fn allow_prefixes(&self) -> &[String] {
        &self.allow_prefixes
    }

    pub fn block_substrings(&self) -> &[String] {
        &self.block_substrings
    }

    pub fn is_blocked(&self, key: &str) -> bool {
        self.block_substrings
            .iter()
            .any(|pattern| key.contains(pattern.as_str()))
    }

    pub fn is_allowed(&self, key: &str) -> bool {
        self.allow_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_str()))
    }

    /// 빈 값 -> 차단 -> 허용 순서로 판정한다. 차단이 허용보다 우선한다.
    pub fn classify(&self, line: &ConfigLine) -> Classification {
        if line.value.is_empty() {
            return Classification::Skipped(SkipReason::EmptyValue);
        }
        if self.is_blocked(&line.key) {
            return Classification::Skipped(SkipReason::Blocked);
        }
        if !self.is_allowed(&line.key) {
            return Classification::Skipped(SkipReason::NonCore);
        }
        Classification::Accepted
    }
}
