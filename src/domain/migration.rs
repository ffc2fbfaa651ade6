//! 마이그레이션 실행 옵션/대상 환경/결과 집계 값 객체.

use std::fmt;
use std::path::PathBuf;

use crate::domain::policy::SkipReason;

/// CLI에서 넘어오는 실행 옵션. `None`/빈 목록은 설정 파일 값을 따른다.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub source_path: Option<PathBuf>,
    pub dry_run: bool,
    pub failure_mode: Option<FailureMode>,
    pub allow_prefixes: Vec<String>,
    pub block_substrings: Vec<String>,
}

/// 배포 플랫폼의 환경 슬롯.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentTarget {
    Production,
    Preview,
    Development,
}

impl DeploymentTarget {
    /// 프로비저닝 호출 순서.
    pub const ALL: [Self; 3] = [Self::Production, Self::Preview, Self::Development];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Preview => "preview",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 프로비저닝 호출 실패를 다루는 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// 종료 상태를 집계에 반영하지 않는다.
    Ignore,
    /// 실패를 기록하고 나머지 대상/키를 계속 진행한다.
    #[default]
    BestEffort,
    /// 첫 실패에서 실행을 중단한다.
    FailFast,
}

impl FailureMode {
    /// 지원값: ignore, best-effort(best_effort), fail-fast(fail_fast)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "best-effort" | "best_effort" => Some(Self::BestEffort),
            "fail-fast" | "fail_fast" => Some(Self::FailFast),
            _ => None,
        }
    }

    /// 설정 문자열을 해석한다. 미지정/알 수 없는 값은 best-effort.
    pub fn from_config(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::BestEffort => "best-effort",
            Self::FailFast => "fail-fast",
        }
    }
}

/// 라인 하나의 분류 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted { key: String },
    Skipped { subject: String, reason: SkipReason },
}

/// 한 번의 프로비저닝 호출 실패 기록.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionFailure {
    pub key: String,
    pub target: DeploymentTarget,
    pub message: String,
}

/// 실행 1회의 집계 결과.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub outcomes: Vec<LineOutcome>,
    pub failures: Vec<ProvisionFailure>,
    pub source_missing: bool,
}

impl MigrationReport {
    pub fn missing_source() -> Self {
        Self {
            source_missing: true,
            ..Self::default()
        }
    }

    pub fn accepted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Accepted { .. }))
            .count()
    }

    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Skipped { reason: r, .. } if *r == reason))
            .count()
    }
}
