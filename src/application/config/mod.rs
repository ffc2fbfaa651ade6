//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::migration::{DeploymentTarget, FailureMode};
use crate::domain::policy::{DEFAULT_ALLOW_PREFIXES, DEFAULT_BLOCK_SUBSTRINGS, FilterPolicy};

pub const DEFAULT_SOURCE_PATH: &str = ".env.local";
pub const DEFAULT_PLATFORM_NAME: &str = "Vercel";
pub const DEFAULT_PROVISIONER_COMMAND: &str = "vercel";
pub const DEFAULT_PROVISIONER_ARGS: &[&str] = &["env", "add", "{key}", "{target}"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 허용/차단 패턴
    #[serde(default)]
    pub policy: PolicyConfig,
    /// 외부 프로비저닝 CLI 실행 설정
    #[serde(default)]
    pub provisioner: ProvisionerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 읽어올 env 파일 경로
    pub source_path: Option<String>,
    /// 프로비저닝 실패 처리 방식(ignore/best-effort/fail-fast)
    pub failure_mode: Option<String>,
    /// 요약 메시지에 표시할 플랫폼 이름
    pub platform_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PolicyConfig {
    /// key가 이 중 하나로 시작해야 이전 대상이 된다
    pub allow_prefixes: Option<Vec<String>>,
    /// key에 이 중 하나라도 포함되면 이전하지 않는다
    pub block_substrings: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvisionerConfig {
    /// 실행할 로컬 명령
    pub command: Option<String>,
    /// 명령 인자. `{key}`, `{target}`이 치환된다
    pub args: Option<Vec<String>>,
}

/// 정규화된 프로비저닝 명령 사양.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionerCommandSpec {
    pub command: String,
    pub args: Vec<String>,
}

impl ProvisionerCommandSpec {
    /// 인자 템플릿의 `{key}`/`{target}`을 치환한다.
    pub fn render_args(&self, key: &str, target: DeploymentTarget) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{key}", key).replace("{target}", target.as_str()))
            .collect()
    }

    /// 사람이 읽는 용도의 명령줄. 값은 stdin으로만 전달되므로 포함되지 않는다.
    pub fn display(&self, key: &str, target: DeploymentTarget) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(self.render_args(key, target));
        parts.join(" ")
    }
}

impl Config {
    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(
            self.defaults
                .source_path
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE_PATH),
        )
    }

    pub fn failure_mode(&self) -> FailureMode {
        FailureMode::from_config(self.defaults.failure_mode.as_deref())
    }

    pub fn platform_name(&self) -> String {
        self.defaults
            .platform_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PLATFORM_NAME.to_string())
    }

    /// 설정된 목록이 없으면 기본 허용/차단 목록을 사용한다.
    pub fn filter_policy(&self) -> FilterPolicy {
        let defaults = FilterPolicy::default();
        FilterPolicy::new(
            self.policy
                .allow_prefixes
                .clone()
                .unwrap_or_else(|| defaults.allow_prefixes().to_vec()),
            self.policy
                .block_substrings
                .clone()
                .unwrap_or_else(|| defaults.block_substrings().to_vec()),
        )
    }

    pub fn provisioner_spec(&self) -> ProvisionerCommandSpec {
        ProvisionerCommandSpec {
            command: self
                .provisioner
                .command
                .clone()
                .unwrap_or_else(|| DEFAULT_PROVISIONER_COMMAND.to_string()),
            args: self.provisioner.args.clone().unwrap_or_else(|| {
                DEFAULT_PROVISIONER_ARGS
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            }),
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.policy.merge_from(other.policy);
        self.provisioner.merge_from(other.provisioner);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.source_path.is_some() {
            self.source_path = other.source_path;
        }
        if other.failure_mode.is_some() {
            self.failure_mode = other.failure_mode;
        }
        if other.platform_name.is_some() {
            self.platform_name = other.platform_name;
        }
    }
}

impl PolicyConfig {
    /// 목록은 항목 단위가 아니라 통째로 교체된다.
    pub(crate) fn merge_from(&mut self, other: PolicyConfig) {
        if other.allow_prefixes.is_some() {
            self.allow_prefixes = other.allow_prefixes;
        }
        if other.block_substrings.is_some() {
            self.block_substrings = other.block_substrings;
        }
    }
}

impl ProvisionerConfig {
    pub(crate) fn merge_from(&mut self, other: ProvisionerConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
    }
}
