//! 설정 파일 값과 CLI 옵션을 합쳐 실행 설정을 확정하는 단계.

use std::path::PathBuf;

use crate::application::config::Config;
use crate::domain::migration::{FailureMode, RunOptions};
use crate::domain::policy::FilterPolicy;

/// 한 번의 실행 동안 고정되는 설정.
#[derive(Debug, Clone)]
pub(super) struct MigrationSettings {
    pub source_path: PathBuf,
    pub policy: FilterPolicy,
    pub failure_mode: FailureMode,
    pub platform_name: String,
    pub dry_run: bool,
}

impl MigrationSettings {
    /// CLI 옵션이 주어진 항목만 설정 파일 값을 덮어쓴다.
    /// 허용/차단 목록은 각각 통째로 교체된다.
    pub(super) fn resolve(config: &Config, options: &RunOptions) -> Self {
        let configured = config.filter_policy();
        let allow = if options.allow_prefixes.is_empty() {
            configured.allow_prefixes().to_vec()
        } else {
            options.allow_prefixes.clone()
        };
        let block = if options.block_substrings.is_empty() {
            configured.block_substrings().to_vec()
        } else {
            options.block_substrings.clone()
        };

        Self {
            source_path: options
                .source_path
                .clone()
                .unwrap_or_else(|| config.source_path()),
            policy: FilterPolicy::new(allow, block),
            failure_mode: options
                .failure_mode
                .unwrap_or_else(|| config.failure_mode()),
            platform_name: config.platform_name(),
            dry_run: options.dry_run,
        }
    }
}
