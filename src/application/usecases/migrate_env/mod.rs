//! 로컬 env 파일을 배포 플랫폼 환경변수로 이전하는 유스케이스.

mod lines;
mod settings;
mod summary;


use std::io::ErrorKind;

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{ConfigRepository, ProvisionerFactory, Reporter, SourceReader};
use crate::domain::migration::{MigrationReport, RunOptions};

use lines::migrate_lines;
use settings::MigrationSettings;
use summary::publish_summary;

/// 설정 로딩부터 라인 분류, 프로비저닝 호출, 요약 출력까지 전체 흐름을 조율한다.
pub struct MigrateEnvUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub source_reader: &'a dyn SourceReader,
    pub provisioner_factory: &'a dyn ProvisionerFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> MigrateEnvUseCase<'a> {
    /// 마이그레이션 본 실행 진입점.
    /// 소스 파일을 열 수 없으면 메시지를 출력하고 0건 결과를 돌려준다.
    pub async fn execute(&self, options: RunOptions) -> Result<MigrationReport> {
        let config = self.config_repo.load()?;
        let settings = MigrationSettings::resolve(&config, &options);

        self.reporter.section("Environment Migration");
        self.reporter
            .kv("Source", &settings.source_path.display().to_string());
        self.reporter.kv("Platform", &settings.platform_name);
        self.reporter.kv(
            "Mode",
            if settings.dry_run {
                "dry-run"
            } else {
                "provision"
            },
        );
        self.reporter.kv("Failures", settings.failure_mode.code());
        self.reporter
            .kv("Allowed", &settings.policy.allow_prefixes().join(", "));
        self.reporter
            .kv("Blocked", &settings.policy.block_substrings().join(", "));

        let lines = match self.source_reader.read_lines(&settings.source_path) {
            Ok(lines) => lines,
            Err(err) => {
                debug!(error = %format!("{err:#}"), "failed to read source file");
                let not_found = err
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == ErrorKind::NotFound);
                if not_found {
                    self.reporter.raw(&format!(
                        "Error: {} not found",
                        settings.source_path.display()
                    ));
                } else {
                    self.reporter.raw(&format!("Error: {err:#}"));
                }
                return Ok(MigrationReport::missing_source());
            }
        };

        self.reporter.section("Keys");
        let provisioner = self.provisioner_factory.build(&config, settings.dry_run);
        let report = migrate_lines(&settings, provisioner.as_ref(), self.reporter, &lines).await?;

        publish_summary(self.reporter, &settings, &report);
        Ok(report)
    }
}
