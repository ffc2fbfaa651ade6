//! 라인 분류 및 대상 환경별 프로비저닝 단계.

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::ports::{ProvisioningClient, Reporter};
use crate::application::usecases::migrate_env::settings::MigrationSettings;
use crate::domain::entry::{ConfigLine, ParsedLine, parse_line, strip_matching_quotes};
use crate::domain::migration::{
    DeploymentTarget, FailureMode, LineOutcome, MigrationReport, ProvisionFailure,
};
use crate::domain::policy::{Classification, SkipReason};

/// 파일 순서대로 한 줄씩 분류하고, 통과한 key를 세 환경에 순차 등록한다.
pub(super) async fn migrate_lines(
    settings: &MigrationSettings,
    provisioner: &dyn ProvisioningClient,
    reporter: &dyn Reporter,
    lines: &[String],
) -> Result<MigrationReport> {
    let mut report = MigrationReport::default();

    for raw in lines {
        let line = match parse_line(raw) {
            ParsedLine::Ignored => continue,
            ParsedLine::Malformed(text) => {
                skip(&mut report, reporter, text, SkipReason::Malformed);
                continue;
            }
            ParsedLine::Assignment(line) => line,
        };

        if let Classification::Skipped(reason) = settings.policy.classify(&line) {
            skip(&mut report, reporter, line.key, reason);
            continue;
        }

        reporter.raw(&format!("✅ Migrating core key: {}", line.key));
        report.outcomes.push(LineOutcome::Accepted {
            key: line.key.clone(),
        });

        if provision_all_targets(settings, provisioner, reporter, &line, &mut report).await? {
            report.migrated += 1;
        }
    }

    Ok(report)
}

fn skip(
    report: &mut MigrationReport,
    reporter: &dyn Reporter,
    subject: String,
    reason: SkipReason,
) {
    reporter.raw(&reason.describe(&subject));
    report.outcomes.push(LineOutcome::Skipped { subject, reason });
}

/// 세 환경 모두 성공(또는 ignore 모드)이면 `true`.
/// fail-fast 모드에서는 첫 실패를 그대로 반환한다.
async fn provision_all_targets(
    settings: &MigrationSettings,
    provisioner: &dyn ProvisioningClient,
    reporter: &dyn Reporter,
    line: &ConfigLine,
    report: &mut MigrationReport,
) -> Result<bool> {
    let value = strip_matching_quotes(&line.value);
    let mut all_ok = true;

    for target in DeploymentTarget::ALL {
        if settings.dry_run {
            reporter.status("dry-run", &provisioner.describe(&line.key, target));
        }

        let Err(err) = provisioner.provision(&line.key, target, value).await else {
            debug!(key = %line.key, %target, "provisioned");
            continue;
        };

        match settings.failure_mode {
            FailureMode::Ignore => {
                debug!(
                    key = %line.key,
                    %target,
                    error = %format!("{err:#}"),
                    "provisioning failed (ignored)"
                );
            }
            FailureMode::BestEffort => {
                warn!(key = %line.key, %target, "provisioning failed");
                let message = format!("{err:#}");
                reporter.raw(&format!(
                    "⚠️  Failed to sync {} to {}: {}",
                    line.key, target, message
                ));
                report.failures.push(ProvisionFailure {
                    key: line.key.clone(),
                    target,
                    message,
                });
                all_ok = false;
            }
            FailureMode::FailFast => {
                return Err(err.context(format!(
                    "failed to sync {} to {} (fail-fast)",
                    line.key, target
                )));
            }
        }
    }

    Ok(all_ok)
}
