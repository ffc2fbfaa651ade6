//! 실행 결과 요약 출력 단계.

use crate::application::ports::Reporter;
use crate::application::usecases::migrate_env::settings::MigrationSettings;
use crate::domain::migration::MigrationReport;

pub(super) fn publish_summary(
    reporter: &dyn Reporter,
    settings: &MigrationSettings,
    report: &MigrationReport,
) {
    reporter.raw("");
    if settings.dry_run {
        reporter.raw(&format!(
            "Dry run complete. {} core variables would be synced to {}.",
            report.migrated, settings.platform_name
        ));
    } else {
        reporter.raw(&format!(
            "Migration Complete. {} core variables synced to {}.",
            report.migrated, settings.platform_name
        ));
    }

    if !report.failures.is_empty() {
        reporter.raw(&format!(
            "{} provisioning call(s) failed; affected keys were not counted.",
            report.failures.len()
        ));
    }
}
