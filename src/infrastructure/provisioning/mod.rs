//! 배포 플랫폼 프로비저닝 CLI 실행기 모음.

mod command;
mod dry_run;

pub use command::CommandProvisioner;
pub use dry_run::DryRunProvisioner;
