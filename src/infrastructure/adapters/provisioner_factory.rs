//! 프로비저닝 클라이언트 팩토리 포트 구현 어댑터.

use crate::application::config::Config;
use crate::application::ports::{ProvisionerFactory, ProvisioningClient};
use crate::infrastructure::provisioning::{CommandProvisioner, DryRunProvisioner};

/// dry-run 여부에 따라 실제/가상 실행기를 고른다.
pub struct ProvisionerFactoryAdapter;

impl ProvisionerFactory for ProvisionerFactoryAdapter {
    fn build(&self, config: &Config, dry_run: bool) -> Box<dyn ProvisioningClient> {
        let spec = config.provisioner_spec();
        if dry_run {
            Box::new(DryRunProvisioner::new(spec))
        } else {
            Box::new(CommandProvisioner::new(spec))
        }
    }
}
