//! 실제 호출 없이 성공으로 처리하는 dry-run 실행기.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::application::config::ProvisionerCommandSpec;
use crate::application::ports::ProvisioningClient;
use crate::domain::migration::DeploymentTarget;

pub struct DryRunProvisioner {
    spec: ProvisionerCommandSpec,
}

impl DryRunProvisioner {
    pub fn new(spec: ProvisionerCommandSpec) -> Self {
        Self { spec }
    }
}

#[async_trait]
impl ProvisioningClient for DryRunProvisioner {
    fn describe(&self, key: &str, target: DeploymentTarget) -> String {
        self.spec.display(key, target)
    }

    async fn provision(&self, key: &str, target: DeploymentTarget, _value: &str) -> Result<()> {
        debug!(key, %target, "dry-run: skipping provisioner call");
        Ok(())
    }
}
