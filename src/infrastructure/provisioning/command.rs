//! 프로비저닝 CLI 실행기.
//!
//! 셸을 거치지 않고 인자 목록으로 직접 실행하며, 값은 stdin으로만 전달한다.

use std::io::ErrorKind;
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::application::config::ProvisionerCommandSpec;
use crate::application::ports::ProvisioningClient;
use crate::domain::migration::DeploymentTarget;

/// 설정된 명령(기본 `vercel env add {key} {target}`)을 호출하는 클라이언트.
pub struct CommandProvisioner {
    spec: ProvisionerCommandSpec,
}

impl CommandProvisioner {
    pub fn new(spec: ProvisionerCommandSpec) -> Self {
        Self { spec }
    }
}

#[async_trait]
impl ProvisioningClient for CommandProvisioner {
    fn describe(&self, key: &str, target: DeploymentTarget) -> String {
        self.spec.display(key, target)
    }

    async fn provision(&self, key: &str, target: DeploymentTarget, value: &str) -> Result<()> {
        let args = self.spec.render_args(key, target);
        debug!(command = %self.spec.command, ?args, "spawning provisioner");

        let mut child = Command::new(&self.spec.command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn provisioner '{}'", self.spec.command))?;

        let mut stdin = child
            .stdin
            .take()
            .context("failed to open provisioner stdin")?;
        // The CLI may exit before reading stdin; its exit status carries the real error.
        if let Err(err) = stdin.write_all(value.as_bytes()).await
            && err.kind() != ErrorKind::BrokenPipe
        {
            return Err(err).context("failed to write value to provisioner stdin");
        }
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .context("provisioner command execution failed")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            bail!(
                "'{}' exited with {}: {}",
                self.describe(key, target),
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            );
        }

        Ok(())
    }
}
