//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::command_exists;
use crate::application::config::{DefaultsConfig, ProvisionerCommandSpec};
use crate::domain::migration::DeploymentTarget;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective: EffectiveSettings,
    pub provisioner: ProvisionerInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub source_path: String,
    pub failure_mode: String,
    pub platform_name: String,
    pub allow_prefixes: Vec<String>,
    pub block_substrings: Vec<String>,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProvisionerInspection {
    pub command: String,
    pub args: Vec<String>,
    pub command_available: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let policy = config.filter_policy();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective: EffectiveSettings {
                source_path: config.source_path().display().to_string(),
                failure_mode: config.failure_mode().code().to_string(),
                platform_name: config.platform_name(),
                allow_prefixes: policy.allow_prefixes().to_vec(),
                block_substrings: policy.block_substrings().to_vec(),
                targets: DeploymentTarget::ALL
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            },
            provisioner: ProvisionerInspection::from_spec(config.provisioner_spec()),
        }
    }
}

impl ProvisionerInspection {
    fn from_spec(spec: ProvisionerCommandSpec) -> Self {
        let command_available = command_exists(&spec.command);
        Self {
            command: spec.command,
            args: spec.args,
            command_available,
        }
    }
}
