//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::migrate_env::MigrateEnvUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, FsSourceReader, JsonConfigRepository, ProvisionerFactoryAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    source_reader: FsSourceReader,
    provisioner_factory: ProvisionerFactoryAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            source_reader: FsSourceReader,
            provisioner_factory: ProvisionerFactoryAdapter,
            reporter: ConsoleReporter,
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 마이그레이션 실행 유스케이스를 생성한다.
    pub fn migrate_usecase(&self) -> MigrateEnvUseCase<'_> {
        MigrateEnvUseCase {
            config_repo: &self.config_repo,
            source_reader: &self.source_reader,
            provisioner_factory: &self.provisioner_factory,
            reporter: &self.reporter,
        }
    }
}
