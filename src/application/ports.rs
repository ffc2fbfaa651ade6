//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::migration::DeploymentTarget;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// env 소스 파일을 라인 단위로 읽는 포트.
pub trait SourceReader: Send + Sync {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

/// 외부 배포 플랫폼에 변수 하나를 대상 환경 하나로 등록하는 포트.
#[async_trait]
pub trait ProvisioningClient: Send + Sync {
    /// 진행 로그용 명령 표현(값은 포함하지 않는다).
    fn describe(&self, key: &str, target: DeploymentTarget) -> String;
    /// 값은 stdin으로 전달되고, 실패 시 `Err`를 돌려준다.
    async fn provision(&self, key: &str, target: DeploymentTarget, value: &str) -> Result<()>;
}

/// 설정/실행 모드에 맞는 프로비저닝 클라이언트를 생성하는 팩토리 포트.
pub trait ProvisionerFactory: Send + Sync {
    fn build(&self, config: &Config, dry_run: bool) -> Box<dyn ProvisioningClient>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
