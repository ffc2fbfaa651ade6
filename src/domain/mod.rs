//! Domain layer
//! 마이그레이션 규칙(라인 파싱/필터 정책/결과 집계)을 외부 의존성 없이 표현한다.

pub mod entry;
pub mod migration;
pub mod policy;
