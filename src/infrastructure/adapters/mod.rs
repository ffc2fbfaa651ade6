//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod provisioner_factory;
mod reporter;
mod source_reader;

pub use config_repository::JsonConfigRepository;
pub use provisioner_factory::ProvisionerFactoryAdapter;
pub use reporter::ConsoleReporter;
pub use source_reader::FsSourceReader;
