pub mod inspect_config;
pub mod migrate_env;
