//! Configuration Source Implementations

mod toml_config;

pub use toml_config::TomlConfigSource;
