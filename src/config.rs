mod yaml_config;

pub use yaml_config::YamlConfig;
