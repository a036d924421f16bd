use crate::constants::{
    config_key, section, CONFIG_FILE_NAME, DATA_DIR_NAME, DATA_PATH_ENV, DEFAULT_INPUT,
    DEFAULT_OUTPUT, DEFAULT_PREFIX, DEFAULT_SUFFIX, RUST_OUTPUT_EXTENSION,
};
use crate::embed::{EmbedOptions, EscapeMode, Target};
use crate::error::{EmbedError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// YAML 配置文件的完整结构
/// 使用 BTreeMap 保持键的有序性，保证写回的文件内容稳定
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct YamlConfig {
    #[serde(default)]
    pub log: BTreeMap<String, String>,

    #[serde(default)]
    pub embed: BTreeMap<String, String>,

    /// 捕获未知的顶级键，保证不丢失任何配置
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl YamlConfig {
    /// 获取数据根目录: ~/.embed/
    pub fn data_dir() -> PathBuf {
        // 优先使用环境变量指定的数据路径
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }

    /// 获取配置文件路径: ~/.embed/config.yaml
    pub fn config_path() -> PathBuf {
        Self::data_dir().join(CONFIG_FILE_NAME)
    }

    /// 从默认位置加载配置
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// 从指定文件加载，文件不存在时使用默认配置（不落盘）
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default_config();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                crate::error!("读取配置文件失败: {}, 路径: {:?}", e, path);
                return Self::default_config();
            }
        };

        let mut config: Self = serde_yaml::from_str(&content).unwrap_or_else(|e| {
            crate::error!("解析配置文件失败: {}, 路径: {:?}", e, path);
            Self::default_config()
        });
        config.fill_defaults();
        config
    }

    /// 保存配置到默认位置
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| EmbedError::Config(format!("创建配置目录失败: {}", e)))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| EmbedError::Config(format!("序列化配置失败: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            EmbedError::Config(format!("保存配置文件失败: {}, 路径: {:?}", e, path))
        })
    }

    /// 创建默认配置
    fn default_config() -> Self {
        let mut config = Self::default();
        config.fill_defaults();
        config
    }

    /// 为缺失的键补上默认值，已有的值保持不变
    fn fill_defaults(&mut self) {
        let log_defaults = [(config_key::MODE, config_key::CONCISE)];
        for (key, value) in log_defaults {
            self.log.entry(key.into()).or_insert_with(|| value.into());
        }

        let embed_defaults = [
            (config_key::INPUT, DEFAULT_INPUT),
            (config_key::OUTPUT, DEFAULT_OUTPUT),
            (config_key::TARGET, Target::default().name()),
            (config_key::ESCAPE, EscapeMode::default().name()),
            (config_key::PREFIX, DEFAULT_PREFIX),
            (config_key::SUFFIX, DEFAULT_SUFFIX),
        ];
        for (key, value) in embed_defaults {
            self.embed.entry(key.into()).or_insert_with(|| value.into());
        }
    }

    /// 是否是 verbose 模式
    pub fn is_verbose(&self) -> bool {
        self.log
            .get(config_key::MODE)
            .map_or(false, |m| m == config_key::VERBOSE)
    }

    // ========== 根据 section 名称获取对应的 map ==========

    /// 获取指定 section 的不可变引用
    pub fn get_section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match name {
            section::LOG => Some(&self.log),
            section::EMBED => Some(&self.embed),
            _ => None,
        }
    }

    /// 获取指定 section 的可变引用
    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut BTreeMap<String, String>> {
        match name {
            section::LOG => Some(&mut self.log),
            section::EMBED => Some(&mut self.embed),
            _ => None,
        }
    }

    /// 获取某个 section 中指定 key 的值
    pub fn get_property(&self, name: &str, key: &str) -> Option<&String> {
        self.get_section(name).and_then(|m| m.get(key))
    }

    /// 设置某个 section 中的键值对（不自动保存）
    pub fn set_property(&mut self, name: &str, key: &str, value: &str) {
        if let Some(map) = self.get_section_mut(name) {
            map.insert(key.to_string(), value.to_string());
        }
    }

    // ========== 嵌入相关 ==========

    /// 默认输入文件
    pub fn default_input(&self) -> PathBuf {
        self.get_property(section::EMBED, config_key::INPUT)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// 默认输出文件；Rust 目标下改用 `.rs` 扩展名
    pub fn default_output(&self, target: Target) -> PathBuf {
        let mut output = self
            .get_property(section::EMBED, config_key::OUTPUT)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        if target == Target::Rust {
            output.set_extension(RUST_OUTPUT_EXTENSION);
        }
        output
    }

    /// 从 embed section 解析渲染选项
    pub fn embed_options(&self) -> Result<EmbedOptions> {
        let mut options = EmbedOptions::default();
        let get = |key| self.get_property(section::EMBED, key);

        if let Some(name) = get(config_key::TARGET) {
            options.target = Target::from_name(name)
                .ok_or_else(|| EmbedError::Config(format!("未知的目标语言: {}", name)))?;
        }
        if let Some(name) = get(config_key::ESCAPE) {
            options.escape = EscapeMode::from_name(name)
                .ok_or_else(|| EmbedError::Config(format!("未知的转义模式: {}", name)))?;
        }
        if let Some(prefix) = get(config_key::PREFIX) {
            options.prefix = prefix.clone();
        }
        if let Some(suffix) = get(config_key::SUFFIX) {
            options.suffix = suffix.clone();
        }
        Ok(options)
    }
}
