use crate::constants::{escape_name, target_name};
use clap::ValueEnum;

/// 生成文件的目标语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Target {
    /// C/C++：`const char *` 加相邻字符串字面量拼接
    #[default]
    Cpp,
    /// Rust：`pub const &str` 加 `concat!`
    Rust,
}

impl Target {
    /// 配置文件中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            Target::Cpp => target_name::CPP,
            Target::Rust => target_name::RUST,
        }
    }

    /// 从配置文件中的名称解析，不区分大小写
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            target_name::CPP | "c++" | "c" => Some(Target::Cpp),
            target_name::RUST | "rs" => Some(Target::Rust),
            _ => None,
        }
    }
}

/// 字面量内部的转义范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EscapeMode {
    /// 额外转义 `\`、`"` 和 CR，保证任意文本都能生成合法源码
    #[default]
    Strict,
    /// 只转义制表符和换行符，与最初的生成脚本逐字节一致
    Compat,
}

impl EscapeMode {
    pub fn name(self) -> &'static str {
        match self {
            EscapeMode::Strict => escape_name::STRICT,
            EscapeMode::Compat => escape_name::COMPAT,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            escape_name::STRICT => Some(EscapeMode::Strict),
            escape_name::COMPAT => Some(EscapeMode::Compat),
            _ => None,
        }
    }
}
