// 项目全局常量定义
// 所有魔法字符串和可复用常量统一在此维护

// ========== 版本信息 ==========

/// 内核版本号（自动从 Cargo.toml 读取，编译时确定）
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 项目名称
pub const APP_NAME: &str = "resource-embed";

// ========== 默认输入输出 ==========

/// 无参数运行时的默认输入文件
pub const DEFAULT_INPUT: &str = "default_shader.txt";

/// 无参数运行时的默认输出文件（C++ 目标）
pub const DEFAULT_OUTPUT: &str = "resources.gen.cpp";

/// Rust 目标下默认输出文件的扩展名
pub const RUST_OUTPUT_EXTENSION: &str = "rs";

/// 常量名默认前缀
pub const DEFAULT_PREFIX: &str = "s_";

/// 常量名默认后缀
pub const DEFAULT_SUFFIX: &str = "_code";

// ========== 生成文件 ==========

/// 生成文件头部注释（不含前后换行）
pub const GENERATED_HEADER: &str = "// This is a generated file. Do not edit.";

// ========== 配置 ==========

/// 数据目录环境变量
pub const DATA_PATH_ENV: &str = "EMBED_DATA_PATH";

/// 默认数据目录名（位于 home 下）
pub const DATA_DIR_NAME: &str = ".embed";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// 配置文件中的 section 名称常量
pub mod section {
    pub const LOG: &str = "log";
    pub const EMBED: &str = "embed";
}

/// 配置 key 名称常量
pub mod config_key {
    pub const MODE: &str = "mode";
    pub const VERBOSE: &str = "verbose";
    pub const CONCISE: &str = "concise";
    pub const INPUT: &str = "input";
    pub const OUTPUT: &str = "output";
    pub const TARGET: &str = "target";
    pub const ESCAPE: &str = "escape";
    pub const PREFIX: &str = "prefix";
    pub const SUFFIX: &str = "suffix";
}

/// 目标语言名称
pub mod target_name {
    pub const CPP: &str = "cpp";
    pub const RUST: &str = "rust";
}

/// 转义模式名称
pub mod escape_name {
    pub const STRICT: &str = "strict";
    pub const COMPAT: &str = "compat";
}
