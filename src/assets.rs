//! 编译时嵌入资源统一管理
//!
//! 所有通过 `include_str!` 嵌入的外部资源都在此模块集中管理。
//!
//! | 资源名称 | 路径 | 用途 |
//! |---------|------|------|
//! | `HELP_TEXT` | `assets/help.md` | 帮助命令输出 |
//! | `VERSION_TEMPLATE` | `assets/version.md` | 版本命令模板 |

/// 帮助文档内容，Markdown 格式
pub const HELP_TEXT: &str = include_str!("../assets/help.md");

/// 版本信息模板
///
/// 占位符: `{name}`, `{version}`, `{os}`, `{extra}`
pub const VERSION_TEMPLATE: &str = include_str!("../assets/version.md");
