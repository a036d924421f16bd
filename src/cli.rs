use crate::embed::{EscapeMode, Target};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// embed - 把文本资源嵌入为源码中的字符串常量
#[derive(Parser, Debug)]
#[command(name = "embed", version, about = "把文本资源嵌入为源码中的字符串常量", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// 不带子命令时使用配置中的默认输入输出
    #[command(subcommand)]
    pub command: Option<SubCmd>,
}

/// 渲染选项，未指定的项回退到配置文件
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// 目标语言
    #[arg(long, value_enum)]
    pub target: Option<Target>,

    /// 转义模式
    #[arg(long, value_enum)]
    pub escape: Option<EscapeMode>,

    /// 常量名前缀
    #[arg(long)]
    pub prefix: Option<String>,

    /// 常量名后缀
    #[arg(long)]
    pub suffix: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SubCmd {
    // ========== 嵌入 ==========
    /// 把输入文件嵌入为常量并写入输出文件
    #[command(alias = "r")]
    Run {
        /// 输入文本文件（默认取配置 embed.input）
        input: Option<PathBuf>,
        /// 生成的源文件（默认取配置 embed.output）
        output: Option<PathBuf>,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// 预览由文件名推导出的标识符和常量名，不读写文件
    #[command(alias = "id")]
    Ident {
        /// 输入文件路径
        input: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },

    // ========== 系统设置 ==========
    /// 日志模式设置
    Log {
        /// 设置项名称（如 mode）
        key: String,
        /// 设置值（如 verbose/concise）
        value: String,
    },

    // ========== 系统信息 ==========
    /// 版本信息
    #[command(alias = "v")]
    Version,

    /// 帮助信息
    #[command(alias = "h")]
    Help,
}
