//! resource-embed 库模块
//!
//! 导出公开模块供二进制入口和外部构建脚本使用

pub mod assets;
pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod embed;
pub mod error;
pub mod util;

pub use embed::{embed, EmbedOptions, EmbedReport, EscapeMode, Target};
pub use error::EmbedError;
