use std::io;
use std::path::PathBuf;

/// 嵌入过程中所有可能出现的错误，均为致命错误，不做本地恢复
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// 输入文件不存在、不可读或不是合法 UTF-8
    #[error("无法读取输入文件 {}: {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 输出文件无法创建或写入
    #[error("无法写入输出文件 {}: {}", .path.display(), .source)]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 由文件名推导出的标识符在目标语言中不合法
    #[error("非法标识符 {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// 配置序列化或保存失败
    #[error("配置文件错误: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
