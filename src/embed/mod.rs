//! 资源嵌入核心
//!
//! 读取一个文本资源文件，生成一个把文本声明为字符串常量的源文件：
//! 输入文件 → 行序列 → 逐行转义 → 拼接的常量声明 → 输出文件。

pub mod escape;
pub mod identifier;
pub mod render;
pub mod target;

pub use identifier::{constant_name, derive_identifier, validate_identifier};
pub use render::render;
pub use target::{EscapeMode, Target};

use crate::constants::{DEFAULT_PREFIX, DEFAULT_SUFFIX};
use crate::error::{EmbedError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// 渲染所需的全部选项（行和标识符之外）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub target: Target,
    pub escape: EscapeMode,
    pub prefix: String,
    pub suffix: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            target: Target::default(),
            escape: EscapeMode::default(),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// 一次成功嵌入的结果摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReport {
    pub identifier: String,
    pub constant_name: String,
    pub line_count: usize,
    pub byte_count: usize,
    pub output: PathBuf,
}

/// 按行读取输入，每行保留原始的行结束符
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let unreadable = |source| EmbedError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        // 非 UTF-8 内容会在这里以 InvalidData 返回
        let n = reader.read_line(&mut line).map_err(unreadable)?;
        if n == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// 把 `input` 嵌入为常量并写入 `output`
///
/// 输入读取、标识符校验和渲染全部成功后才会打开输出文件，
/// 因此任何前置失败都不会创建或修改输出文件。
pub fn embed(input: &Path, output: &Path, options: &EmbedOptions) -> Result<EmbedReport> {
    let lines = read_lines(input)?;
    let identifier = derive_identifier(input);
    let constant_name = constant_name(&identifier, options)?;
    let text = render(&lines, &identifier, options)?;

    let unwritable = |source| EmbedError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    };
    let mut file = File::create(output).map_err(unwritable)?;
    file.write_all(text.as_bytes()).map_err(unwritable)?;
    file.flush().map_err(unwritable)?;

    Ok(EmbedReport {
        identifier,
        constant_name,
        line_count: lines.len(),
        byte_count: lines.iter().map(String::len).sum(),
        output: output.to_path_buf(),
    })
}

/// 只推导并校验标识符，不读写任何文件，返回 (标识符, 常量名)
pub fn preview(input: &Path, options: &EmbedOptions) -> Result<(String, String)> {
    let identifier = derive_identifier(input);
    let name = constant_name(&identifier, options)?;
    Ok((identifier, name))
}
