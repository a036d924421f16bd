use crate::cli::RenderArgs;
use crate::config::YamlConfig;
use crate::embed::{self, EmbedOptions, EscapeMode, Target};
use crate::error::{EmbedError, Result};
use crate::{debug_log, info};
use colored::Colorize;
use std::path::PathBuf;

/// 合并配置与命令行选项，命令行优先
pub fn resolve_options(render: &RenderArgs, config: &YamlConfig) -> Result<EmbedOptions> {
    let mut options = config.embed_options()?;
    if let Some(target) = render.target {
        options.target = target;
    }
    if let Some(escape) = render.escape {
        options.escape = escape;
    }
    if let Some(prefix) = &render.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(suffix) = &render.suffix {
        options.suffix = suffix.clone();
    }
    // Rust 字面量不允许裸 CR，compat 模式又不转义 `\`、`"` 和 CR
    if options.target == Target::Rust && options.escape == EscapeMode::Compat {
        return Err(EmbedError::Config(format!(
            "{} 转义模式只适用于 {} 目标",
            EscapeMode::Compat.name(),
            Target::Cpp.name()
        )));
    }
    Ok(options)
}

/// 处理无参数调用: embed
pub fn handle_default(config: &YamlConfig) -> Result<()> {
    handle_run(None, None, &RenderArgs::default(), config)
}

/// 处理 run 命令: embed run [input] [output] [--target] [--escape] [--prefix] [--suffix]
pub fn handle_run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    render: &RenderArgs,
    config: &YamlConfig,
) -> Result<()> {
    let options = resolve_options(render, config)?;
    let input = input.unwrap_or_else(|| config.default_input());
    let output = output.unwrap_or_else(|| config.default_output(options.target));

    debug_log!(
        config,
        "input: {}, output: {}, target: {}, escape: {}",
        input.display(),
        output.display(),
        options.target.name(),
        options.escape.name()
    );

    let report = embed::embed(&input, &output, &options)?;

    debug_log!(
        config,
        "identifier: {}, lines: {}, bytes: {}",
        report.identifier,
        report.line_count,
        report.byte_count
    );
    info!(
        "✅ 已生成 {} → {}",
        report.constant_name.green(),
        report.output.display()
    );
    Ok(())
}
