use crate::cli::RenderArgs;
use crate::command::embed::resolve_options;
use crate::config::YamlConfig;
use crate::embed;
use crate::error::Result;
use crate::info;
use colored::Colorize;
use std::path::Path;

/// 处理 ident 命令: embed ident <input>
pub fn handle_ident(input: &Path, render: &RenderArgs, config: &YamlConfig) -> Result<()> {
    let options = resolve_options(render, config)?;
    let (identifier, name) = embed::preview(input, &options)?;
    info!("{} {}", "[identifier]".green(), identifier);
    info!("{} {}", "[constant]".green(), name);
    Ok(())
}
