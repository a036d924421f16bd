pub mod embed;
pub mod ident;
pub mod system;

use crate::cli::SubCmd;
use crate::config::YamlConfig;
use crate::error::Result;

/// 命令分发执行
pub fn dispatch(subcmd: SubCmd, config: &mut YamlConfig) -> Result<()> {
    match subcmd {
        // 嵌入
        SubCmd::Run {
            input,
            output,
            render,
        } => embed::handle_run(input, output, &render, config),
        SubCmd::Ident { input, render } => ident::handle_ident(&input, &render, config),

        // 系统设置
        SubCmd::Log { key, value } => system::handle_log(&key, &value, config),

        // 系统信息
        SubCmd::Version => {
            system::handle_version(config);
            Ok(())
        }
        SubCmd::Help => {
            system::handle_help();
            Ok(())
        }
    }
}
