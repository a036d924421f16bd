use clap::Parser;
use resource_embed::cli::Cli;
use resource_embed::command;
use resource_embed::config::YamlConfig;
use resource_embed::{debug_log, error};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 加载配置
    let mut config = YamlConfig::load();

    let start = if config.is_verbose() {
        Some(std::time::Instant::now())
    } else {
        None
    };

    // 参数错误由 clap 打印 usage 并退出
    let cli = Cli::parse();

    // 无子命令：使用配置中的默认输入输出
    let result = match cli.command {
        Some(subcmd) => command::dispatch(subcmd, &mut config),
        None => command::embed::handle_default(&config),
    };

    if let Some(start) = start {
        debug_log!(config, "duration: {} ms", start.elapsed().as_millis());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("💥 {}", e);
            ExitCode::FAILURE
        }
    }
}
