use crate::assets::{HELP_TEXT, VERSION_TEMPLATE};
use crate::config::YamlConfig;
use crate::constants::{self, config_key, section};
use crate::error::Result;
use crate::{info, md, usage};

/// 处理 version 命令: embed version
pub fn handle_version(config: &YamlConfig) {
    let mut extra = String::new();

    // 附带当前生效的嵌入配置
    if let Some(embed) = config.get_section(section::EMBED) {
        for (key, value) in embed {
            extra.push_str(&format!("| embed.{} | {} |\n", key, value));
        }
    }

    let text = VERSION_TEMPLATE
        .replace("{name}", constants::APP_NAME)
        .replace("{version}", constants::VERSION)
        .replace("{os}", std::env::consts::OS)
        .replace("{extra}", &extra);
    md!("{}", text);
}

/// 处理 help 命令: embed help
pub fn handle_help() {
    md!("{}", HELP_TEXT);
}

/// 处理 log 命令: embed log mode <verbose|concise>
pub fn handle_log(key: &str, value: &str, config: &mut YamlConfig) -> Result<()> {
    if key != config_key::MODE {
        usage!("embed log mode <verbose|concise>");
        return Ok(());
    }

    let mode = if value == config_key::VERBOSE {
        config_key::VERBOSE
    } else {
        config_key::CONCISE
    };
    config.set_property(section::LOG, config_key::MODE, mode);
    config.save()?;
    info!("✅ 日志模式已切换为: {}", mode);
    Ok(())
}
