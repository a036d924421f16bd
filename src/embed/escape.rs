use crate::embed::EscapeMode;

/// 单次前向扫描，把一行文本转义后追加到 `out`
///
/// 每个字符只处理一次，因此 `\` 不会被重复转义，与替换顺序无关。
pub fn escape_into(line: &str, mode: EscapeMode, out: &mut String) {
    out.reserve(line.len());
    for c in line.chars() {
        match (c, mode) {
            ('\t', _) => out.push_str("\\t"),
            ('\n', _) => out.push_str("\\n"),
            ('\\', EscapeMode::Strict) => out.push_str("\\\\"),
            ('"', EscapeMode::Strict) => out.push_str("\\\""),
            ('\r', EscapeMode::Strict) => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
}
