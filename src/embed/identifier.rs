use crate::embed::{EmbedOptions, Target};
use crate::error::{EmbedError, Result};
use std::path::Path;

/// 取文件名中第一个 `.` 之前的部分作为标识符
///
/// 只看路径的最后一段：`shaders/default_shader.txt` → `default_shader`。
/// 没有 `.` 时返回整个文件名。
pub fn derive_identifier(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    identifier_from_file_name(&file_name).to_string()
}

/// 对纯文件名做推导，`a.b.c` → `a`
pub fn identifier_from_file_name(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// 校验标识符：首字符为 ASCII 字母或 `_`，其余为 ASCII 字母、数字或 `_`
pub fn validate_identifier(identifier: &str) -> Result<()> {
    let invalid = |reason: String| EmbedError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason,
    };

    let mut chars = identifier.chars();
    let first = chars
        .next()
        .ok_or_else(|| invalid("文件名在第一个 '.' 之前为空".to_string()))?;

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid(format!("首字符 {:?} 不是字母或下划线", first)));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(format!("包含非法字符 {:?}", bad)));
    }

    Ok(())
}

/// C/C++ 保留字（含 C++20 关键字和替代运算符记号）
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "co_await", "co_return",
    "co_yield", "compl", "concept", "const", "const_cast", "consteval", "constexpr", "constinit",
    "continue", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr",
    "operator", "or", "or_eq", "private", "protected", "public", "register", "reinterpret_cast",
    "requires", "restrict", "return", "short", "signed", "sizeof", "static", "static_assert",
    "static_cast", "struct", "switch", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq", "_Bool", "_Complex", "_Imaginary",
];

/// Rust 严格关键字和保留关键字（2024 edition）
const RUST_KEYWORDS: &[&str] = &[
    "_", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// 目标语言的关键字不能作为常量名
fn check_keyword(name: &str, target: Target) -> Result<()> {
    let keywords = match target {
        Target::Cpp => CPP_KEYWORDS,
        Target::Rust => RUST_KEYWORDS,
    };
    if keywords.contains(&name) {
        return Err(EmbedError::InvalidIdentifier {
            identifier: name.to_string(),
            reason: format!("是 {} 的关键字", target.name()),
        });
    }
    Ok(())
}

/// 拼出最终的常量名：前缀 + 标识符 + 后缀，Rust 目标转为全大写
pub fn constant_name(identifier: &str, options: &EmbedOptions) -> Result<String> {
    validate_identifier(identifier)?;
    let name = format!("{}{}{}", options.prefix, identifier, options.suffix);
    // 前后缀来自配置，拼接后再整体校验一次
    validate_identifier(&name)?;
    let name = match options.target {
        Target::Cpp => name,
        Target::Rust => name.to_ascii_uppercase(),
    };
    check_keyword(&name, options.target)?;
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn derives_identifier_before_first_dot() {
        assert_eq!(identifier_from_file_name("default_shader.txt"), "default_shader");
        assert_eq!(identifier_from_file_name("no_extension"), "no_extension");
        assert_eq!(identifier_from_file_name("a.b.c"), "a");
    }

    #[test]
    fn derives_from_last_path_component() {
        let path = PathBuf::from("shaders").join("terrain.v2").join("default_shader.glsl.txt");
        assert_eq!(derive_identifier(&path), "default_shader");
        assert_eq!(derive_identifier(Path::new("/")), "");
    }

    #[test]
    fn rejects_illegal_identifiers() {
        assert!(validate_identifier("default_shader").is_ok());
        assert!(validate_identifier("_private2").is_ok());

        for bad in ["", "3d_shader", "my-shader", "with space", "ünicode"] {
            match validate_identifier(bad) {
                Err(EmbedError::InvalidIdentifier { identifier, .. }) => assert_eq!(identifier, bad),
                other => panic!("expected InvalidIdentifier for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn builds_constant_name_per_target() {
        let mut options = EmbedOptions::default();
        assert_eq!(
            constant_name("default_shader", &options).unwrap(),
            "s_default_shader_code"
        );

        options.target = Target::Rust;
        assert_eq!(
            constant_name("default_shader", &options).unwrap(),
            "S_DEFAULT_SHADER_CODE"
        );
    }

    #[test]
    fn rejects_cpp_keyword_without_affixes() {
        let options = EmbedOptions {
            prefix: String::new(),
            suffix: String::new(),
            ..EmbedOptions::default()
        };
        match constant_name("int", &options) {
            Err(EmbedError::InvalidIdentifier { identifier, .. }) => assert_eq!(identifier, "int"),
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
        assert!(constant_name("namespace", &options).is_err());
        assert_eq!(constant_name("terrain", &options).unwrap(), "terrain");

        // 加上前后缀后不再是关键字
        assert_eq!(
            constant_name("int", &EmbedOptions::default()).unwrap(),
            "s_int_code"
        );
    }

    #[test]
    fn rust_keywords_are_checked_after_upper_casing() {
        let options = EmbedOptions {
            target: Target::Rust,
            prefix: String::new(),
            suffix: String::new(),
            ..EmbedOptions::default()
        };
        // 大写后不再与小写关键字冲突
        assert_eq!(constant_name("fn", &options).unwrap(), "FN");
        assert_eq!(constant_name("Self", &options).unwrap(), "SELF");
        assert!(constant_name("_", &options).is_err());
        // C++ 关键字在 Rust 目标下可用
        assert_eq!(constant_name("int", &options).unwrap(), "INT");
    }

    #[test]
    fn rejects_illegal_prefix() {
        let options = EmbedOptions {
            prefix: "9".to_string(),
            ..EmbedOptions::default()
        };
        assert!(constant_name("shader", &options).is_err());
    }
}
