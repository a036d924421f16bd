use crate::constants::GENERATED_HEADER;
use crate::embed::escape::escape_into;
use crate::embed::identifier::constant_name;
use crate::embed::{EmbedOptions, Target};
use crate::error::Result;

/// 把行序列渲染为完整的生成文件内容
///
/// 纯函数：相同输入必然得到逐字节相同的输出。
pub fn render(lines: &[String], identifier: &str, options: &EmbedOptions) -> Result<String> {
    let name = constant_name(identifier, options)?;
    let body_len: usize = lines.iter().map(|l| l.len() + 8).sum();
    let mut out = String::with_capacity(GENERATED_HEADER.len() + name.len() + body_len + 64);

    out.push('\n');
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    match options.target {
        Target::Cpp => render_cpp(&mut out, &name, lines, options),
        Target::Rust => render_rust(&mut out, &name, lines, options),
    }
    Ok(out)
}

// const char *s_x_code =
// 	"line\n"
// 	"line\n";
fn render_cpp(out: &mut String, name: &str, lines: &[String], options: &EmbedOptions) {
    out.push_str("\nconst char *");
    out.push_str(name);
    out.push_str(" =");
    if lines.is_empty() {
        out.push_str("\n\t\"\"");
    }
    for line in lines {
        out.push_str("\n\t\"");
        escape_into(line, options.escape, out);
        out.push('"');
    }
    out.push_str(";\n");
}

// Rust 没有相邻字面量拼接，用 concat! 代替
fn render_rust(out: &mut String, name: &str, lines: &[String], options: &EmbedOptions) {
    out.push_str("\npub const ");
    out.push_str(name);
    out.push_str(": &str = concat!(");
    for line in lines {
        out.push_str("\n    \"");
        escape_into(line, options.escape, out);
        out.push_str("\",");
    }
    out.push_str("\n);\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::EscapeMode;
    use crate::error::EmbedError;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// 把 C++ 输出中的字面量片段解码回原始文本
    fn decode_cpp(generated: &str) -> String {
        let body = generated.split_once(" =").expect("missing declaration").1;
        let mut decoded = String::new();
        let mut in_literal = false;
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match (c, in_literal) {
                ('"', _) => in_literal = !in_literal,
                ('\\', true) => match chars.next() {
                    Some('t') => decoded.push('\t'),
                    Some('n') => decoded.push('\n'),
                    Some('r') => decoded.push('\r'),
                    Some(other) => decoded.push(other),
                    None => panic!("dangling escape"),
                },
                (c, true) => decoded.push(c),
                _ => {}
            }
        }
        decoded
    }

    #[test]
    fn renders_hello_world_scenario() {
        let input = lines(&["Hello\n", "World\n"]);
        let out = render(&input, "default_shader", &EmbedOptions::default()).unwrap();

        assert_eq!(
            out,
            "\n// This is a generated file. Do not edit.\n\
             \nconst char *s_default_shader_code =\
             \n\t\"Hello\\n\"\
             \n\t\"World\\n\";\n"
        );
        assert_eq!(decode_cpp(&out), input.concat());
    }

    #[test]
    fn matches_original_generator_layout() {
        let input = lines(&["shader_type spatial;\n", "\n", "void vertex() {\n", "\tVERTEX.y = h;\n", "}\n"]);
        let options = EmbedOptions {
            escape: EscapeMode::Compat,
            ..EmbedOptions::default()
        };
        let out = render(&input, "default_shader", &options).unwrap();

        let expected = concat!(
            "\n// This is a generated file. Do not edit.\n",
            "\nconst char *s_default_shader_code =",
            "\n\t\"shader_type spatial;\\n\"",
            "\n\t\"\\n\"",
            "\n\t\"void vertex() {\\n\"",
            "\n\t\"\\tVERTEX.y = h;\\n\"",
            "\n\t\"}\\n\";\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn decodes_back_to_input_with_quotes_in_strict_mode() {
        let input = lines(&["#define PATH \"C:\\\\shaders\"\r\n", "\tvoid main() {}"]);
        let out = render(&input, "paths", &EmbedOptions::default()).unwrap();
        assert_eq!(decode_cpp(&out), input.concat());
    }

    #[test]
    fn empty_input_still_declares_constant() {
        let out = render(&[], "empty", &EmbedOptions::default()).unwrap();
        assert!(out.ends_with("\nconst char *s_empty_code =\n\t\"\";\n"));
        assert_eq!(decode_cpp(&out), "");
    }

    #[test]
    fn renders_rust_concat() {
        let options = EmbedOptions {
            target: Target::Rust,
            ..EmbedOptions::default()
        };
        let out = render(&lines(&["a\n", "\tb"]), "default_shader", &options).unwrap();
        assert_eq!(
            out,
            concat!(
                "\n// This is a generated file. Do not edit.\n",
                "\npub const S_DEFAULT_SHADER_CODE: &str = concat!(",
                "\n    \"a\\n\",",
                "\n    \"\\tb\",",
                "\n);\n",
            )
        );
    }

    #[test]
    fn render_is_deterministic() {
        let input = lines(&["x\n", "y"]);
        let options = EmbedOptions::default();
        assert_eq!(
            render(&input, "id", &options).unwrap(),
            render(&input, "id", &options).unwrap()
        );
    }

    #[test]
    fn invalid_identifier_is_reported() {
        let err = render(&lines(&["x"]), "2d", &EmbedOptions::default()).unwrap_err();
        assert!(matches!(err, EmbedError::InvalidIdentifier { .. }));
    }
}
