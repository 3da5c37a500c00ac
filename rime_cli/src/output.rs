//! 列表展示：按显示宽度对齐的列，分组以 `*` 居中横幅展示。

use rime_core::{Dictionary, Entry, Line};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

pub const WORD_WIDTH: usize = 25;
pub const CODE_WIDTH: usize = 20;
const WEIGHT_WIDTH: usize = 10;
const TOTAL_WIDTH: usize = WORD_WIDTH + CODE_WIDTH + WEIGHT_WIDTH;

/// 终端显示宽度：东亚宽字符与 emoji 计 2 列，组合附加符号和零宽字符计 0 列。
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let pad = width.saturating_sub(display_width(s));
    out.extend(std::iter::repeat_n(' ', pad));
}

fn banner(group: &str) -> String {
    let label = format!(" {group} ");
    let left = TOTAL_WIDTH.saturating_sub(display_width(&label)) / 2;
    let right = TOTAL_WIDTH.saturating_sub(left + display_width(&label));
    format!("{}{label}{}", "*".repeat(left), "*".repeat(right))
}

/// 渲染整个词典正文（不含头部、注释与原样行）。
pub fn render_list(dict: &Dictionary) -> String {
    let mut out = String::new();
    push_padded(&mut out, "词语 (Word)", WORD_WIDTH);
    push_padded(&mut out, "编码 (Code)", CODE_WIDTH);
    out.push_str("权重 (Weight)\n");
    out.push_str(&"-".repeat(TOTAL_WIDTH));
    out.push('\n');

    for line in dict.lines() {
        match line {
            Line::Group(group) => {
                let _ = writeln!(out, "\n{}", banner(group));
            }
            Line::Entry(e) if !e.word.is_empty() => {
                push_padded(&mut out, &e.word, WORD_WIDTH);
                push_padded(&mut out, &e.code, CODE_WIDTH);
                let _ = writeln!(out, "{}", e.weight);
            }
            _ => {}
        }
    }
    out
}

/// 渲染一次查询结果。
pub fn render_query<'a>(word: &str, found: impl IntoIterator<Item = (&'a Entry, &'a str)>) -> String {
    let mut out = String::new();
    for (e, group) in found {
        if out.is_empty() {
            let _ = writeln!(out, "Found entries for '{word}':");
        }
        let _ = writeln!(out, "- Word:   {}", e.word);
        let _ = writeln!(out, "  Code:   {}", e.code);
        let _ = writeln!(out, "  Weight: {}", e.weight);
        let _ = writeln!(out, "  Group:  {group}");
        out.push_str("---\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_counts_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("中国"), 4);
        assert_eq!(display_width("词语 (Word)"), 11);
        assert_eq!(display_width("🤔"), 2);
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(display_width("\u{200B}"), 0);
    }

    #[test]
    fn banner_is_centered() {
        let b = banner("个人");
        assert_eq!(display_width(&b), TOTAL_WIDTH);
        assert!(b.starts_with("*****"));
        assert!(b.contains(" 个人 "));
        let long = "x".repeat(TOTAL_WIDTH + 5);
        assert_eq!(banner(&long), format!(" {long} "));
    }

    #[test]
    fn list_aligns_columns_and_skips_comments() {
        let dict = Dictionary::parse_str(
            "---\n...\n中国\tkl\t10\n🤔e\u{301}\tthk\t3\n# hidden\n## 个人\nab\tcd\t-1\n",
        );
        let text = render_list(&dict);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], format!("中国{}kl{}10", " ".repeat(21), " ".repeat(18)));
        assert_eq!(lines[3], format!("🤔e\u{301}{}thk{}3", " ".repeat(22), " ".repeat(17)));
        assert!(!text.contains("hidden"));
        assert!(text.contains(" 个人 "));
        assert!(text.ends_with(&format!("ab{}cd{}-1\n", " ".repeat(23), " ".repeat(18))));
    }

    #[test]
    fn query_blocks() {
        let dict = Dictionary::parse_str("...\nfind_me\tfind_code\t100\n");
        let text = render_query("find_me", dict.query("find_me"));
        assert!(text.starts_with("Found entries for 'find_me':\n"));
        assert!(text.contains("  Code:   find_code\n"));
        assert!(text.contains("  Weight: 100\n"));
        assert!(text.contains("  Group:  Default\n"));
        assert_eq!(render_query("nope", dict.query("nope")), "");
    }
}
