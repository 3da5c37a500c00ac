//! `parser`：正文行分类。
//!
//! 优先级：`##` 分组 > `#` 注释 > 空行 > `word<TAB>code[<TAB>weight]` 词条 > 原样保留。
//! 单行的异常从不报错，只会退化为 `Line::Raw` 或 weight=0，便于容忍手工编辑过的词典。

use tracing::warn;

use crate::model::{Entry, Line};

/// 头部结束标记（YAML 文档结束符）。
pub const HEADER_END: &str = "...";

/// 判断该行是否结束头部（按 trim 后的内容判断）。
pub fn is_header_end(line: &str) -> bool {
    line.trim().starts_with(HEADER_END)
}

/// 按 TAB 切出 `(word, code, rest)`；不足两个字段时返回 None。
pub fn split_fields(line: &str) -> Option<(&str, &str, Option<&str>)> {
    let mut it = line.split('\t');
    let word = it.next()?;
    let code = it.next()?;
    Some((word, code, it.next()))
}

pub fn parse_line(line: &str) -> Line {
    if let Some(group) = line.strip_prefix("##") {
        return Line::Group(group.trim().to_string());
    }
    if line.starts_with('#') {
        return Line::Comment(line.to_string());
    }
    if line.trim().is_empty() {
        return Line::Raw(line.to_string());
    }
    let Some((word, code, weight)) = split_fields(line) else {
        warn!(line, "line has fewer than two tab-separated fields, kept verbatim");
        return Line::Raw(line.to_string());
    };
    if word.is_empty() {
        return Line::Raw(line.to_string());
    }
    // TODO: a non-integer weight could become a hard parse error once hand-edited dictionaries are cleaned up.
    let weight = match weight {
        None => 0,
        Some(w) => w.parse::<i64>().unwrap_or_else(|_| {
            warn!(word, weight = w, "weight is not an integer, using 0");
            0
        }),
    };
    Line::Entry(Entry::new(word, code, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_groups_before_comments() {
        assert_eq!(parse_line("##  个人 "), Line::Group("个人".into()));
        assert_eq!(parse_line("##"), Line::Group(String::new()));
        assert_eq!(parse_line("# note"), Line::Comment("# note".into()));
    }

    #[test]
    fn blank_and_short_lines_are_raw() {
        assert_eq!(parse_line(""), Line::Raw(String::new()));
        assert_eq!(parse_line("  \t "), Line::Raw("  \t ".into()));
        assert_eq!(parse_line("onlyword"), Line::Raw("onlyword".into()));
        assert_eq!(parse_line("\tcode\t1"), Line::Raw("\tcode\t1".into()));
    }

    #[test]
    fn entry_weight_defaults_to_zero() {
        assert_eq!(parse_line("一丁\tag"), Line::Entry(Entry::new("一丁", "ag", 0)));
        assert_eq!(parse_line("一丁\tag\t12"), Line::Entry(Entry::new("一丁", "ag", 12)));
        assert_eq!(parse_line("一丁\tag\t-3"), Line::Entry(Entry::new("一丁", "ag", -3)));
        assert_eq!(parse_line("一丁\tag\tabc"), Line::Entry(Entry::new("一丁", "ag", 0)));
        assert_eq!(parse_line("一丁\t\t7"), Line::Entry(Entry::new("一丁", "", 7)));
    }

    #[test]
    fn header_end_is_trimmed() {
        assert!(is_header_end("..."));
        assert!(is_header_end("  ...  "));
        assert!(!is_header_end("---"));
    }
}
