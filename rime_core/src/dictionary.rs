//! `dictionary`：用户词典的内存模型。
//!
//! 文件结构：
//! - 头部：直到（并包含）第一行以 `...` 开头的行，原样保留
//! - 正文：有序的 [`Line`] 序列，分组由 `## <group>` 标记按位置决定
//!
//! 组成员关系不单独缓存，每次需要时向前扫描得出。

use std::fmt;
use std::slice;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Entry, Line};
use crate::parser::{is_header_end, parse_line};

/// 第一个分组标记之前的词条所属的隐式组名。
pub const DEFAULT_GROUP: &str = "Default";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    header: Vec<String>,
    lines: Vec<Line>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(header: Vec<String>, lines: Vec<Line>) -> Self {
        Self { header, lines }
    }

    /// 从完整文本解析（行尾 `\n` / `\r\n` 均可）。
    pub fn parse_str(s: &str) -> Self {
        let mut dict = Self::new();
        for line in s.lines() {
            dict.push_source_line(line);
        }
        dict
    }

    /// 追加一行源文本：头部未结束时记入头部，否则分类后记入正文。
    pub fn push_source_line(&mut self, line: &str) {
        if self.header_open() {
            self.header.push(line.to_string());
        } else {
            self.lines.push(parse_line(line));
        }
    }

    fn header_open(&self) -> bool {
        self.lines.is_empty() && !self.header.last().is_some_and(|l| is_header_end(l))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn entry_count(&self) -> usize {
        self.lines.iter().filter(|l| l.as_entry().is_some()).count()
    }

    /// 新增或更新词条。
    ///
    /// - 已存在（按顺序第一个匹配）：原地更新 code/weight，不移动分组
    /// - 不存在且 `group` 已有标记：插入到该标记之后的第一个位置
    /// - 否则：在末尾追加 `## group` 标记和词条
    pub fn add_or_update(&mut self, word: &str, code: &str, weight: i64, group: &str) {
        if let Some(Line::Entry(e)) = self.lines.iter_mut().find(|l| l.is_entry_for(word)) {
            debug!(word, code, weight, "updating existing entry in place");
            e.code = code.to_string();
            e.weight = weight;
            return;
        }

        let entry = Line::Entry(Entry::new(word, code, weight));
        let marker = self
            .lines
            .iter()
            .position(|l| matches!(l, Line::Group(g) if g == group));
        match marker {
            Some(i) => {
                debug!(word, group, "inserting entry after existing group marker");
                self.lines.insert(i + 1, entry);
            }
            None => {
                debug!(word, group, "appending new group with entry");
                self.lines.push(Line::Group(group.to_string()));
                self.lines.push(entry);
            }
        }
    }

    /// 删除所有 word 完全匹配的词条，返回删除数量；一个都没有时返回 `WordNotFound`。
    pub fn delete(&mut self, word: &str) -> Result<usize> {
        let before = self.lines.len();
        self.lines.retain(|l| !l.is_entry_for(word));
        match before - self.lines.len() {
            0 => Err(Error::WordNotFound(word.to_string())),
            n => Ok(n),
        }
    }

    /// 更新所有匹配词条的权重（不止第一个），返回更新数量。
    pub fn set_weight(&mut self, word: &str, weight: i64) -> Result<usize> {
        let mut n = 0;
        for line in &mut self.lines {
            match line {
                Line::Entry(e) if e.word == word => {
                    e.weight = weight;
                    n += 1;
                }
                _ => {}
            }
        }
        if n == 0 {
            return Err(Error::WordNotFound(word.to_string()));
        }
        Ok(n)
    }

    /// 所有词条及其有效组名，按文件顺序。
    pub fn entries_with_group(&self) -> GroupedEntries<'_> {
        GroupedEntries {
            lines: self.lines.iter(),
            group: DEFAULT_GROUP,
        }
    }

    /// 按 word 精确查询；每次调用重新扫描。
    pub fn query<'a>(&'a self, word: &'a str) -> impl Iterator<Item = (&'a Entry, &'a str)> + 'a {
        self.entries_with_group().filter(move |(e, _)| e.word == word)
    }
}

/// 写出完整文件内容：头部 + 正文，每行以 `\n` 结尾。
impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.header {
            writeln!(f, "{line}")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// 向前扫描正文，跟踪最近的分组标记。
pub struct GroupedEntries<'a> {
    lines: slice::Iter<'a, Line>,
    group: &'a str,
}

impl<'a> Iterator for GroupedEntries<'a> {
    type Item = (&'a Entry, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Line::Group(g) => self.group = g,
                Line::Entry(e) => return Some((e, self.group)),
                Line::Comment(_) | Line::Raw(_) => {}
            }
        }
        None
    }
}
