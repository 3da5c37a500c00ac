//! `encoder`：按五笔组词规则为多字词生成编码。
//!
//! 规则（按字符数，字符 = Unicode 码点）：
//! - 0 字：空编码
//! - 1 字：该字的完整编码
//! - 2/3 字：每个字取编码首字母
//! - 4 字及以上：取第 1、2、3 字和末字的编码首字母

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::split_fields;

/// 单字 -> 编码 查表抽象；生成器不关心码表来自文件还是内存。
pub trait CharCodes {
    fn code_of(&self, ch: char) -> Option<&str>;
}

impl CharCodes for HashMap<char, String> {
    fn code_of(&self, ch: char) -> Option<&str> {
        self.get(&ch).map(String::as_str)
    }
}

/// 参考码表：从主词典中只收录单字词条。
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    map: HashMap<char, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_str(s: &str) -> Self {
        let mut table = Self::new();
        for line in s.lines() {
            table.push_source_line(line);
        }
        table
    }

    /// 收录一行主词典文本；注释、空行、多字词和字段不足的行都被忽略。
    pub fn push_source_line(&mut self, line: &str) {
        if line.starts_with('#') || line.trim().is_empty() {
            return;
        }
        let Some((word, code, _)) = split_fields(line) else {
            return;
        };
        let mut chars = word.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            self.map.insert(ch, code.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl CharCodes for CodeTable {
    fn code_of(&self, ch: char) -> Option<&str> {
        self.map.code_of(ch)
    }
}

pub struct CodeGenerator<T = CodeTable> {
    table: T,
}

impl<T: CharCodes> CodeGenerator<T> {
    pub fn new(table: T) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// 生成编码；遇到第一个查不到的字立即返回 `CharNotFound`。
    pub fn generate(&self, word: &str) -> Result<String> {
        let chars: Vec<char> = word.chars().collect();
        let picked: Vec<char> = match chars.as_slice() {
            [] => return Ok(String::new()),
            [ch] => return self.lookup(*ch).map(str::to_string),
            [_, _] | [_, _, _] => chars.clone(),
            [a, b, c, .., last] => vec![*a, *b, *c, *last],
        };

        let mut code = String::with_capacity(picked.len());
        for ch in picked {
            // 空编码不贡献字母，也不算错误
            if let Some(first) = self.lookup(ch)?.chars().next() {
                code.push(first);
            }
        }
        debug!(word, code = %code, "generated code");
        Ok(code)
    }

    fn lookup(&self, ch: char) -> Result<&str> {
        self.table.code_of(ch).ok_or(Error::CharNotFound(ch))
    }
}
