use std::fmt;

/// 词条：`word<TAB>code<TAB>weight`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 词语（提交文本）
    pub word: String,
    /// 编码（例如五笔 `klwn`）
    pub code: String,
    /// 权重（越大越靠前），缺省为 0
    pub weight: i64,
}

impl Entry {
    pub fn new(word: impl Into<String>, code: impl Into<String>, weight: i64) -> Self {
        Self {
            word: word.into(),
            code: code.into(),
            weight,
        }
    }
}

/// 词典正文中的一行。
///
/// 分组是**位置性**的：`Group` 之后的所有 `Entry` 都属于该组，直到下一个 `Group`。
/// 因此 `Entry` 本身不带组名，有效组名由顺序扫描得出（见 `Dictionary::entries_with_group`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Entry(Entry),
    /// `## <group>`
    Group(String),
    /// 单个 `#` 开头的注释行，原样保留
    Comment(String),
    /// 其他无法解析的行（空行、字段不足等），原样保留
    Raw(String),
}

impl Line {
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Line::Entry(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_entry_for(&self, word: &str) -> bool {
        matches!(self, Line::Entry(e) if e.word == word)
    }
}

/// 序列化为文件中的一行（不含换行符）。
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Group(group) => write!(f, "## {group}"),
            Line::Comment(text) | Line::Raw(text) => f.write_str(text),
            // 空 word 的词条没有可写的原文，退化为空行
            Line::Entry(e) if e.word.is_empty() => Ok(()),
            Line::Entry(e) => write!(f, "{}\t{}\t{}", e.word, e.code, e.weight),
        }
    }
}
