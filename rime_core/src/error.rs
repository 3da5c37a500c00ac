/// `rime_core` 的 Result 类型，默认错误为 [`Error`]。
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 词典操作与编码生成的错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 删除/改权重/查询时词典中没有该词
    #[error("word '{0}' not found in the dictionary")]
    WordNotFound(String),

    /// 生成编码时参考码表中缺少该字
    #[error("character '{0}' not found in main dictionary")]
    CharNotFound(char),
}
