//! 文件层：把 `rime_core` 的内存模型绑定到磁盘上的 `*.dict.yaml`。
//!
//! 文件格式（UTF-8）：
//!
//! - 头部：任意行，直到并包含以 `...` 开头的一行
//! - `word<TAB>code<TAB>weight`：词条，weight 可省略，默认 0
//! - `## <group>`：分组标记
//! - `# ...`：注释行
//!
//! 保存时整体重写文件，没有临时文件 + rename；写到一半失败可能留下截断的文件。

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use rime_core::{CodeGenerator, CodeTable, Dictionary};
use tracing::{debug, info};

pub type Result<T, E = DictError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("failed to open dictionary file '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("error reading dictionary file '{}' at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: io::Error,
    },

    #[error("failed to write dictionary file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Core(#[from] rime_core::Error),
}

/// 逐行读取文件，每行去掉 `\n` / `\r\n` 后交给 `f`。
fn for_each_line(path: &Path, mut f: impl FnMut(&str)) -> Result<usize> {
    let file = File::open(path).map_err(|source| DictError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut count = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictError::Read {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        f(&line);
        count += 1;
    }
    Ok(count)
}

/// 读取用户词典。
pub fn load(path: impl AsRef<Path>) -> Result<Dictionary> {
    let path = path.as_ref();
    let mut dict = Dictionary::new();
    let count = for_each_line(path, |line| dict.push_source_line(line))?;
    debug!(
        path = %path.display(),
        lines = count,
        header = dict.header().len(),
        entries = dict.entry_count(),
        "loaded dictionary"
    );
    Ok(dict)
}

/// 整体重写用户词典。
pub fn save(dict: &Dictionary, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| DictError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut w = BufWriter::new(file);
    write!(w, "{dict}").map_err(write_err)?;
    w.flush().map_err(write_err)?;
    info!(path = %path.display(), entries = dict.entry_count(), "saved dictionary");
    Ok(())
}

/// 从主词典（参考词典）构建编码生成器，只收录单字词条。
pub fn build_generator(main_dict: impl AsRef<Path>) -> Result<CodeGenerator> {
    let path = main_dict.as_ref();
    let mut table = CodeTable::new();
    for_each_line(path, |line| table.push_source_line(line))?;
    debug!(path = %path.display(), chars = table.len(), "built reference code table");
    Ok(CodeGenerator::new(table))
}
