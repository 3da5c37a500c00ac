//! `rime_core`：纯逻辑层，不做任何文件 I/O。
//!
//! - `model` / `parser`：用户词典的行模型与逐行分类
//! - `dictionary`：头部 + 正文的有序模型，增删改查与序列化
//! - `encoder`：参考码表与多字词编码生成
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod model;
pub mod parser;

pub use dictionary::{DEFAULT_GROUP, Dictionary};
pub use encoder::{CharCodes, CodeGenerator, CodeTable};
pub use error::{Error, Result};
pub use model::{Entry, Line};
