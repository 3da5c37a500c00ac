use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `add` 的默认分组与权重。
pub const DEFAULT_ADD_GROUP: &str = "个人";
pub const DEFAULT_ADD_WEIGHT: i64 = 100;

#[derive(Parser)]
#[command(
    name = "rime-dict-manager",
    about = "A CLI tool to manage Rime user dictionaries.",
    long_about = "Query, add, modify, and delete entries in a Rime user dictionary file, \
with automatic Wubi code generation and Rime redeployment.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the Rime user dictionary file
    #[arg(long, short = 'f', global = true)]
    pub file: Option<PathBuf>,

    /// Path to the main dictionary used for Wubi code generation
    #[arg(long, global = true)]
    pub main_dict: Option<PathBuf>,

    /// Command executed (via `sh -c`) to redeploy Rime after a change
    #[arg(long, global = true)]
    pub deploy_cmd: Option<String>,

    /// Disable automatic Rime redeployment after an operation
    #[arg(long, global = true)]
    pub no_deploy: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add or update a word in the user dictionary
    ///
    /// If the code is not provided via --code, it is generated from the main dictionary.
    Add {
        /// Word to add
        word: String,

        /// Manually specify the Wubi code
        #[arg(long, short = 'c')]
        code: Option<String>,

        /// Weight for the word
        #[arg(long, short = 'w', default_value_t = DEFAULT_ADD_WEIGHT, allow_negative_numbers = true)]
        weight: i64,

        /// Group the word is added to
        #[arg(long, short = 'g', default_value = DEFAULT_ADD_GROUP)]
        group: String,
    },

    /// Delete a word from the user dictionary
    Delete {
        /// Word to delete (every matching entry is removed)
        word: String,
    },

    /// Set the weight for a word in the dictionary
    SetWeight {
        /// Word to update (every matching entry is updated)
        word: String,

        /// New weight
        #[arg(allow_negative_numbers = true)]
        weight: i64,
    },

    /// Query a word in the user dictionary
    Query {
        /// Word to look up
        word: String,
    },

    /// List all entries in the user dictionary, grouped
    List,
}
