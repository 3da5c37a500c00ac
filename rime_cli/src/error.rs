use colored::Colorize;
use rime_dict::DictError;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Loading the user dictionary (open/read) failed.
    Dict(DictError),
    /// Word absent for delete / set-weight / query.
    NotFound(String),
    /// Code could not be generated for a new word.
    Generate(String),
    /// Saving the user dictionary failed.
    Save(DictError),
    /// The redeploy command failed; carries the command and its combined output.
    Deploy { command: String, output: String },
    /// Configuration issues (paths, home directory).
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = "error:".red().bold();
        match self {
            CliError::Dict(e) => write!(f, "{label} {e}"),
            CliError::NotFound(msg) => write!(f, "{label} {msg}"),
            CliError::Generate(msg) => write!(
                f,
                "{label} failed to generate code: {msg}\n  {} provide it manually with --code",
                "help:".cyan().bold(),
            ),
            CliError::Save(e) => write!(f, "{label} failed to save dictionary: {e}"),
            CliError::Deploy { command, output } => {
                write!(f, "{label} deployment failed: {command}")?;
                if !output.trim().is_empty() {
                    write!(f, "\nOutput: {}", output.trim_end())?;
                }
                Ok(())
            }
            CliError::Config(msg) => write!(f, "{label} {msg}"),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<DictError> for CliError {
    fn from(e: DictError) -> Self {
        match e {
            DictError::Core(rime_core::Error::WordNotFound(_)) => CliError::NotFound(e.to_string()),
            DictError::Core(rime_core::Error::CharNotFound(_)) => CliError::Generate(e.to_string()),
            e => CliError::Dict(e),
        }
    }
}

impl From<rime_core::Error> for CliError {
    fn from(e: rime_core::Error) -> Self {
        DictError::from(e).into()
    }
}

/// Print error and exit.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    process::exit(EXIT_ERROR)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
