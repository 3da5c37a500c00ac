use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

pub fn run(word: &str, config: &Config) -> CliResult<()> {
    let dict = rime_dict::load(&config.user_dict)?;
    let text = output::render_query(word, dict.query(word));
    if text.is_empty() {
        return Err(CliError::NotFound(format!(
            "word '{word}' not found in {}",
            config.user_dict.display()
        )));
    }
    print!("{text}");
    Ok(())
}
