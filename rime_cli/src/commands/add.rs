use crate::commands::persist;
use crate::config::Config;
use crate::error::{CliError, CliResult};

pub fn run(word: &str, code: Option<&str>, weight: i64, group: &str, config: &Config) -> CliResult<()> {
    let mut dict = rime_dict::load(&config.user_dict)?;

    let code = match code {
        Some(code) => code.to_string(),
        None => {
            println!("Attempting to auto-generate Wubi code...");
            let generator = rime_dict::build_generator(config.main_dict()?).map_err(|e| {
                CliError::Generate(format!("could not load main dictionary: {e}"))
            })?;
            let generated = generator.generate(word)?;
            println!("Auto-generated code for '{word}': {generated}");
            generated
        }
    };

    dict.add_or_update(word, &code, weight, group);
    persist(&dict, config)
}
