use crate::commands::persist;
use crate::config::Config;
use crate::error::CliResult;

pub fn run(word: &str, config: &Config) -> CliResult<()> {
    let mut dict = rime_dict::load(&config.user_dict)?;
    let removed = dict.delete(word)?;
    println!("Deleting word '{word}' ({removed} entries)...");
    persist(&dict, config)
}
