use crate::commands::persist;
use crate::config::Config;
use crate::error::CliResult;

pub fn run(word: &str, weight: i64, config: &Config) -> CliResult<()> {
    let mut dict = rime_dict::load(&config.user_dict)?;
    let updated = dict.set_weight(word, weight)?;
    println!("Updating weight for '{word}' to {weight} ({updated} entries)...");
    persist(&dict, config)
}
