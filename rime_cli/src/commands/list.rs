use crate::config::Config;
use crate::error::CliResult;
use crate::output;

pub fn run(config: &Config) -> CliResult<()> {
    let dict = rime_dict::load(&config.user_dict)?;
    println!("词典文件: {}\n", config.user_dict.display());
    print!("{}", output::render_list(&dict));
    Ok(())
}
