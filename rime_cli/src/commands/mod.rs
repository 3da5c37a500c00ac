pub mod add;
pub mod delete;
pub mod list;
pub mod query;
pub mod set_weight;

use crate::config::Config;
use crate::deploy;
use crate::error::{CliError, CliResult};
use rime_core::Dictionary;

/// 保存修改后的词典，然后按配置触发重新部署。
///
/// 保存失败与部署失败分别报告为 `Save` / `Deploy`。
pub fn persist(dict: &Dictionary, config: &Config) -> CliResult<()> {
    println!("Saving changes to {}...", config.user_dict.display());
    rime_dict::save(dict, &config.user_dict).map_err(CliError::Save)?;
    println!("Successfully saved.");

    if let Some(command) = &config.deploy {
        println!("Triggering Rime redeployment...");
        println!("Executing deployment command: {command}");
        let output = deploy::run(command)?;
        if !output.is_empty() {
            println!("{}", output.trim_end());
        }
        println!("Deployment command executed.");
    }
    Ok(())
}
