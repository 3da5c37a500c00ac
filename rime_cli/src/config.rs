use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use std::path::PathBuf;

const RIME_DIR: &str = "Library/Rime";
const USER_DICT_FILE: &str = "wubi86_jidian_user.dict.yaml";
const MAIN_DICT_FILE: &str = "wubi86_jidian.dict.yaml";
const DEFAULT_DEPLOY_CMD: &str = r"/Library/Input\ Methods/Squirrel.app/Contents/MacOS/Squirrel --reload";

/// 一次调用的全部配置；由命令行参数解析而来，显式传给各个命令。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 用户词典（读写）
    pub user_dict: PathBuf,
    /// 主词典（只读，用于生成编码）；未指定时由 [`Config::main_dict`] 按需取默认路径
    pub main_dict: Option<PathBuf>,
    /// 修改成功后执行的重新部署命令；None 表示不部署
    pub deploy: Option<String>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let user_dict = match &cli.file {
            Some(p) => p.clone(),
            None => rime_dir()?.join(USER_DICT_FILE),
        };
        let deploy = if cli.no_deploy {
            None
        } else {
            let cmd = cli.deploy_cmd.as_deref().unwrap_or(DEFAULT_DEPLOY_CMD);
            Some(cmd.trim().to_string()).filter(|c| !c.is_empty())
        };
        Ok(Self {
            user_dict,
            main_dict: cli.main_dict.clone(),
            deploy,
        })
    }

    /// 主词典路径；只有自动生成编码时才需要，此时才解析 home 目录。
    pub fn main_dict(&self) -> CliResult<PathBuf> {
        match &self.main_dict {
            Some(p) => Ok(p.clone()),
            None => Ok(rime_dir()?.join(MAIN_DICT_FILE)),
        }
    }
}

fn rime_dir() -> CliResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(RIME_DIR))
        .ok_or_else(|| CliError::Config("cannot determine home directory; pass --file / --main-dict".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Config {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        Config::from_cli(&cli).unwrap()
    }

    #[test]
    fn explicit_paths_win() {
        let cfg = parse(&["rime-dict-manager", "-f", "/tmp/u.yaml", "--main-dict", "/tmp/m.yaml", "list"]);
        assert_eq!(cfg.user_dict, PathBuf::from("/tmp/u.yaml"));
        assert_eq!(cfg.main_dict().unwrap(), PathBuf::from("/tmp/m.yaml"));
        assert_eq!(cfg.deploy.as_deref(), Some(DEFAULT_DEPLOY_CMD));
    }

    #[test]
    fn main_dict_is_resolved_only_on_demand() {
        let cfg = parse(&["rime-dict-manager", "-f", "/tmp/u.yaml", "delete", "w"]);
        assert_eq!(cfg.main_dict, None);
        if let Some(home) = dirs::home_dir() {
            assert_eq!(cfg.main_dict().unwrap(), home.join(RIME_DIR).join(MAIN_DICT_FILE));
        }
    }

    #[test]
    fn no_deploy_or_blank_command_disables_deploy() {
        let cfg = parse(&["rime-dict-manager", "-f", "u", "--main-dict", "m", "--no-deploy", "list"]);
        assert_eq!(cfg.deploy, None);
        let cfg = parse(&["rime-dict-manager", "-f", "u", "--main-dict", "m", "--deploy-cmd", "  ", "list"]);
        assert_eq!(cfg.deploy, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cfg = parse(&["rime-dict-manager", "query", "w", "-f", "u", "--main-dict", "m", "--deploy-cmd", "true"]);
        assert_eq!(cfg.user_dict, PathBuf::from("u"));
        assert_eq!(cfg.deploy.as_deref(), Some("true"));
    }
}
