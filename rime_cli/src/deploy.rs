//! 重新部署：修改词典后通知 Rime 重新加载。

use crate::error::{CliError, CliResult};
use std::process::Command;
use tracing::debug;

/// 通过 `sh -c` 同步执行部署命令，捕获 stdout + stderr。
///
/// 成功时返回合并后的输出；非零退出或无法启动都视为部署失败。
pub fn run(command: &str) -> CliResult<String> {
    debug!(command, "running deploy command");
    let out = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|e| CliError::Deploy {
            command: command.to_string(),
            output: e.to_string(),
        })?;

    let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(&out.stderr));
    debug!(command, status = %out.status, "deploy command finished");

    if !out.status.success() {
        return Err(CliError::Deploy {
            command: command.to_string(),
            output: format!("{}\n{output}", out.status),
        });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let out = run("echo 'Deployment successful!'; echo warn >&2").unwrap();
        assert!(out.contains("Deployment successful!"));
        assert!(out.contains("warn"));
    }

    #[test]
    fn non_zero_exit_is_error_with_output() {
        match run("echo reload broke; exit 3") {
            Err(CliError::Deploy { command, output }) => {
                assert_eq!(command, "echo reload broke; exit 3");
                assert!(output.contains("reload broke"));
            }
            other => panic!("expected deploy error, got {other:?}"),
        }
    }
}
