use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::errors::Result;
use crate::core::models::invocation::{CommandOutput, ComposeInvocation};
use crate::core::traits::runner::ProcessRunner;

/// Executable launched when `DOC_COMPOSE_BIN` is not set.
pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";

/// Environment variable overriding the compose executable.
pub const COMPOSE_BIN_VAR: &str = "DOC_COMPOSE_BIN";

/// Runner that shells out to the system `docker-compose` binary.
pub struct SystemRunner {
    program: String,
}

impl SystemRunner {
    /// Create a runner for `DOC_COMPOSE_BIN`, or `docker-compose`.
    pub fn from_env() -> Self {
        let program = std::env::var(COMPOSE_BIN_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPOSE_BIN.to_string());
        Self::with_program(program)
    }

    /// Create a runner for a specific executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn is_available(&self) -> bool {
        command_exists(&self.program)
    }

    fn run(&self, invocation: &ComposeInvocation) -> Result<CommandOutput> {
        log::debug!("running in {}: {invocation}", invocation.cwd.display());

        // stdout and stderr share one pipe so their lines stay in write order
        let (mut reader, writer) = std::io::pipe()?;
        let mut child = {
            let mut cmd = Command::new(&invocation.program);
            cmd.args(&invocation.args)
                .current_dir(&invocation.cwd)
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn()?
        };

        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let status = child.wait()?;

        Ok(CommandOutput {
            status: status.code(),
            success: status.success(),
            combined: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}

/// Whether `command` resolves to an executable file.
///
/// Names containing a path separator are checked directly; bare names are
/// looked up in each `PATH` directory.
pub fn command_exists(command: &str) -> bool {
    if command.is_empty() {
        return false;
    }

    let as_path = Path::new(command);
    if as_path.components().count() > 1 {
        return candidates(as_path).iter().any(|p| is_executable(p));
    }

    let Some(path_var) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir.join(command)))
        .any(|p| is_executable(&p))
}

#[cfg(windows)]
fn candidates(base: &Path) -> Vec<PathBuf> {
    let mut out = vec![base.to_path_buf()];
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    for ext in exts.split(';').filter(|e| !e.is_empty()) {
        let mut name = base.as_os_str().to_owned();
        name.push(ext);
        out.push(PathBuf::from(name));
    }
    out
}

#[cfg(not(windows))]
fn candidates(base: &Path) -> Vec<PathBuf> {
    vec![base.to_path_buf()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
