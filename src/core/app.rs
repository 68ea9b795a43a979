use std::path::{Path, PathBuf};

use crate::config::app_config::DocConfig;
use crate::core::errors::{DocError, Result};
use crate::core::models::invocation::ComposeInvocation;
use crate::core::services::compose_files::ComposeFileResolver;
use crate::core::traits::runner::ProcessRunner;

/// One `doc` run: a context directory, the environment it targets and
/// the project settings, plus the runner that launches docker-compose.
pub struct DocApp<R: ProcessRunner> {
    context: PathBuf,
    env: String,
    config: DocConfig,
    runner: R,
}

impl<R: ProcessRunner> DocApp<R> {
    /// Build the app for `context`.
    ///
    /// The environment is `env` when given and non-empty, otherwise the
    /// `default_environment` from settings, otherwise empty.
    ///
    /// # Errors
    ///
    /// - `ContextNotFound` if `context` is not a directory.
    /// - `SettingsUnreadable` / `InvalidSettings` from loading settings.
    /// - `InvalidEnvironmentName` if the environment is not a safe name.
    /// - `EnvironmentNotFound` if settings list `environments` and the
    ///   environment is not one of them.
    pub fn new(context: &Path, env: Option<&str>, runner: R) -> Result<Self> {
        if !context.is_dir() {
            return Err(DocError::ContextNotFound {
                path: context.to_path_buf(),
            });
        }
        // docker-compose resolves -f paths from its cwd, which is the context
        let context = std::fs::canonicalize(context)?;

        let config = DocConfig::load(&context)?;

        let env = env
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(&config.default_environment)
            .to_string();

        if !env.is_empty() {
            crate::cli::context::validate_env_name(&env)?;
            if let Some(allowed) = config.allowed_environments() {
                if !allowed.contains(&env) {
                    return Err(DocError::EnvironmentNotFound {
                        name: env,
                        available: allowed.join(", "),
                    });
                }
            }
        }

        log::debug!(
            "project {} using environment '{}'",
            config.fullname(),
            if env.is_empty() { "<none>" } else { env.as_str() }
        );

        Ok(Self {
            context,
            env,
            config,
            runner,
        })
    }

    pub fn context(&self) -> &Path {
        &self.context
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// All compose files for the current environment, base file first.
    pub fn compose_files(&self) -> Vec<PathBuf> {
        ComposeFileResolver.resolve(
            &self.context,
            &self.env,
            &self.config.additional_environments,
        )
    }

    /// Fail on the first compose file that does not exist.
    pub fn check_compose_files(&self) -> Result<()> {
        let files = self.compose_files();
        match ComposeFileResolver.first_missing(&files) {
            Some(path) => Err(DocError::ComposeFileMissing { path: path.clone() }),
            None => Ok(()),
        }
    }

    /// `docker-compose -f <file>... <command> <parameters>...`, run from the context.
    pub fn invocation(&self, command: &str, parameters: &[String]) -> ComposeInvocation {
        let file_args = self
            .compose_files()
            .into_iter()
            .flat_map(|file| ["-f".to_string(), file.to_string_lossy().into_owned()]);

        ComposeInvocation::new(self.runner.program(), &self.context)
            .args(file_args)
            .arg(command)
            .args(parameters.iter().cloned())
    }

    /// Run `command` through docker-compose and return its combined output.
    ///
    /// Checks every compose file and the executable before spawning anything.
    ///
    /// # Errors
    ///
    /// - `ComposeFileMissing` if a compose file is absent.
    /// - `ExecutableNotFound` if the runner's program cannot be resolved.
    /// - `CommandFailed` with the captured output on a non-zero exit.
    pub fn run(&self, command: &str, parameters: &[String]) -> Result<String> {
        self.check_compose_files()?;

        if !self.runner.is_available() {
            return Err(DocError::ExecutableNotFound {
                name: self.runner.program().to_string(),
            });
        }

        let invocation = self.invocation(command, parameters);
        let output = self.runner.run(&invocation)?;

        if !output.success {
            return Err(DocError::CommandFailed {
                program: invocation.program,
                status: output.status,
                output: output.combined,
            });
        }

        Ok(output.combined)
    }
}
