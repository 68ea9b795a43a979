use std::path::PathBuf;

/// All errors `doc` can report.
///
/// Each variant carries enough context to fix the problem without
/// re-running in verbose mode.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error(
        "The given context directory '{path}' does not exist.\n\n  \
         Pass the project directory with --context <dir> or set DOC_CONTEXT."
    )]
    ContextNotFound { path: PathBuf },

    #[error("Error loading settings file {path}: {source}")]
    SettingsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Error parsing settings {path}: {detail}\n\n  \
         Expected format:\n    \
         general:\n      \
           username: <name>\n      \
           project_name: <name>\n    \
         default_environment: local\n    \
         additional_environments: [credentials]"
    )]
    InvalidSettings { path: PathBuf, detail: String },

    #[error(
        "Environment '{name}' not found\n\n  \
         Available environments: {available}\n  \
         Add it to the 'environments' list in settings.yml to allow it."
    )]
    EnvironmentNotFound { name: String, available: String },

    #[error(
        "Invalid environment name '{name}'\n\n  \
         Use letters, digits, '-', '_' or '.', starting with a letter or digit."
    )]
    InvalidEnvironmentName { name: String },

    #[error(
        "Compose file does not exist: {path}\n\n  \
         Every environment needs its own docker-compose.<env>.yml in the context directory."
    )]
    ComposeFileMissing { path: PathBuf },

    #[error(
        "{name} is not installed or not runnable. Check your executable.\n\n  \
         Install docker-compose or point DOC_COMPOSE_BIN at it."
    )]
    ExecutableNotFound { name: String },

    #[error("{program} exited with {}: {output}", describe_status(.status))]
    CommandFailed {
        program: String,
        status: Option<i32>,
        output: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DocError {
    /// Process exit code to use when this error ends the program.
    ///
    /// A failing child passes its own status through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocError::CommandFailed {
                status: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocError>;
