use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::{DocError, Result};

static ENV_NAME: OnceLock<Regex> = OnceLock::new();

/// Resolve the context directory from the `--context` value.
///
/// Defaults to the current directory. The path must exist and be a
/// directory.
pub fn resolve(custom: Option<&Path>) -> Result<PathBuf> {
    let dir = custom
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if !dir.is_dir() {
        return Err(DocError::ContextNotFound { path: dir });
    }

    log::debug!("context directory: {}", dir.display());
    Ok(dir)
}

/// Validate an environment name before it becomes part of a file name.
///
/// Rejects anything that could point outside the context directory.
pub fn validate_env_name(name: &str) -> Result<()> {
    let re = ENV_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("environment name pattern is valid")
    });

    if !re.is_match(name) || name.contains("..") {
        return Err(DocError::InvalidEnvironmentName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_names() {
        for name in ["local", "test", "staging", "beta", "live", "eu-west_1", "v1.2"] {
            assert!(validate_env_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_traversal_and_separators() {
        for name in ["", "..", "../prod", "a/b", "a\\b", ".hidden", "a..b", "-flag", "with space"] {
            assert!(validate_env_name(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn resolve_rejects_missing_directory() {
        let err = resolve(Some(Path::new("./contextdoesnotexist"))).unwrap_err();
        assert!(matches!(err, DocError::ContextNotFound { .. }));
    }

    #[test]
    fn resolve_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.yml");
        std::fs::write(&file, "").unwrap();
        assert!(resolve(Some(&file)).is_err());
    }

    #[test]
    fn resolve_defaults_to_current_dir() {
        assert_eq!(resolve(None).unwrap(), PathBuf::from("."));
    }
}
