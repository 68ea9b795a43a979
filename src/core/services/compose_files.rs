use std::path::{Path, PathBuf};

/// Base compose file every environment starts from.
pub const BASE_COMPOSE_FILE: &str = "docker-compose.yml";

/// File name of the override for one environment: `docker-compose.<env>.yml`.
pub fn override_file_name(env: &str) -> String {
    format!("docker-compose.{env}.yml")
}

/// Builds the ordered list of compose files for an environment.
///
/// docker-compose merges `-f` files left to right, so the order is the
/// contract: base file, then the environment, then each additional
/// environment. Empty names are skipped.
pub struct ComposeFileResolver;

impl ComposeFileResolver {
    /// For `local` with additional `["credentials"]` under `ctx`, returns
    /// `[ctx/docker-compose.yml, ctx/docker-compose.local.yml,
    /// ctx/docker-compose.credentials.yml]`.
    pub fn resolve(&self, context: &Path, env: &str, additional: &[String]) -> Vec<PathBuf> {
        let mut files = vec![context.join(BASE_COMPOSE_FILE)];

        let layers = std::iter::once(env).chain(additional.iter().map(String::as_str));
        for layer in layers.filter(|name| !name.is_empty()) {
            files.push(context.join(override_file_name(layer)));
        }

        files
    }

    /// Return the first file in `files` that does not exist, if any.
    pub fn first_missing<'a>(&self, files: &'a [PathBuf]) -> Option<&'a PathBuf> {
        files.iter().find(|path| !path.is_file())
    }
}
