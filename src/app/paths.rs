// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the configuration directory.
//!
//! This module provides a single source of truth for where the application
//! stores its settings file.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`MASCARADA_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```
//!
//! After initialization, all path functions will respect the CLI override
//! (unless an explicit override is passed).

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Mascarada";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "MASCARADA_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// This should be called once at application startup, before any path
/// resolution functions are called. The CLI override takes highest priority.
///
/// # Arguments
///
/// * `config_dir` - Optional config directory from `--config-dir` CLI argument
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("init_cli_overrides called twice");
}

/// Returns the CLI config directory override, if set.
fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Reads an environment variable, treating empty values as unset.
fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory.
///
/// Resolution order: CLI override, `MASCARADA_CONFIG_DIR`, then the
/// platform config directory (e.g. `~/.config/Mascarada` on Linux).
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory with an explicit override.
///
/// The explicit override takes priority over CLI and environment settings.
/// Passing `None` falls through to the normal resolution order.
#[must_use]
pub fn get_app_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir
        .or_else(cli_config_dir)
        .or_else(|| env_path(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

/// Serializes tests (across modules) that mutate process environment
/// variables involved in path resolution.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    &LOCK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let _guard = env_lock().lock().unwrap();
        let explicit = PathBuf::from("/tmp/mascarada-explicit");
        let resolved = get_app_config_dir_with_override(Some(explicit.clone()));
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _guard = env_lock().lock().unwrap();
        let previous = std::env::var(ENV_CONFIG_DIR).ok();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/mascarada-env");

        let resolved = get_app_config_dir();
        assert_eq!(resolved, Some(PathBuf::from("/tmp/mascarada-env")));

        match previous {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _guard = env_lock().lock().unwrap();
        let previous = std::env::var(ENV_CONFIG_DIR).ok();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let resolved = get_app_config_dir();
        assert_ne!(resolved, Some(PathBuf::new()));

        match previous {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
    }

    #[test]
    fn platform_default_ends_with_app_name() {
        let _guard = env_lock().lock().unwrap();
        let previous = std::env::var(ENV_CONFIG_DIR).ok();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(resolved) = get_app_config_dir() {
            assert!(resolved.ends_with(APP_NAME) || cli_config_dir().is_some());
        }

        match previous {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
    }
}
