// SPDX-License-Identifier: MPL-2.0
//! Resolution of the directory that holds `settings.toml`.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `ICED_PIVOT_CONFIG_DIR`
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedPivot";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_PIVOT_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("CLI config dir override already initialized; ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedPivot/`
/// - macOS: `~/Library/Application Support/IcedPivot/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedPivot\`
///
/// Returns `None` if no directory can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], with `override_path` taking priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_config_dir() {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
