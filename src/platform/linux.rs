// Pfoteneis platform paths for Linux
// Config: ~/.config/pfoteneis

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Pfoteneis on Linux.
/// Uses `$XDG_CONFIG_HOME/pfoteneis` if set, otherwise `~/.config/pfoteneis`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("pfoteneis")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("pfoteneis")
    }
}
