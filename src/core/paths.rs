use std::env;

/// Environment override for the themes directory.
pub const THEMES_DIR_ENV: &str = "THEMEBOY_THEMES_DIR";

/// Default themes directory, relative to the working directory.
pub const DEFAULT_THEMES_DIR: &str = "wp-content/themes";

/// Resolve the allowed themes directory.
///
/// Precedence: explicit flag, then `THEMEBOY_THEMES_DIR`, then the
/// standard `wp-content/themes` layout. `~` is expanded; nothing is
/// created or checked here — existence is the scaffolder's concern.
pub fn themes_dir(flag: Option<&str>) -> String {
    let raw = match flag {
        Some(dir) => dir.to_string(),
        None => env::var(THEMES_DIR_ENV).unwrap_or_else(|_| DEFAULT_THEMES_DIR.to_string()),
    };

    shellexpand::tilde(&raw).into_owned()
}
