//! Font asset resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default font.
pub const FONT_PATH_ENV: &str = "FONT_PATH";

/// Bundled font shipped next to the crate sources.
pub fn bundled_font_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("fonts")
        .join("font.ttf")
}

/// Resolves the font path: explicit value, then `FONT_PATH`, then the
/// bundled font. The file is not opened here.
pub fn resolve_font_path(explicit: Option<&Path>) -> PathBuf {
    resolve_font_path_with(explicit, std::env::var_os(FONT_PATH_ENV))
}

/// Same as [`resolve_font_path`] with the environment value supplied by the
/// caller.
pub fn resolve_font_path_with(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => bundled_font_path(),
    }
}
