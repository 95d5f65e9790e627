//! Path normalization and history identifiers
//!
//! Every path that enters the store goes through [`normalize`], so the rest of
//! the crate never has to care which separator the host platform uses.
//! History entries are keyed by [`identify`], a blake3 digest of the
//! normalized path string.

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Normalizes a path string for the current platform.
///
/// On platforms that use `\` as their separator every `\` becomes `/`.
/// Elsewhere the input is returned unchanged.
pub fn normalize(path: &str) -> String {
    if MAIN_SEPARATOR == '\\' {
        normalize_separators(path)
    } else {
        path.to_string()
    }
}

/// Rewrites every `\` to `/`, regardless of platform
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Returns the stable identifier of a path string
///
/// The identifier is the full lowercase hex blake3 digest of the raw string.
pub fn identify(path: &str) -> String {
    blake3::hash(path.as_bytes()).to_hex().to_string()
}

/// Resolves `path` against `cwd` into an absolute, normalized path string.
///
/// `.` and `..` components are removed lexically; symlinks are not resolved.
pub fn absolutize(path: &str, cwd: &Path) -> String {
    let raw = Path::new(path);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };

    let mut clean = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other.as_os_str()),
        }
    }

    normalize(&clean.to_string_lossy())
}

/// Returns true if the path string points at an existing directory
pub fn is_dir(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}
