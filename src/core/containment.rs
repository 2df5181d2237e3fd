//! Lexical path containment checking.
//!
//! The scaffolder derives the theme directory from user input, so the
//! computed path must be proven to sit directly inside the allowed themes
//! directory before any filesystem access. Resolution is purely lexical:
//! no filesystem calls, no symlink resolution.

use crate::error::Error;
use crate::Result;

/// Canonicalize a path lexically, resolving `.` and `..` segments.
///
/// Backslashes are normalized to forward slashes first so the check
/// behaves the same regardless of the platform path separator. Popping
/// `..` past the start is a no-op.
pub fn canonicalize(path: &str) -> String {
    let normalized = path.replace('\\', "/");

    if normalized.is_empty() || normalized == "/" {
        return normalized;
    }

    let mut output: Vec<&str> = Vec::new();

    for segment in normalized.split('/') {
        match segment {
            ".." => {
                output.pop();
            }
            "." => {}
            _ => output.push(segment),
        }
    }

    output.join("/")
}

/// Lexical parent of an already-canonical path.
fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Require `target_dir` to be a direct child of `allowed_dir`.
///
/// "Direct child" is deliberate: a slug containing `../` or an absolute
/// path could otherwise resolve to a writable location elsewhere under
/// the base. Failure is fatal to the whole operation.
pub fn check_containment(target_dir: &str, allowed_dir: &str) -> Result<()> {
    let canonical_target = canonicalize(target_dir);
    let canonical_allowed = canonicalize(allowed_dir);

    if parent(&canonical_target) != canonical_allowed {
        return Err(Error::scaffold_path_escape(target_dir, allowed_dir));
    }

    Ok(())
}

/// Require `path` to resolve somewhere under `base_dir`.
///
/// Looser than [`check_containment`]: used as defense in depth on each
/// manifest target, which may legitimately sit several directories below
/// the theme directory but must never climb out of it.
pub fn check_within(path: &str, base_dir: &str) -> Result<()> {
    let canonical_path = canonicalize(path);
    let canonical_base = canonicalize(base_dir);

    if !canonical_path.starts_with(&format!("{}/", canonical_base)) {
        return Err(Error::scaffold_path_escape(path, base_dir));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_passes_plain_path_through() {
        assert_eq!(canonicalize("/var/www/themes/foo"), "/var/www/themes/foo");
    }

    #[test]
    fn canonicalize_resolves_dot_segments() {
        assert_eq!(canonicalize("/a/./b/./c"), "/a/b/c");
    }

    #[test]
    fn canonicalize_resolves_dotdot_segments() {
        assert_eq!(canonicalize("/a/b/../c"), "/a/c");
    }

    #[test]
    fn canonicalize_never_pops_past_root() {
        assert_eq!(canonicalize("/../../a"), "a");
    }

    #[test]
    fn canonicalize_normalizes_backslashes() {
        assert_eq!(canonicalize("C:\\themes\\foo"), "C:/themes/foo");
    }

    #[test]
    fn containment_accepts_direct_child() {
        assert!(check_containment("/themes/sample-theme", "/themes").is_ok());
    }

    #[test]
    fn containment_rejects_traversal() {
        let err = check_containment("/themes/../evil", "/themes").unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.path_escape");
    }

    #[test]
    fn containment_rejects_nested_path() {
        // Two levels down is not a direct child.
        assert!(check_containment("/themes/a/b", "/themes").is_err());
    }

    #[test]
    fn containment_rejects_sibling_directory() {
        assert!(check_containment("/plugins/foo", "/themes").is_err());
    }

    #[test]
    fn containment_error_names_both_paths() {
        let err = check_containment("/themes/../evil", "/themes").unwrap_err();
        assert_eq!(err.details["targetDir"], "/themes/../evil");
        assert_eq!(err.details["allowedDir"], "/themes");
    }

    #[test]
    fn within_accepts_nested_descendants() {
        assert!(check_within("/themes/sample/inc/customizer.php", "/themes/sample").is_ok());
    }

    #[test]
    fn within_rejects_climbing_targets() {
        let err = check_within("/themes/sample/../../etc/passwd", "/themes/sample").unwrap_err();
        assert_eq!(err.code.as_str(), "scaffold.path_escape");
    }

    #[test]
    fn within_rejects_prefix_sibling() {
        // `/themes/sample-two` shares a string prefix but is not inside
        // `/themes/sample`.
        assert!(check_within("/themes/sample-two/style.css", "/themes/sample").is_err());
    }

    #[test]
    fn containment_is_idempotent() {
        let first = check_containment("/themes/sample", "/themes").is_ok();
        let second = check_containment("/themes/sample", "/themes").is_ok();
        assert_eq!(first, second);

        let first = check_containment("/themes/../evil", "/themes").is_err();
        let second = check_containment("/themes/../evil", "/themes").is_err();
        assert_eq!(first, second);
    }
}
