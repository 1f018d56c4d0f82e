//! Separator normalization and trailing-separator trimming
//!
//! Both operations are pure string transforms. Windows mode rewrites `/` to
//! `\` and keeps the two-character UNC marker intact while collapsing
//! redundant separators.

use crate::platform::Platform;

/// Normalize separators for the given platform
///
/// - POSIX: collapses runs of `/` into one; backslashes are left alone
/// - Windows: converts `/` to `\`, collapses runs of `\`, and keeps a
///   leading `\\` when the path is a UNC path
///
/// An absent path is treated as empty.
pub(crate) fn normalize_separators(platform: Platform, p: Option<&str>) -> String {
    let p = p.unwrap_or_default();

    match platform {
        Platform::Posix => collapse_runs(p, '/'),
        Platform::Windows => {
            let p = p.replace('/', "\\");
            let collapsed = collapse_runs(&p, '\\');
            // The collapse leaves a single leading backslash on a UNC path
            if has_unc_prefix(&p) {
                format!("\\{}", collapsed)
            } else {
                collapsed
            }
        }
    }
}

/// Normalize separators, then drop one trailing separator unless the path
/// is a root (`/`, `\`, or a drive root such as `C:\`)
pub(crate) fn safe_trim_trailing_separator(platform: Platform, p: &str) -> String {
    if p.is_empty() {
        return String::new();
    }

    let mut normalized = normalize_separators(platform, Some(p));
    let separator = platform.separator();

    if !normalized.ends_with(separator) {
        return normalized;
    }

    if normalized.len() == separator.len_utf8() {
        return normalized;
    }

    if platform.is_windows() && is_drive_root(&normalized) {
        return normalized;
    }

    normalized.pop();
    normalized
}

/// Collapse every run of `separator` into a single occurrence
fn collapse_runs(p: &str, separator: char) -> String {
    let mut out = String::with_capacity(p.len());
    let mut previous_was_separator = false;

    for c in p.chars() {
        let is_separator = c == separator;
        if !(is_separator && previous_was_separator) {
            out.push(c);
        }
        previous_was_separator = is_separator;
    }

    out
}

/// Two or more leading backslashes followed by a non-backslash character
fn has_unc_prefix(p: &str) -> bool {
    let rest = p.trim_start_matches('\\');
    p.len() - rest.len() >= 2 && !rest.is_empty()
}

/// A single ASCII drive letter, a colon, then anything (`C:`, `c:\x`)
pub(crate) fn has_drive_prefix(p: &str) -> bool {
    let bytes = p.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Exactly a bare drive reference such as `C:`
pub(crate) fn is_bare_drive(p: &str) -> bool {
    p.len() == 2 && has_drive_prefix(p)
}

/// Exactly a drive root such as `C:\`
fn is_drive_root(p: &str) -> bool {
    p.len() == 3 && has_drive_prefix(p) && p.ends_with('\\')
}
