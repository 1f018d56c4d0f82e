//! Parent-directory extraction
//!
//! `dirname` trims a redundant trailing separator, then applies the
//! platform's native parent extraction. On Windows a UNC root
//! (`\\server` or `\\server\share`) is its own parent and never carries a
//! trailing separator.

use crate::normalize::safe_trim_trailing_separator;
use crate::platform::Platform;

/// Parent directory of `p` on `platform`
pub(crate) fn dirname(platform: Platform, p: &str) -> String {
    let p = safe_trim_trailing_separator(platform, p);

    if platform.is_windows() && is_unc_root(&p) {
        log::trace!("UNC root {p:?} is its own parent");
        return p;
    }

    let parent = native_dirname(platform, &p);

    if platform.is_windows() && is_unc_root_with_trailing_separator(parent) {
        log::trace!("Trimming trailing separator from UNC parent {parent:?}");
        return safe_trim_trailing_separator(platform, parent);
    }

    parent.to_string()
}

/// Native parent extraction without any UNC post-processing
pub(crate) fn native_dirname(platform: Platform, p: &str) -> &str {
    match platform {
        Platform::Posix => posix_dirname(p),
        Platform::Windows => windows_dirname(p),
    }
}

fn posix_dirname(p: &str) -> &str {
    let bytes = p.as_bytes();
    if bytes.is_empty() {
        return ".";
    }

    let has_root = bytes[0] == b'/';
    let mut end = None;
    let mut matched_separator = true;

    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_separator {
                end = Some(i);
                break;
            }
        } else {
            matched_separator = false;
        }
    }

    match end {
        None if has_root => "/",
        None => ".",
        Some(1) if has_root => "//",
        Some(end) => &p[..end],
    }
}

fn is_windows_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

fn windows_dirname(p: &str) -> &str {
    let bytes = p.as_bytes();
    let len = bytes.len();

    if len == 0 {
        return ".";
    }
    if len == 1 {
        return if is_windows_separator(bytes[0]) { p } else { "." };
    }

    // Index just past the root, and where the parent scan stops
    let mut root_end = None;
    let mut offset = 0;

    if is_windows_separator(bytes[0]) {
        root_end = Some(1);
        offset = 1;

        if is_windows_separator(bytes[1]) {
            // UNC: \\server\share\
            let mut j = 2;
            let mut last = j;
            while j < len && !is_windows_separator(bytes[j]) {
                j += 1;
            }
            if j < len && j != last {
                last = j;
                while j < len && is_windows_separator(bytes[j]) {
                    j += 1;
                }
                if j < len && j != last {
                    last = j;
                    while j < len && !is_windows_separator(bytes[j]) {
                        j += 1;
                    }
                    if j == len {
                        return p;
                    }
                    if j != last {
                        root_end = Some(j + 1);
                        offset = j + 1;
                    }
                }
            }
        }
    } else if bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let end = if len > 2 && is_windows_separator(bytes[2]) {
            3
        } else {
            2
        };
        root_end = Some(end);
        offset = end;
    }

    let mut end = None;
    let mut matched_separator = true;
    for i in (offset..len).rev() {
        if is_windows_separator(bytes[i]) {
            if !matched_separator {
                end = Some(i);
                break;
            }
        } else {
            matched_separator = false;
        }
    }

    match end.or(root_end) {
        Some(end) => &p[..end],
        None => ".",
    }
}

/// Split a `\\server[\share...]` path into its non-empty components
fn unc_components(p: &str) -> Option<Vec<&str>> {
    let rest = p.strip_prefix("\\\\")?;
    let components: Vec<&str> = rest.split('\\').collect();
    if components.iter().any(|c| c.is_empty()) {
        return None;
    }
    Some(components)
}

/// `\\server` or `\\server\share`
fn is_unc_root(p: &str) -> bool {
    unc_components(p).is_some_and(|c| c.len() <= 2)
}

/// `\\server\share\`
fn is_unc_root_with_trailing_separator(p: &str) -> bool {
    p.strip_suffix('\\')
        .and_then(unc_components)
        .is_some_and(|c| c.len() == 2)
}
