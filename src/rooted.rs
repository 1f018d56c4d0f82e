//! Rootedness classification and root prefixing

use crate::error::{PathError, Result};
use crate::normalize::{has_drive_prefix, is_bare_drive, normalize_separators};
use crate::platform::Platform;

/// Whether `p` denotes an absolute location on `platform`
///
/// Windows treats a leading `\` (current-drive root or UNC) and any drive
/// prefix (`C:`, `C:hello`, `C:\hello`) as rooted.
pub(crate) fn is_rooted(platform: Platform, p: &str) -> Result<bool> {
    if p.is_empty() {
        return Err(PathError::empty("is_rooted", "p"));
    }

    let p = normalize_separators(platform, Some(p));
    let rooted = match platform {
        Platform::Posix => p.starts_with('/'),
        Platform::Windows => p.starts_with('\\') || has_drive_prefix(&p),
    };

    Ok(rooted)
}

/// Return `p` unchanged when rooted, otherwise prefix it with `root`
///
/// A bare Windows drive root (`C:`) is concatenated directly so the result
/// stays drive-relative. The output is not normalized.
pub(crate) fn ensure_rooted(platform: Platform, root: &str, p: &str) -> Result<String> {
    if root.is_empty() {
        return Err(PathError::empty("ensure_rooted", "root"));
    }
    if p.is_empty() {
        return Err(PathError::empty("ensure_rooted", "p"));
    }

    if is_rooted(platform, p)? {
        return Ok(p.to_string());
    }

    if platform.is_windows() && is_bare_drive(root) {
        log::trace!("Joining drive-relative path {p:?} onto {root:?}");
        return Ok(format!("{}{}", root, p));
    }

    let has_separator = root.ends_with('/') || (platform.is_windows() && root.ends_with('\\'));
    if has_separator {
        Ok(format!("{}{}", root, p))
    } else {
        Ok(format!("{}{}{}", root, platform.separator(), p))
    }
}
