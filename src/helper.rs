//! Platform-bound entry points
//!
//! [`PathHelper`] fixes a [`Platform`] once at the composition root. The free
//! functions apply the platform this crate was compiled for.

use crate::error::Result;
use crate::platform::Platform;
use crate::{normalize, parent, rooted};

/// Path string operations bound to a single platform mode
///
/// # Examples
/// ```
/// use path_helper::PathHelper;
///
/// let windows = PathHelper::windows();
/// assert_eq!(windows.dirname("C:\\hello"), "C:\\");
/// assert_eq!(windows.ensure_rooted("C:", "hello").unwrap(), "C:hello");
///
/// let posix = PathHelper::posix();
/// assert_eq!(posix.normalize_separators("/a//b"), "/a/b");
/// assert!(posix.is_rooted("/x").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathHelper {
    platform: Platform,
}

impl PathHelper {
    pub const fn new(platform: Platform) -> Self {
        PathHelper { platform }
    }

    pub const fn posix() -> Self {
        Self::new(Platform::Posix)
    }

    pub const fn windows() -> Self {
        Self::new(Platform::Windows)
    }

    /// Helper for the platform this crate was compiled for
    pub const fn native() -> Self {
        Self::new(Platform::current())
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Parent directory of `p`
    ///
    /// Roots are their own parent: `/`, `C:\`, `\\server` and
    /// `\\server\share` are returned as given (after trimming). A path
    /// without any directory component yields `.`.
    pub fn dirname(&self, p: &str) -> String {
        parent::dirname(self.platform, p)
    }

    /// Prefix `p` with `root` unless `p` is already rooted
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`](crate::PathError::InvalidArgument)
    /// if `root` or `p` is empty.
    pub fn ensure_rooted(&self, root: &str, p: &str) -> Result<String> {
        rooted::ensure_rooted(self.platform, root, p)
    }

    /// Whether `p` is absolute under this platform's rules
    ///
    /// # Errors
    /// Returns [`PathError::InvalidArgument`](crate::PathError::InvalidArgument)
    /// if `p` is empty.
    pub fn is_rooted(&self, p: &str) -> Result<bool> {
        rooted::is_rooted(self.platform, p)
    }

    /// Canonicalize separator direction and collapse redundant separators
    ///
    /// Accepts `None` as an empty path.
    ///
    /// ```
    /// use path_helper::PathHelper;
    ///
    /// assert_eq!(PathHelper::windows().normalize_separators("//server//share"), "\\\\server\\share");
    /// assert_eq!(PathHelper::windows().normalize_separators(None), "");
    /// ```
    pub fn normalize_separators<'a>(&self, p: impl Into<Option<&'a str>>) -> String {
        normalize::normalize_separators(self.platform, p.into())
    }

    /// Normalize, then drop one trailing separator unless `p` is a root
    pub fn safe_trim_trailing_separator(&self, p: &str) -> String {
        normalize::safe_trim_trailing_separator(self.platform, p)
    }
}

impl From<Platform> for PathHelper {
    fn from(platform: Platform) -> Self {
        PathHelper::new(platform)
    }
}

/// Parent directory of `p` on the native platform
pub fn dirname(p: &str) -> String {
    PathHelper::native().dirname(p)
}

/// Prefix `p` with `root` on the native platform unless `p` is rooted
pub fn ensure_rooted(root: &str, p: &str) -> Result<String> {
    PathHelper::native().ensure_rooted(root, p)
}

/// Whether `p` is rooted on the native platform
pub fn is_rooted(p: &str) -> Result<bool> {
    PathHelper::native().is_rooted(p)
}

/// Normalize separators on the native platform
pub fn normalize_separators<'a>(p: impl Into<Option<&'a str>>) -> String {
    PathHelper::native().normalize_separators(p)
}

/// Trim a redundant trailing separator on the native platform
pub fn safe_trim_trailing_separator(p: &str) -> String {
    PathHelper::native().safe_trim_trailing_separator(p)
}
