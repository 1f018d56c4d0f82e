//! Platform mode selecting POSIX or Windows path semantics

use crate::error::PathError;
use std::fmt;
use std::str::FromStr;

/// Path convention applied by every operation in this crate
///
/// The native value is fixed at compile time, but any mode can be selected
/// explicitly so both conventions can be exercised in one process.
///
/// # Examples
/// ```
/// use path_helper::Platform;
///
/// assert_eq!(Platform::Posix.separator(), '/');
/// assert_eq!(Platform::Windows.separator(), '\\');
/// assert_eq!("win32".parse::<Platform>().unwrap(), Platform::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Forward-slash paths rooted at `/`
    Posix,
    /// Backslash paths with drive letters and UNC shares
    Windows,
}

impl Platform {
    /// The platform this crate was compiled for
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// The canonical separator character
    pub const fn separator(self) -> char {
        match self {
            Platform::Posix => '/',
            Platform::Windows => '\\',
        }
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => write!(f, "posix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" => Ok(Platform::Posix),
            "windows" | "win32" => Ok(Platform::Windows),
            _ => Err(PathError::UnknownPlatform {
                name: s.to_string(),
            }),
        }
    }
}
