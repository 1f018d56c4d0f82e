//! # path-helper
//!
//! Platform-aware normalization and classification of path strings.
//!
//! This crate reconciles POSIX forward-slash paths with Windows backslash,
//! drive-letter and UNC paths behind a handful of pure string functions. It
//! never touches the filesystem: outputs depend only on the input strings and
//! the selected [`Platform`].
//!
//! ## Features
//!
//! - **Separator Normalization**: Canonical slash direction, collapsed runs, UNC prefix kept
//! - **Trailing Separator Trimming**: Never shortens `/`, `\` or a drive root like `C:\`
//! - **Rootedness**: Drive-letter, drive-relative and UNC aware
//! - **Root Ensuring**: Prefix relative paths, including drive-relative `C:` roots
//! - **Dirname**: Parent extraction that treats UNC roots as their own parent
//!
//! ## Examples
//!
//! ### Explicit Platform
//!
//! ```rust
//! use path_helper::PathHelper;
//!
//! let windows = PathHelper::windows();
//! assert_eq!(windows.normalize_separators("C:/a//b"), "C:\\a\\b");
//! assert_eq!(windows.dirname("\\\\server\\share\\dir"), "\\\\server\\share");
//! assert_eq!(windows.safe_trim_trailing_separator("C:\\"), "C:\\");
//!
//! let posix = PathHelper::posix();
//! assert_eq!(posix.dirname("/hello"), "/");
//! assert_eq!(posix.ensure_rooted("/root", "hello").unwrap(), "/root/hello");
//! ```
//!
//! ### Native Platform
//!
//! ```rust
//! use path_helper::{is_rooted, PathError};
//!
//! // Empty arguments are rejected
//! assert!(matches!(is_rooted(""), Err(PathError::InvalidArgument { .. })));
//! ```
//!
//! ### Configured Platform
//!
//! ```rust
//! use path_helper::{PathHelper, Platform};
//!
//! let platform: Platform = "windows".parse().unwrap();
//! let helper = PathHelper::new(platform);
//! assert!(helper.is_rooted("C:hello").unwrap());
//! ```

mod error;
mod helper;
mod normalize;
mod parent;
mod platform;
mod rooted;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use error::{PathError, Result};
pub use helper::{
    dirname, ensure_rooted, is_rooted, normalize_separators, safe_trim_trailing_separator,
    PathHelper,
};
pub use platform::Platform;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
