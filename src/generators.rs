//! Property test generators for path helpers
//!
//! Generators lean heavily on separators so that runs, UNC prefixes and drive
//! roots show up often.

use crate::platform::Platform;
use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Either platform mode
    pub fn platform() -> impl Strategy<Value = Platform> {
        prop_oneof![Just(Platform::Posix), Just(Platform::Windows)]
    }

    /// Path segments (no separators)
    pub fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,12}"
    }

    /// Separator runs of either direction
    pub fn separator_run() -> impl Strategy<Value = String> {
        "[/\\\\]{1,3}"
    }

    /// Relative paths joined by separator runs
    pub fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(
            (Self::segment(), Self::separator_run()),
            1..=4,
        )
        .prop_map(|parts| {
            let mut path = String::new();
            for (i, (segment, separators)) in parts.into_iter().enumerate() {
                if i > 0 {
                    path.push_str(&separators);
                }
                path.push_str(&segment);
            }
            path
        })
    }

    /// Drive letter paths: bare, drive-relative and drive-rooted
    pub fn drive_path() -> impl Strategy<Value = String> {
        (
            "[a-zA-Z]",
            prop_oneof![Just(""), Just("\\"), Just("/")],
            prop::option::of(Self::relative_path()),
        )
            .prop_map(|(letter, separator, rest)| {
                format!("{}:{}{}", letter, separator, rest.unwrap_or_default())
            })
    }

    /// UNC-style paths with two to four leading separators
    pub fn unc_path() -> impl Strategy<Value = String> {
        ("[/\\\\]{2,4}", Self::relative_path(), Self::separator_run())
            .prop_map(|(prefix, rest, trailing)| format!("{}{}{}", prefix, rest, trailing))
    }

    /// Paths rooted at a leading separator
    pub fn separator_rooted_path() -> impl Strategy<Value = String> {
        (Self::separator_run(), Self::relative_path())
            .prop_map(|(root, rest)| format!("{}{}", root, rest))
    }

    /// Short arbitrary strings over a separator-heavy alphabet
    pub fn noisy_path() -> impl Strategy<Value = String> {
        "[a-c:/\\\\]{0,12}"
    }

    /// All kinds of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::relative_path(),
            2 => Self::separator_rooted_path(),
            2 => Self::drive_path(),
            2 => Self::unc_path(),
            2 => Self::noisy_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_have_no_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(!segment.contains('\\'));
        }

        #[test]
        fn unc_paths_start_with_two_separators(path in PathGenerators::unc_path()) {
            let leading = path.chars().take_while(|c| *c == '/' || *c == '\\').count();
            prop_assert!(leading >= 2);
        }

        #[test]
        fn drive_paths_have_drive_prefix(path in PathGenerators::drive_path()) {
            let bytes = path.as_bytes();
            prop_assert!(bytes[0].is_ascii_alphabetic());
            prop_assert_eq!(bytes[1], b':');
        }

        #[test]
        fn generators_dont_panic(_any_path in PathGenerators::any_path()) {
            // Exercises every branch of the combined strategy
        }
    }
}
