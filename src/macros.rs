//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for unit enums
///
/// Parsing is case-insensitive; unknown strings are handed to the given
/// error constructor.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::PickerError;
///
/// enum_display_fromstr!(
///     GraphMode,
///     PickerError::InvalidGraphMode,
///     {
///         Sampled => "sampled",
///         Bucketed => "bucketed",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_ctor:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::PickerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok($enum_name::$variant),)+
                    _ => Err($error_ctor(s.to_string())),
                }
            }
        }
    };
}
