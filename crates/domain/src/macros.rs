//! Macro for implementing Display and FromStr for outcome enums
//!
//! Used for enums that cross logging or serialization boundaries as plain
//! lowercase labels.
//!
//! # Example
//!
//! ```rust
//! use swipedeck_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Side {
//!     Left,
//!     Right,
//! }
//!
//! impl_domain_status_conversions!(Side {
//!     Left => "left",
//!     Right => "right",
//! });
//!
//! assert_eq!(Side::Left.to_string(), "left");
//! assert_eq!("RIGHT".parse::<Side>(), Ok(Side::Right));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// Display writes the mapped label; FromStr matches it case-insensitively
/// and reports the enum name on failure.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
