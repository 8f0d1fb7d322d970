//! Macro for implementing Display and FromStr for label enums
//!
//! Event kinds are shown on dashboards and parsed back from configuration
//! with the same label, so both conversions come from a single mapping.
//! Parsing is ASCII case-insensitive; display always emits the mapped label.
//!
//! # Example
//!
//! ```rust
//! use querytap_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Primary,
//!     Replica,
//! }
//!
//! impl_label_conversions!(Channel {
//!     Primary => "PRIMARY",
//!     Replica => "REPLICA",
//! });
//!
//! assert_eq!(Channel::Replica.to_string(), "REPLICA");
//! assert_eq!("primary".parse::<Channel>(), Ok(Channel::Primary));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their labels
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable label for this variant.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
