//! Caller-supplied string identifiers.
//!
//! Every entity kind is keyed by an opaque string chosen by the caller. Each kind
//! gets its own newtype (declared with [`string_id!`](crate::string_id)) so a vendor
//! id can never be passed where a product id is expected.

use crate::error::DomainError;

/// Validate the raw text of an identifier.
///
/// Identifiers are required and must contain at least one non-whitespace character.
/// The value is kept verbatim (no trimming); `" a"` and `"a"` are different ids.
pub fn validate_id(kind: &'static str, raw: &str) -> Result<(), DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::invalid_id(format!("{kind}: id cannot be empty")));
    }
    Ok(())
}

/// Declare a string-backed identifier newtype.
///
/// The generated type serializes as a bare JSON string and rejects empty input on
/// both construction and deserialization.
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $t(String);

        impl $t {
            /// Build an identifier, rejecting empty or whitespace-only input.
            pub fn new(raw: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let raw = raw.into();
                $crate::id::validate_id($name, &raw)?;
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
