//! Newtype IDs for type-safe identifiers.
//!
//! All identifiers are issued by the remote service and are opaque to the
//! client. Wrapping them keeps a `ShipToId` from being passed where a
//! `FarmerId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// An opaque server-issued identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First `len` characters followed by `...`, for narrow tables.
            pub fn short(&self, len: usize) -> String {
                if self.0.chars().count() <= len {
                    return self.0.clone();
                }
                let head: String = self.0.chars().take(len).collect();
                format!("{}...", head)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(FarmerId);
define_id!(ShipToId);
define_id!(OrderId);
