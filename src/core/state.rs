//! State and event identifiers.
//!
//! States and events are opaque string identifiers compared by value.
//! Both are thin newtypes over `String` so that a state name can never be
//! passed where an event name is expected, while still serializing as a
//! plain JSON string and supporting lookups by `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the owned name.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier! {
    /// Name of a declared state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::core::StateId;
    ///
    /// let busy = StateId::from("busy");
    /// assert_eq!(busy, "busy");
    /// assert_eq!(busy.to_string(), "busy");
    /// ```
    StateId
}

identifier! {
    /// Name of an event that drives a transition out of a state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::core::EventId;
    ///
    /// let study = EventId::new("study");
    /// assert_eq!(study.as_str(), "study");
    /// ```
    EventId
}
