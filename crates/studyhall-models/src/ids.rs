//! Strongly-typed ID newtypes for domain entities.
//!
//! Newtype wrappers around `Uuid` for each entity type, preventing accidental
//! misuse of IDs (e.g., passing a `CourseId` where a `ContentId` is expected).
//!
//! # Example
//!
//! ```ignore
//! use studyhall_models::ids::{CourseId, ContentId};
//!
//! fn delete_course(id: CourseId) { /* ... */ }
//!
//! let course_id = CourseId::new();
//! delete_course(course_id);       // OK
//! // delete_course(ContentId::new()); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to define a strongly-typed ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for test fixtures).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Check if this is a nil ID.
            #[inline]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        // Serde Deserialize - manual impl for transparent UUID deserialization
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Course entities.
    CourseId
);

define_id!(
    /// Strongly-typed ID for platform administrator accounts.
    AdminId
);

define_id!(
    /// Strongly-typed ID for Lecture entities (contents are scoped to one).
    LectureId
);

define_id!(
    /// Strongly-typed ID for LectureContent entities.
    ContentId
);

define_id!(
    /// Strongly-typed ID for QuestionSet entities.
    QuestionSetId
);

define_id!(
    /// Strongly-typed ID for community Post entities.
    PostId
);

define_id!(
    /// Strongly-typed ID for User entities (session capability).
    UserId
);
