//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Macro to generate newtypes for trimmed, non-empty strings.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(BookId, "Identifier of a book in the catalog.", "book id");
id_newtype!(ReadingId, "Identifier of a reading log entry.", "reading id");
id_newtype!(BookmarkId, "Identifier of a saved bookmark.", "bookmark id");
id_newtype!(TagId, "Identifier of a bookmark tag.", "tag id");

non_empty_string_newtype!(BookTitle, "Title of a book.", "book title");
non_empty_string_newtype!(BookAuthor, "Author of a book.", "book author");
non_empty_string_newtype!(BookmarkTitle, "Title of a bookmark.", "bookmark title");
// Stored as given apart from surrounding whitespace; deliberately not
// validated as a well-formed URL.
non_empty_string_newtype!(BookmarkUrl, "Link target of a bookmark.", "bookmark url");
non_empty_string_newtype!(TagName, "Name of a bookmark tag.", "tag name");
non_empty_string_newtype!(UserId, "External identifier of a reader.", "user id");
