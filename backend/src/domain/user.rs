//! User record served by the search endpoint.
//!
//! Records are created once when the store loads and are never mutated. The
//! serialised form is the wire shape: `{id, name, age, about, gender}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gender as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `male`
    Male,
    /// `female`
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// Immutable user record. Identity is [`User::id`].
///
/// # Examples
/// ```
/// use user_search::domain::{Gender, User};
///
/// let user = User::from_parts(0, "Boyd", "Wolf", 22, "Nulla cillum enim", Gender::Male);
/// assert_eq!(user.name(), "Boyd Wolf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 0)]
    id: i64,
    #[schema(example = "Boyd Wolf")]
    name: String,
    #[schema(example = 22)]
    age: u32,
    about: String,
    gender: Gender,
}

impl User {
    /// Build a record from an already-joined full name.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: u32,
        about: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            about: about.into(),
            gender,
        }
    }

    /// Build a record from separate first and last names.
    ///
    /// The full name is `first + " " + last`, which is also the text the
    /// free-text filter and the name sort operate on.
    #[must_use]
    pub fn from_parts(
        id: i64,
        first_name: &str,
        last_name: &str,
        age: u32,
        about: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self::new(id, format!("{first_name} {last_name}"), age, about, gender)
    }

    /// Stable record identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Full name, `first last`.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub const fn about(&self) -> &str {
        self.about.as_str()
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Case-sensitive substring match against the full name or `about`.
    /// An empty needle matches every record.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.contains(needle) || self.about.contains(needle)
    }
}
