//! Sort key and sort direction variants.
//!
//! The order field is resolved once while validating a query; sorting then
//! calls the variant's comparator directly instead of re-dispatching on the
//! field name for every comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::User;

/// Record attribute used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderField {
    /// Sort by numeric id.
    Id,
    /// Sort by numeric age.
    Age,
    /// Sort by full name, lexicographically.
    #[default]
    Name,
}

/// Returned when a string names no known order field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order field: {0}")]
pub struct UnknownOrderField(pub String);

impl OrderField {
    /// Canonical lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Age => "age",
            Self::Name => "name",
        }
    }

    /// Ascending comparison of two records on this key.
    #[must_use]
    pub fn compare(self, left: &User, right: &User) -> Ordering {
        match self {
            Self::Id => left.id().cmp(&right.id()),
            Self::Age => left.age().cmp(&right.age()),
            Self::Name => left.name().cmp(right.name()),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = UnknownOrderField;

    /// Case-insensitive; `"Name"`, `"NAME"` and `"name"` are equivalent.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "age" => Ok(Self::Age),
            "name" => Ok(Self::Name),
            _ => Err(UnknownOrderField(raw.to_owned())),
        }
    }
}

/// Sort direction.
///
/// On the wire: `-1` descending, `0` unordered (stored order preserved),
/// `1` ascending. Any other nonzero value decodes as ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
    /// Stored order.
    #[default]
    Unordered,
}

impl OrderDirection {
    /// Decode a wire value.
    #[must_use]
    pub const fn from_wire(value: i64) -> Self {
        match value {
            0 => Self::Unordered,
            -1 => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Encode for the wire.
    #[must_use]
    pub const fn to_wire(self) -> i64 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
            Self::Unordered => 0,
        }
    }

    /// Sort `users` in place on `field`.
    ///
    /// The sort is stable, so records with equal keys keep their relative
    /// order. [`OrderDirection::Unordered`] leaves the slice untouched.
    pub fn sort(self, field: OrderField, users: &mut [User]) {
        match self {
            Self::Unordered => {}
            Self::Ascending => users.sort_by(|a, b| field.compare(a, b)),
            Self::Descending => users.sort_by(|a, b| field.compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use rstest::rstest;

    fn user(id: i64, name: &str, age: u32) -> User {
        User::new(id, name, age, "", Gender::Female)
    }

    #[rstest]
    #[case("id", OrderField::Id)]
    #[case("Id", OrderField::Id)]
    #[case("AGE", OrderField::Age)]
    #[case("Name", OrderField::Name)]
    fn parses_case_insensitively(#[case] raw: &str, #[case] expected: OrderField) {
        assert_eq!(raw.parse::<OrderField>(), Ok(expected));
    }

    #[rstest]
    #[case("picture")]
    #[case("WrongField")]
    #[case("")]
    fn rejects_unknown_fields(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<OrderField>(),
            Err(UnknownOrderField(raw.to_owned()))
        );
    }

    #[rstest]
    #[case(-1, OrderDirection::Descending)]
    #[case(0, OrderDirection::Unordered)]
    #[case(1, OrderDirection::Ascending)]
    #[case(7, OrderDirection::Ascending)]
    #[case(-3, OrderDirection::Ascending)]
    fn decodes_wire_direction(#[case] raw: i64, #[case] expected: OrderDirection) {
        assert_eq!(OrderDirection::from_wire(raw), expected);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut users = vec![user(3, "C", 30), user(1, "A", 20), user(2, "B", 30)];
        OrderDirection::Descending.sort(OrderField::Age, &mut users);
        let ids: Vec<i64> = users.iter().map(User::id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn unordered_keeps_stored_order() {
        let mut users = vec![user(3, "C", 30), user(1, "A", 20)];
        OrderDirection::Unordered.sort(OrderField::Id, &mut users);
        let ids: Vec<i64> = users.iter().map(User::id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn name_sort_compares_full_name() {
        let mut users = vec![user(1, "Boyd Wolf", 1), user(2, "Allison Valdez", 1)];
        OrderDirection::Ascending.sort(OrderField::Name, &mut users);
        assert_eq!(users[0].name(), "Allison Valdez");
    }
}
