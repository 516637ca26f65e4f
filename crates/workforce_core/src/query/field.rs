//! Typed column values and their comparison rules.

use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Column value exposed to the query pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Compared numerically.
    Number(f64),
    /// Compared chronologically.
    Timestamp(DateTime<Utc>),
    /// Compared as case-sensitive strings; the only kind matched by search.
    Text(Cow<'a, str>),
}

impl FieldValue<'_> {
    /// Parses an RFC 3339 string into a timestamp value.
    pub fn timestamp_from_str(raw: &str) -> Option<FieldValue<'static>> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|parsed| FieldValue::Timestamp(parsed.with_timezone(&Utc)))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Type-aware ordering.
    ///
    /// Mixed kinds order by kind: number < timestamp < text.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (Self::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (Self::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            (Self::Text(a), FieldValue::Text(b)) => a.as_ref().cmp(b.as_ref()),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Exact match against a category value as it appears in a selector.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            Self::Text(text) => text.as_ref() == expected,
            Self::Number(value) => expected
                .trim()
                .parse::<f64>()
                .map_or(false, |parsed| parsed == *value),
            Self::Timestamp(value) => FieldValue::timestamp_from_str(expected)
                .map_or(false, |parsed| parsed == FieldValue::Timestamp(*value)),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Timestamp(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

/// Record that can be shown in a queryable table.
pub trait Tabular {
    /// Column identifier, usually a fieldless enum.
    type Column: Copy + Eq + Debug;

    fn value(&self, column: Self::Column) -> FieldValue<'_>;
}

impl<T: Tabular> Tabular for &T {
    type Column = T::Column;

    fn value(&self, column: Self::Column) -> FieldValue<'_> {
        (**self).value(column)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldValue;
    use std::borrow::Cow;
    use std::cmp::Ordering;

    #[test]
    fn timestamps_compare_chronologically_not_lexically() {
        // Raw strings sort the other way round.
        let earlier = FieldValue::timestamp_from_str("2024-10-01T01:00:00+02:00").unwrap();
        let later = FieldValue::timestamp_from_str("2024-09-30T23:30:00Z").unwrap();
        assert_eq!(earlier.compare(&later), Ordering::Less);
    }

    #[test]
    fn text_comparison_is_case_sensitive() {
        let upper = FieldValue::Text(Cow::Borrowed("Zed"));
        let lower = FieldValue::Text(Cow::Borrowed("alpha"));
        assert_eq!(upper.compare(&lower), Ordering::Less);
    }

    #[test]
    fn numbers_compare_numerically() {
        let small = FieldValue::Number(9_000.0);
        let large = FieldValue::Number(10_000.0);
        assert_eq!(small.compare(&large), Ordering::Less);
    }

    #[test]
    fn matches_parses_numeric_selector_values() {
        assert!(FieldValue::Number(3.0).matches("3"));
        assert!(!FieldValue::Number(3.0).matches("three"));
        assert!(FieldValue::Text(Cow::Borrowed("Sales")).matches("Sales"));
    }
}
