//! The closed set of subjects a message can be routed to.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// A classifiable subject.
///
/// `Default` is the catch-all: the resolver falls back to it and the
/// knowledge base always carries an entry for it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Topic {
    Timetable,
    Exam,
    Attendance,
    Placement,
    Default,
}

impl Topic {
    /// Dense index used for table storage (`0..Topic::COUNT`).
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_indices_are_dense() {
        let indices: Vec<usize> = Topic::iter().map(Topic::index).collect();
        assert_eq!(indices, (0..Topic::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Topic::from_str("Placement").unwrap(), Topic::Placement);
        assert_eq!(Topic::from_str("exam").unwrap(), Topic::Exam);
        assert!(Topic::from_str("library").is_err());
    }
}
