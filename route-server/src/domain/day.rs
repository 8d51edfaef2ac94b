//! Operating-day sets.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned for a weekday number outside 1-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid weekday number: {0} (expected 1-7, Monday=1)")]
pub struct InvalidDay(pub u8);

/// The set of weekdays a transport operates on, Monday=1 through
/// Sunday=7.
///
/// Stored as a bitmask, so duplicates and ordering in the input are
/// irrelevant. Serialized as a sorted list of day numbers, matching the
/// wire shape of the transport API.
///
/// # Examples
///
/// ```
/// use route_server::domain::DaySet;
///
/// let weekdays = DaySet::from_days(&[1, 2, 3, 4, 5]).unwrap();
/// assert!(weekdays.contains(3));
/// assert!(!weekdays.contains(6));
///
/// // Out-of-range day numbers are rejected
/// assert!(DaySet::from_days(&[0]).is_err());
/// assert!(DaySet::from_days(&[8]).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// All seven weekdays.
    pub const EVERY_DAY: DaySet = DaySet(0b0111_1111);

    /// The empty set; a transport with no operating days never runs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from a list of weekday numbers.
    ///
    /// Duplicates are collapsed. Returns `InvalidDay` for any number
    /// outside 1-7.
    pub fn from_days(days: &[u8]) -> Result<Self, InvalidDay> {
        let mut set = Self::empty();
        for &day in days {
            set = set.with(day)?;
        }
        Ok(set)
    }

    /// Returns a copy of this set with `day` added.
    pub fn with(self, day: u8) -> Result<Self, InvalidDay> {
        if !(1..=7).contains(&day) {
            return Err(InvalidDay(day));
        }
        Ok(DaySet(self.0 | 1 << (day - 1)))
    }

    /// Whether `day` is in the set.
    ///
    /// Any number outside 1-7 is simply not contained, so callers can
    /// probe with an unvalidated day and get `false` rather than an
    /// error.
    pub fn contains(&self, day: u8) -> bool {
        (1..=7).contains(&day) && self.0 & 1 << (day - 1) != 0
    }

    /// The days in the set, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=7).filter(|&day| self.contains(day))
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.days()).finish()
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.days())
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<u8>::deserialize(deserializer)?;
        Self::from_days(&days).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_days_collapses_duplicates() {
        let set = DaySet::from_days(&[1, 3, 3, 5, 1]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.days().collect::<Vec<_>>(), vec![1, 3, 5]);
    }

    #[test]
    fn contains_in_range() {
        let set = DaySet::from_days(&[2, 4]).unwrap();
        assert!(set.contains(2));
        assert!(set.contains(4));
        assert!(!set.contains(1));
        assert!(!set.contains(7));
    }

    #[test]
    fn contains_out_of_range_is_false() {
        let every_day = DaySet::EVERY_DAY;
        assert!(!every_day.contains(0));
        assert!(!every_day.contains(8));
        assert!(!every_day.contains(255));
    }

    #[test]
    fn out_of_range_days_rejected() {
        assert_eq!(DaySet::from_days(&[0]), Err(InvalidDay(0)));
        assert_eq!(DaySet::from_days(&[1, 8]), Err(InvalidDay(8)));
    }

    #[test]
    fn empty_set() {
        let set = DaySet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        for day in 1..=7 {
            assert!(!set.contains(day));
        }
    }

    #[test]
    fn every_day() {
        assert_eq!(DaySet::EVERY_DAY.len(), 7);
        for day in 1..=7 {
            assert!(DaySet::EVERY_DAY.contains(day));
        }
    }

    #[test]
    fn debug_lists_days() {
        let set = DaySet::from_days(&[5, 1]).unwrap();
        assert_eq!(format!("{:?}", set), "[1, 5]");
    }

    #[test]
    fn serde_roundtrip() {
        let set = DaySet::from_days(&[7, 1, 3]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,3,7]");

        let back: DaySet = serde_json::from_str("[3,1,7,1]").unwrap();
        assert_eq!(back, set);

        assert!(serde_json::from_str::<DaySet>("[0]").is_err());
        assert!(serde_json::from_str::<DaySet>("[9]").is_err());
    }
}
