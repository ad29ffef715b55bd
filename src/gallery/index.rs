//! Day-key lookup over the dataset.

use std::collections::HashMap;

use crate::dates::DayKey;
use crate::models::FeedRecord;

/// Mapping from calendar day to the record displayed for it.
///
/// Built from records in dataset order; a later record with the same date
/// replaces an earlier one.
#[derive(Debug, Default)]
pub struct DayIndex<'a> {
    by_day: HashMap<DayKey, &'a FeedRecord>,
}

impl<'a> DayIndex<'a> {
    pub fn build(records: &'a [FeedRecord]) -> Self {
        let by_day = records.iter().map(|record| (record.date, record)).collect();
        Self { by_day }
    }

    pub fn get(&self, day: DayKey) -> Option<&'a FeedRecord> {
        self.by_day.get(&day).copied()
    }

    /// Number of distinct days with a record.
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::test_support::record;

    #[test]
    fn test_lookup_by_key() {
        let records = vec![record("2020-01-01", "a"), record("2020-01-03", "c")];
        let index = DayIndex::build(&records);

        let day = DayKey::parse("2020-01-03").unwrap();
        assert_eq!(index.get(day).unwrap().card_title(), "c");
        assert!(index.get(DayKey::parse("2020-01-02").unwrap()).is_none());
    }

    #[test]
    fn test_duplicates_collapse_to_last() {
        let records = vec![
            record("2020-01-01", "first"),
            record("2020-01-01", "second"),
        ];
        let index = DayIndex::build(&records);

        assert_eq!(index.len(), 1);
        let day = DayKey::parse("2020-01-01").unwrap();
        assert_eq!(index.get(day).unwrap().card_title(), "second");
    }
}
