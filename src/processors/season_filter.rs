use crate::models::HourlyTimestamp;
use crate::utils::constants::WINTER_MONTHS;
use std::collections::BTreeSet;

/// Selects observations whose month falls in a fixed set of calendar months
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonFilter {
    months: BTreeSet<u32>,
}

impl SeasonFilter {
    pub fn new(months: &[u32]) -> Self {
        Self {
            months: months.iter().copied().collect(),
        }
    }

    /// November through February
    pub fn winter() -> Self {
        Self::new(&WINTER_MONTHS)
    }

    pub fn contains(&self, timestamp: &HourlyTimestamp) -> bool {
        self.months.contains(&timestamp.month())
    }

    pub fn months(&self) -> impl Iterator<Item = u32> + '_ {
        self.months.iter().copied()
    }
}

impl Default for SeasonFilter {
    fn default() -> Self {
        Self::winter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(date: &str, hour: &str) -> HourlyTimestamp {
        HourlyTimestamp::parse(date, hour).unwrap()
    }

    #[test]
    fn test_winter_months() {
        let filter = SeasonFilter::winter();

        assert!(filter.contains(&ts("20221101", "0")));
        assert!(filter.contains(&ts("20221231", "23")));
        assert!(filter.contains(&ts("20230115", "12")));
        assert!(filter.contains(&ts("20240229", "5")));

        assert!(!filter.contains(&ts("20230301", "0")));
        assert!(!filter.contains(&ts("20230731", "12")));
        assert!(!filter.contains(&ts("20231031", "23")));
    }

    #[test]
    fn test_custom_months() {
        let filter = SeasonFilter::new(&[6, 7, 8]);
        assert!(filter.contains(&ts("20230715", "0")));
        assert!(!filter.contains(&ts("20230115", "0")));
        assert_eq!(filter.months().collect::<Vec<_>>(), vec![6, 7, 8]);
    }
}
