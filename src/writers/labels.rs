use crate::utils::constants::{DEFAULT_POLLUTANT, WINTER_MONTHS};

/// Wording of the written outputs for one run's pollutant and month set
#[derive(Debug, Clone, PartialEq)]
pub struct OutputLabels {
    pollutant: String,
    months: String,
    winter: bool,
}

impl OutputLabels {
    pub fn new(pollutant: &str, months: &[u32]) -> Self {
        let mut sorted = months.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let mut winter = WINTER_MONTHS.to_vec();
        winter.sort_unstable();

        Self {
            pollutant: pollutant.to_string(),
            months: months
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join("/"),
            winter: sorted == winter,
        }
    }

    pub fn pollutant(&self) -> &str {
        &self.pollutant
    }

    /// "冬季" for the winter months, otherwise the month list, e.g. "6/7/8月"
    pub fn period(&self) -> String {
        if self.winter {
            "冬季".to_string()
        } else {
            format!("{}月", self.months)
        }
    }

    /// Ranking value column and map popup label, e.g. "冬季平均AQI"
    pub fn value_label(&self) -> String {
        format!("{}平均{}", self.period(), self.pollutant)
    }

    pub fn title(&self) -> String {
        format!("{}空气质量排行榜", self.period())
    }

    pub fn heading(&self) -> String {
        if self.winter {
            format!("冬季（{} 月）{} 最佳城市", self.months, self.pollutant)
        } else {
            format!("{} 月 {} 最佳城市", self.months, self.pollutant)
        }
    }

    pub fn legend(&self) -> String {
        format!(
            "颜色越绿表示 {0} 越低（空气越好），越红表示 {0} 越高。",
            self.pollutant
        )
    }
}

impl Default for OutputLabels {
    fn default() -> Self {
        Self::new(DEFAULT_POLLUTANT, &WINTER_MONTHS)
    }
}
