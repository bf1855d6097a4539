use crate::error::Result;
use crate::models::RankedEntry;
use crate::utils::constants::{CITY_HEADER, RANK_HEADER};
use crate::writers::labels::OutputLabels;
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Writes the city ranking as a CSV table: rank, city, value rounded to 2 decimals
pub struct RankingWriter {
    value_header: String,
}

impl RankingWriter {
    pub fn new() -> Self {
        Self {
            value_header: OutputLabels::default().value_label(),
        }
    }

    /// Name the value column after the run's months and pollutant
    pub fn with_labels(mut self, labels: &OutputLabels) -> Self {
        self.value_header = labels.value_label();
        self
    }

    /// Write the ranking to `path`, creating parent directories as needed
    pub fn write_ranking(&self, ranking: &[RankedEntry], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_to(ranking, file)?;
        debug!(path = %path.display(), rows = ranking.len(), "Wrote ranking");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, ranking: &[RankedEntry], out: W) -> Result<()> {
        let mut writer = Writer::from_writer(out);
        writer.write_record([RANK_HEADER, CITY_HEADER, self.value_header.as_str()])?;

        for entry in ranking {
            writer.write_record([
                entry.rank.to_string(),
                entry.city.clone(),
                format!("{:.2}", entry.value),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for RankingWriter {
    fn default() -> Self {
        Self::new()
    }
}
