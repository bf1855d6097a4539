pub mod labels;
pub mod map_writer;
pub mod ranking_writer;

pub use labels::OutputLabels;
pub use map_writer::{MapFeature, MapWriter};
pub use ranking_writer::RankingWriter;
