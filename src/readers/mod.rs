pub mod data_files;
pub mod observation_reader;
pub mod station_reader;

pub use data_files::DataFileFinder;
pub use observation_reader::ObservationReader;
pub use station_reader::StationReader;
