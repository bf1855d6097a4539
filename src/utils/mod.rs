pub mod color;
pub mod constants;
pub mod coordinates;
pub mod encoding;
pub mod progress;

pub use color::value_to_color;
pub use constants::*;
pub use coordinates::{parse_coordinate, parse_coordinate_or_default};
pub use encoding::read_text_file;
pub use progress::ProgressReporter;
