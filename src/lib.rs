pub mod contours;
pub mod display;
pub mod error;
pub mod extract;
pub mod input;
pub mod pipeline;
pub mod preprocess;

pub use error::{Error, Result};
pub use input::{InputSource, Sample};
pub use pipeline::{run, PipelineConfig};
