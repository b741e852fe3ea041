use std::path::PathBuf;

use thiserror::Error;

use crate::input::Sample;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read image at {}", path.display())]
    ImageRead { path: PathBuf },

    #[error("could not decode the bundled {0:?} sample")]
    SampleDecode(Sample),

    #[error(transparent)]
    OpenCv(#[from] opencv::Error),
}
