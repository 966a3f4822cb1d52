use thiserror::Error;

/// Result type alias for interpretation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that halt an interpretation run
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation {index}: pop would remove the base coordinate system")]
    StackUnderflow { index: usize },

    #[error("operation {index}: undefined constants `{name}`")]
    UndefinedConstants { index: usize, name: String },

    #[error("operation {index}: {source}")]
    Render {
        index: usize,
        #[source]
        source: RenderError,
    },
}

/// Failures reported by rasterizers and outputs
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save needs a filename")]
    EmptyFilename,

    #[error("screen of {width}x{height} does not fit an image")]
    InvalidDimensions { width: usize, height: usize },
}
