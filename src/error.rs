use thiserror::Error;

/// Errors raised by the shell around the drawing core
///
/// Store and repaint operations never fail; these cover surface allocation,
/// export and the platform integrations.
#[derive(Error, Debug)]
pub enum DrawingError {
    #[error("Cannot allocate a {width}x{height} drawing surface")]
    InvalidSurfaceSize { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load font: {0}")]
    Font(String),

    #[error("Fullscreen unavailable: {0}")]
    Fullscreen(String),

    #[error("Export failed: {0}")]
    Export(String),
}

pub type DrawingResult<T> = Result<T, DrawingError>;
