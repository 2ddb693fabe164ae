use thiserror::Error;

use crate::messages;

/// Input rejected before it is accepted into a session.
///
/// The `Display` text is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::NOT_A_PDF)]
    NotPdf { media_type: String },

    #[error("O arquivo é muito grande. Tamanho máximo: {}MB.", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("input does not start with a %PDF- signature")]
    MissingSignature,

    #[error("failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("renderer could not open the document: {0}")]
    Open(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("rasterizer unavailable: {0}")]
    Unavailable(String),

    #[error("failed to rasterize page {page}: {message}")]
    Page { page: usize, message: String },

    #[error("failed to encode page {page} as JPEG: {source}")]
    Encode {
        page: usize,
        #[source]
        source: image::ImageError,
    },
}

/// Anything that aborts a pipeline run.
#[derive(Error, Debug)]
pub enum CompressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write PDF: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors surfaced to the user by [`crate::Session`].
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{}", messages::NO_FILE)]
    NoSource,

    /// Decode and render failures are deliberately indistinguishable here.
    #[error("{}", messages::COMPRESSION_FAILED)]
    CompressionFailed(#[source] CompressError),
}
