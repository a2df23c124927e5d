use bitveil_dct::DctError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a GIF file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a structurally invalid container header or length field
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Represents a message that does not fit into the carrier, both numbers are in bits
    #[error(
        "Capacity Error: {required} bits are needed to hold the message, but the carrier only provides {available} bits"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a failure inside the block transform codec
    #[error("Block transform error: {0}")]
    Dct(DctError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl From<DctError> for SteganoError {
    fn from(e: DctError) -> Self {
        match e {
            DctError::CapacityExceeded {
                required,
                available,
            } => SteganoError::CapacityExceeded {
                required,
                available,
            },
            other => SteganoError::Dct(other),
        }
    }
}
