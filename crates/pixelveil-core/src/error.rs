use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents an unsupported carrier media, for example a text file or a movie
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier file that exceeds the accepted file size
    #[error("Carrier file of {size} bytes exceeds the limit of {limit} bytes")]
    CarrierTooLarge { size: u64, limit: u64 },

    /// Represents a message that does not fit into the carrier
    #[error("Capacity Error: the carrier provides {available} sample(s) but the framed message needs {required}")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a carrier smaller than the fixed 32-bit length header
    #[error("Carrier is too short to hold a length header")]
    CarrierTooShort,

    /// Represents a length header that decodes to an out-of-range value,
    /// the signature of corrupted or never-encoded input
    #[error("Invalid length header: {0}")]
    InvalidLengthHeader(u32),

    /// Represents an unveil of no message data
    #[error("No message found or wrong password")]
    NoMessageOrWrongPassword,

    /// Represents the error of invalid UTF-8 text data found inside a message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents an empty message, which cannot be hidden
    #[error("Message must not be empty")]
    EmptyMessage,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,
}
