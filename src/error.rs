use alloc::string::String;
use core::fmt;

/// Result type returned by fallible bundle operations.
pub type Result<T> = core::result::Result<T, BundleError>;

/// Error type shared by `BundleWriter` and `BundleReader`.
///
/// Both types keep the first error they hit and ignore every later operation, so a value
/// of this type describes the earliest failure in a sequence of calls.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BundleError {
    /// `load` was called on a reader that already has its bytes.
    AlreadyLoaded,

    /// A `get_*` method was called on a reader that was never loaded.
    NoSource,

    /// Fewer bytes remain than the requested value needs.
    Truncated,

    /// A nested bundle starts with an order tag other than `1` or `2`.
    UnsupportedByteOrder(u8),

    /// A blob is longer than its `u32` length prefix can describe.
    TooLong(usize),

    /// A value could not be encoded or decoded, or an external marshaler reported a
    /// failure.
    Encoding(String),
}

impl BundleError {
    /// Builds an [`BundleError::Encoding`] error. Intended for `MarshalBinary` and
    /// `UnmarshalBinary` implementations.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// True for errors raised while turning values into bytes or back, as opposed to
    /// structural errors about the reader's source.
    pub fn is_encoding_failure(&self) -> bool {
        matches!(self, Self::TooLong(_) | Self::Encoding(_))
    }
}

impl core::error::Error for BundleError {}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyLoaded => f.write_str("bundle input already loaded"),
            Self::NoSource => f.write_str("bundle input was not loaded: source is empty"),
            Self::Truncated => f.write_str("unexpected end of bundle data"),
            Self::UnsupportedByteOrder(tag) => write!(f, "unsupported byte order tag {tag}"),
            Self::TooLong(len) => write!(f, "blob of {len} bytes does not fit a u32 length"),
            Self::Encoding(msg) => write!(f, "encoding failed: {msg}"),
        }
    }
}
