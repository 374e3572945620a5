//! Hooks for embedding externally defined types in a bundle as opaque blobs.

use alloc::borrow::Cow;

use crate::Result;

/// A value that can turn itself into bytes.
///
/// `BundleWriter::put_binary` stores the produced bytes as a length-prefixed blob.
pub trait MarshalBinary {
    /// Produces the encoded form of `self`.
    fn marshal_binary(&self) -> Result<Cow<'_, [u8]>>;
}

/// A value that can be filled in from bytes.
///
/// `'de` is the lifetime of the source buffer, so implementations may keep references
/// into it instead of copying.
pub trait UnmarshalBinary<'de> {
    /// Replaces the contents of `self` with the decoded form of `data`.
    fn unmarshal_binary(&mut self, data: &'de [u8]) -> Result<()>;
}
