use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{BundleError, ByteOrder, Primitive, Result, UnmarshalBinary};

/// Reads values from a slice of bytes in a fixed byte order.
///
/// The reader mirrors [`crate::BundleWriter`] one call for one call: values must be read
/// back in the order, and with the types, they were written. The bytes carry no type
/// information, so a mismatched sequence misreads data without reporting an error.
///
/// `get_*` methods store the decoded value into a slot supplied by the caller instead of
/// returning it. When a read fails, the error is recorded, the slot is left untouched and
/// every later `get_*` call does nothing. Check [`BundleReader::error`] once after the
/// whole sequence; slots filled after the failure point must not be trusted.
///
/// A reader is either created over a slice with [`BundleReader::wrap`], or created empty
/// with [`BundleReader::new`] and loaded exactly once with [`BundleReader::load`]. The
/// reader never copies its source, and nested readers point into their parent's slice.
#[derive(Clone, Debug)]
pub struct BundleReader<'a> {
    order: ByteOrder,
    /// The unread part of the source. `None` until the reader is loaded.
    data: Option<&'a [u8]>,
    err: Option<BundleError>,
}

impl<'a> BundleReader<'a> {
    /// Creates a reader with no source. Use [`BundleReader::load`] to supply the bytes,
    /// or pass it to [`BundleReader::get_bundle`].
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            data: None,
            err: None,
        }
    }

    /// Creates a reader over `data`.
    pub fn wrap(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            order,
            data: Some(data),
            err: None,
        }
    }

    /// Assigns the source bytes of an empty reader.
    ///
    /// A reader can only be loaded once. Loading it again returns
    /// [`BundleError::AlreadyLoaded`] and keeps the original source, so unread data is
    /// never dropped silently. That error is returned, not recorded as the sticky error.
    pub fn load(&mut self, data: &'a [u8]) -> Result<()> {
        if self.data.is_some() {
            return Err(BundleError::AlreadyLoaded);
        }
        self.data = Some(data);
        Ok(())
    }

    /// The byte order this reader decodes with.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// The first error recorded by this reader, if any.
    pub fn error(&self) -> Option<&BundleError> {
        self.err.as_ref()
    }

    /// True once the reader has a source.
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Number of bytes not yet consumed. Zero for a reader with no source.
    pub fn remaining(&self) -> usize {
        self.data.map_or(0, |d| d.len())
    }

    fn fail(&mut self, err: BundleError) {
        if self.err.is_none() {
            log::debug!("bundle reader failed: {err}");
            self.err = Some(err);
        }
    }

    /// The unread bytes, or `None` if the reader has failed or has no source. The latter
    /// records [`BundleError::NoSource`].
    fn source(&mut self) -> Option<&'a [u8]> {
        if self.err.is_some() {
            return None;
        }
        match self.data {
            Some(data) => Some(data),
            None => {
                self.fail(BundleError::NoSource);
                None
            }
        }
    }

    fn take<T: Primitive>(&mut self) -> Option<T> {
        let data = self.source()?;
        match T::decode(self.order, data) {
            Some((value, rest)) => {
                self.data = Some(rest);
                Some(value)
            }
            None => {
                self.fail(BundleError::Truncated);
                None
            }
        }
    }

    /// Consumes a `u32` length prefix and that many bytes.
    fn take_blob(&mut self) -> Option<&'a [u8]> {
        let len = self.take::<u32>()? as usize;
        let data = self.source()?;
        if data.len() < len {
            self.fail(BundleError::Truncated);
            return None;
        }
        let (lo, hi) = data.split_at(len);
        self.data = Some(hi);
        Some(lo)
    }

    /// Reads any fixed-width value into `out`.
    #[inline(always)]
    pub fn get<T: Primitive>(&mut self, out: &mut T) {
        if let Some(value) = self.take() {
            *out = value;
        }
    }

    /// Reads a `bool`. Any non-zero byte reads as `true`.
    pub fn get_bool(&mut self, out: &mut bool) {
        self.get(out)
    }

    /// Reads a single `u8` value.
    pub fn get_u8(&mut self, out: &mut u8) {
        self.get(out)
    }

    /// Reads a single `i8` value.
    pub fn get_i8(&mut self, out: &mut i8) {
        self.get(out)
    }

    /// Reads a single `u16` value.
    pub fn get_u16(&mut self, out: &mut u16) {
        self.get(out)
    }

    /// Reads a single `i16` value.
    pub fn get_i16(&mut self, out: &mut i16) {
        self.get(out)
    }

    /// Reads a single `u32` value.
    pub fn get_u32(&mut self, out: &mut u32) {
        self.get(out)
    }

    /// Reads a single `i32` value.
    pub fn get_i32(&mut self, out: &mut i32) {
        self.get(out)
    }

    /// Reads a single `u64` value.
    pub fn get_u64(&mut self, out: &mut u64) {
        self.get(out)
    }

    /// Reads a single `i64` value.
    pub fn get_i64(&mut self, out: &mut i64) {
        self.get(out)
    }

    /// Reads an `f32` value, bit for bit.
    pub fn get_f32(&mut self, out: &mut f32) {
        self.get(out)
    }

    /// Reads an `f64` value, bit for bit.
    pub fn get_f64(&mut self, out: &mut f64) {
        self.get(out)
    }

    /// Reads a `char` written by `put_char`. A value that is not a Unicode scalar records
    /// [`BundleError::Encoding`].
    pub fn get_char(&mut self, out: &mut char) {
        let Some(code) = self.take::<u32>() else {
            return;
        };
        match char::from_u32(code) {
            Some(c) => *out = c,
            None => self.fail(BundleError::encoding(alloc::format!(
                "0x{code:x} is not a unicode scalar value"
            ))),
        }
    }

    /// Reads a blob into a freshly allocated vector.
    pub fn get_bytes(&mut self, out: &mut Vec<u8>) {
        if let Some(bytes) = self.take_blob() {
            *out = bytes.to_vec();
        }
    }

    /// Reads a blob without copying it. `out` points into the reader's source.
    pub fn get_slice(&mut self, out: &mut &'a [u8]) {
        if let Some(bytes) = self.take_blob() {
            *out = bytes;
        }
    }

    /// Reads a blob as text.
    ///
    /// The bytes are not validated: sequences that are not valid UTF-8 are replaced with
    /// U+FFFD and no error is recorded. Use `get_bstring` to keep the exact bytes.
    pub fn get_string(&mut self, out: &mut String) {
        if let Some(bytes) = self.take_blob() {
            *out = String::from_utf8_lossy(bytes).into_owned();
        }
    }

    /// Reads a blob as a byte string, keeping the bytes exactly as written.
    #[cfg(feature = "bstr")]
    pub fn get_bstring(&mut self, out: &mut bstr::BString) {
        if let Some(bytes) = self.take_blob() {
            *out = bstr::BString::from(bytes);
        }
    }

    /// Reads a blob and hands it to `bin`. A failure reported by `bin` becomes this
    /// reader's error.
    pub fn get_binary<U: UnmarshalBinary<'a> + ?Sized>(&mut self, bin: &mut U) {
        let Some(bytes) = self.take_blob() else {
            return;
        };
        if let Err(e) = bin.unmarshal_binary(bytes) {
            self.fail(e);
        }
    }

    /// Reads a nested bundle into `out`.
    ///
    /// `out` takes its byte order from the tag in front of the nested bundle and its
    /// source from the blob that follows. The order is applied as soon as the tag is read,
    /// even if the blob turns out to be truncated. `out` must not be loaded yet; an
    /// already loaded `out` records [`BundleError::AlreadyLoaded`] on `self` and is left
    /// unchanged. An unknown tag records [`BundleError::UnsupportedByteOrder`].
    pub fn get_bundle(&mut self, out: &mut BundleReader<'a>) {
        let Some(tag) = self.take::<u8>() else {
            return;
        };
        let Some(order) = ByteOrder::from_tag(tag) else {
            self.fail(BundleError::UnsupportedByteOrder(tag));
            return;
        };
        // A loaded `out` keeps its order; the load below rejects it.
        if !out.is_loaded() {
            out.order = order;
        }
        self.get_binary(out);
    }
}

impl<'a> UnmarshalBinary<'a> for BundleReader<'a> {
    fn unmarshal_binary(&mut self, data: &'a [u8]) -> Result<()> {
        self.load(data)
    }
}

impl fmt::Display for BundleReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unread: {}, order: {}", self.remaining(), self.order)
    }
}
