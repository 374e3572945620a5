use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::{BundleError, BundleReader, ByteOrder, MarshalBinary, Primitive, Result};

/// Appends values to a growable buffer in a fixed byte order.
///
/// The first failing operation records its error; every later `put_*` call is then a
/// no-op. Check [`BundleWriter::error`] once after a batch of calls, or let
/// [`BundleWriter::into_bytes`] / [`BundleWriter::flip`] report it.
#[derive(Clone, Debug)]
pub struct BundleWriter {
    order: ByteOrder,
    out: Vec<u8>,
    err: Option<BundleError>,
}

impl BundleWriter {
    /// Creates an empty writer using `order` for every multi-byte value.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            order,
            out: Vec::new(),
            err: None,
        }
    }

    /// Creates an empty writer whose buffer can hold `len` bytes without reallocating.
    pub fn with_capacity(order: ByteOrder, len: usize) -> Self {
        Self {
            order,
            out: Vec::with_capacity(len),
            err: None,
        }
    }

    /// Creates an empty big-endian writer.
    pub fn big_endian() -> Self {
        Self::new(ByteOrder::BigEndian)
    }

    /// Creates an empty little-endian writer.
    pub fn little_endian() -> Self {
        Self::new(ByteOrder::LittleEndian)
    }

    /// The byte order this writer encodes with.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// The first error recorded by this writer, if any.
    pub fn error(&self) -> Option<&BundleError> {
        self.err.as_ref()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    fn fail(&mut self, err: BundleError) {
        if self.err.is_none() {
            log::debug!("bundle writer failed: {err}");
            self.err = Some(err);
        }
    }

    /// Appends any fixed-width value.
    #[inline(always)]
    pub fn put<T: Primitive>(&mut self, value: T) {
        if self.err.is_some() {
            return;
        }
        value.encode(self.order, &mut self.out);
    }

    /// Writes a `bool` as one byte, 1 or 0.
    pub fn put_bool(&mut self, value: bool) {
        self.put(value)
    }

    /// Writes a single `u8` value
    pub fn put_u8(&mut self, value: u8) {
        self.put(value)
    }

    /// Writes a single `i8` value
    pub fn put_i8(&mut self, value: i8) {
        self.put(value)
    }

    /// Writes a single `u16` value
    pub fn put_u16(&mut self, value: u16) {
        self.put(value)
    }

    /// Writes a single `i16` value
    pub fn put_i16(&mut self, value: i16) {
        self.put(value)
    }

    /// Writes a single `u32` value
    pub fn put_u32(&mut self, value: u32) {
        self.put(value)
    }

    /// Writes a single `i32` value
    pub fn put_i32(&mut self, value: i32) {
        self.put(value)
    }

    /// Writes a single `u64` value
    pub fn put_u64(&mut self, value: u64) {
        self.put(value)
    }

    /// Writes a single `i64` value
    pub fn put_i64(&mut self, value: i64) {
        self.put(value)
    }

    /// Writes an `f32` value using its IEEE 754 bit pattern.
    pub fn put_f32(&mut self, value: f32) {
        self.put(value)
    }

    /// Writes an `f64` value using its IEEE 754 bit pattern.
    pub fn put_f64(&mut self, value: f64) {
        self.put(value)
    }

    /// Writes a `char` as its 4-byte Unicode scalar value.
    pub fn put_char(&mut self, value: char) {
        self.put(value as u32)
    }

    /// Writes a blob: the `u32` length of `bytes`, then `bytes` themselves.
    ///
    /// A slice longer than `u32::MAX` records [`BundleError::TooLong`] and writes nothing.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        if self.err.is_some() {
            return;
        }
        match blob_len(bytes.len()) {
            Ok(len) => {
                self.put_u32(len);
                self.out.extend_from_slice(bytes);
            }
            Err(e) => self.fail(e),
        }
    }

    /// Writes the UTF-8 bytes of `s` as a blob.
    pub fn put_str(&mut self, s: &str) {
        self.put_bytes(s.as_bytes())
    }

    /// Writes the bytes produced by `bin` as a blob.
    ///
    /// If `bin` fails, its error becomes this writer's error and nothing is written.
    pub fn put_binary<M: MarshalBinary + ?Sized>(&mut self, bin: &M) {
        if self.err.is_some() {
            return;
        }
        match bin.marshal_binary() {
            Ok(bytes) => self.put_bytes(&bytes),
            Err(e) => self.fail(e),
        }
    }

    /// Writes `nested` as a nested bundle: its order tag, then its bytes as a blob.
    ///
    /// `nested` may use a different byte order than `self`. Its error is not inspected
    /// directly; it surfaces here only because extracting its bytes fails, exactly as any
    /// other [`MarshalBinary`] failure would.
    pub fn put_bundle(&mut self, nested: &BundleWriter) {
        if self.err.is_some() {
            return;
        }
        self.put_u8(nested.order.tag());
        self.put_binary(nested);
    }

    /// The bytes written so far, or the recorded error.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        match &self.err {
            Some(e) => Err(e.clone()),
            None => Ok(&self.out),
        }
    }

    /// Consumes the writer and returns its buffer, or the recorded error.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self.err {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    /// Creates a reader over the bytes written so far, using the same byte order and
    /// positioned at the start. Fails with the recorded error, if any.
    pub fn flip(&self) -> Result<BundleReader<'_>> {
        Ok(BundleReader::wrap(self.as_bytes()?, self.order))
    }

    /// Writes the finished bundle to `w`. A recorded error is returned as an
    /// `io::Error` of kind `Other` without writing anything.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> std::io::Result<()> {
        let bytes = self.as_bytes().map_err(std::io::Error::other)?;
        w.write_all(bytes)
    }
}

/// Converts a blob length to its `u32` prefix.
pub(crate) fn blob_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| BundleError::TooLong(len))
}

impl MarshalBinary for BundleWriter {
    fn marshal_binary(&self) -> Result<Cow<'_, [u8]>> {
        self.as_bytes().map(Cow::Borrowed)
    }
}
