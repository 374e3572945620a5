//! Writes and reads flat binary "bundles": sequences of fixed-width primitives,
//! length-prefixed blobs and nested bundles, in a byte order chosen per bundle.
//!
//! A [`BundleWriter`] appends values; a [`BundleReader`] replays them in the same order
//! and with the same types. The format carries no type tags, so the sequence of `get_*`
//! calls must mirror the sequence of `put_*` calls exactly.
//!
//! Both sides keep a sticky error. Once an operation fails, every later operation on the
//! same instance does nothing, and the first error is kept. Callers chain their calls and
//! check `error()` once at the end.
//!
//! # Wire format
//! * primitives: `size_of::<T>()` bytes in the bundle's byte order; `bool` is one byte
//! * blobs and strings: `u32` length followed by the raw bytes
//! * nested bundle: one order tag (`1` big-endian, `2` little-endian) followed by a blob
//!   holding the nested bundle's bytes

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod marshal;
mod order;
mod primitive;
mod reader;
mod writer;


pub use error::{BundleError, Result};
pub use marshal::{MarshalBinary, UnmarshalBinary};
pub use order::ByteOrder;
pub use primitive::Primitive;
pub use reader::BundleReader;
pub use writer::BundleWriter;
