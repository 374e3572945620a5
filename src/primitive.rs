use alloc::vec::Vec;
use zerocopy::byteorder::{BE, F32, F64, I16, I32, I64, LE, U16, U32, U64};
use zerocopy::{FromBytes, IntoBytes};

use crate::ByteOrder;

/// A fixed-width value that can be stored in a bundle.
///
/// Every implementation occupies exactly `SIZE` bytes on the wire. There is no type tag,
/// so reading a value with a different type than it was written with silently yields
/// garbage rather than an error.
pub trait Primitive: Copy {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Appends the encoding of `self` to `out`.
    fn encode(self, order: ByteOrder, out: &mut Vec<u8>);

    /// Decodes a value from the front of `data`, returning it with the remaining bytes.
    /// Returns `None` if `data` is shorter than `SIZE`.
    fn decode(order: ByteOrder, data: &[u8]) -> Option<(Self, &[u8])>;
}

impl Primitive for u8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode(self, _order: ByteOrder, out: &mut Vec<u8>) {
        out.push(self);
    }

    #[inline(always)]
    fn decode(_order: ByteOrder, data: &[u8]) -> Option<(Self, &[u8])> {
        data.split_first().map(|(&b, rest)| (b, rest))
    }
}

impl Primitive for i8 {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode(self, order: ByteOrder, out: &mut Vec<u8>) {
        (self as u8).encode(order, out)
    }

    #[inline(always)]
    fn decode(order: ByteOrder, data: &[u8]) -> Option<(Self, &[u8])> {
        u8::decode(order, data).map(|(b, rest)| (b as i8, rest))
    }
}

/// `true` is written as 1 and `false` as 0. Any non-zero byte reads back as `true`.
impl Primitive for bool {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode(self, order: ByteOrder, out: &mut Vec<u8>) {
        (self as u8).encode(order, out)
    }

    #[inline(always)]
    fn decode(order: ByteOrder, data: &[u8]) -> Option<(Self, &[u8])> {
        u8::decode(order, data).map(|(b, rest)| (b != 0, rest))
    }
}

// Multi-byte types go through zerocopy's byte-order aware wrappers, which have the same
// layout as the encoded bytes.
macro_rules! endian_primitives {
    ($($ty:ty => $wire:ident,)*) => {
        $(
            impl Primitive for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn encode(self, order: ByteOrder, out: &mut Vec<u8>) {
                    match order {
                        ByteOrder::BigEndian => {
                            out.extend_from_slice($wire::<BE>::new(self).as_bytes())
                        }
                        ByteOrder::LittleEndian => {
                            out.extend_from_slice($wire::<LE>::new(self).as_bytes())
                        }
                    }
                }

                #[inline(always)]
                fn decode(order: ByteOrder, data: &[u8]) -> Option<(Self, &[u8])> {
                    match order {
                        ByteOrder::BigEndian => $wire::<BE>::read_from_prefix(data)
                            .ok()
                            .map(|(v, rest)| (v.get(), rest)),
                        ByteOrder::LittleEndian => $wire::<LE>::read_from_prefix(data)
                            .ok()
                            .map(|(v, rest)| (v.get(), rest)),
                    }
                }
            }
        )*
    };
}

endian_primitives! {
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}
