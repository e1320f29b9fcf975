use std::mem::size_of;

/// Unsigned integers whose byte sequence can be reversed.
pub trait ReverseBytes: Copy {
    /// Swaps byte 0 with the last byte, byte 1 with the second-to-last one,
    /// and so on.
    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl ReverseBytes for $ty {
            fn reverse_bytes(self) -> Self {
                let mut result = 0;

                for index in 0..size_of::<Self>() {
                    let byte = (self >> (index * 8)) & 0xff;
                    result |= byte << ((size_of::<Self>() - index - 1) * 8);
                }

                result
            }
        }
    )* }
}

impl_uint! { u16 u32 u64 }

/// Converts a number in big-endian byte order into little-endian byte order.
///
/// The conversion is its own inverse.
pub fn to_little_endian<T: ReverseBytes>(number: T) -> T {
    number.reverse_bytes()
}
