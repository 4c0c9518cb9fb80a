use thiserror::Error;

/// Decoding failures for fixed-width byte representations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ByteError {
    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("byte length {len} is not a multiple of the element width {width}")]
    Misaligned { len: usize, width: usize },
}

/// Fixed-width little-endian byte representation for primitive values.
pub trait ByteRepr: Sized {
    /// Encoded byte width.
    const WIDTH: usize;

    fn to_bytes(&self) -> Vec<u8>;

    /// Decodes exactly `WIDTH` bytes; any other length is rejected.
    fn from_bytes(bytes: &[u8]) -> Result<Self, ByteError>;
}

macro_rules! byte_repr_impl {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ByteRepr for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn to_bytes(&self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn from_bytes(bytes: &[u8]) -> Result<Self, ByteError> {
                    let raw: [u8; std::mem::size_of::<$ty>()] =
                        bytes.try_into().map_err(|_| ByteError::WrongLength {
                            expected: std::mem::size_of::<$ty>(),
                            actual: bytes.len(),
                        })?;
                    Ok(<$ty>::from_le_bytes(raw))
                }
            }
        )*
    };
}

byte_repr_impl!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl ByteRepr for bool {
    const WIDTH: usize = 1;

    fn to_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, ByteError> {
        match bytes {
            [byte] => Ok(*byte != 0),
            _ => Err(ByteError::WrongLength {
                expected: 1,
                actual: bytes.len(),
            }),
        }
    }
}

/// Encodes a slice element by element into one contiguous buffer.
pub fn slice_to_bytes<T: ByteRepr>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    for value in values {
        out.extend_from_slice(&value.to_bytes());
    }
    out
}

/// Decodes a contiguous buffer back into values; the length must be a
/// whole number of elements.
pub fn slice_from_bytes<T: ByteRepr>(bytes: &[u8]) -> Result<Vec<T>, ByteError> {
    if T::WIDTH == 0 || bytes.len() % T::WIDTH != 0 {
        return Err(ByteError::Misaligned {
            len: bytes.len(),
            width: T::WIDTH,
        });
    }

    bytes.chunks_exact(T::WIDTH).map(T::from_bytes).collect()
}
