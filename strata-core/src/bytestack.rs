//! Result channel: a fixed-capacity LIFO byte stack
//!
//! A dismissed activity serializes its outgoing values onto the stack in
//! `set_result`, and the activity underneath deserializes them in
//! `on_activity_result` in the reverse order of the writes. The channel
//! carries no type tags; producer and consumer agree out-of-band on the
//! exact sequence and types pushed.

use heapless::Vec;

/// Capacity of the runtime's shared result channel in bytes
pub const RESULT_CAPACITY: usize = 16;

/// The result channel type owned by the runtime
pub type ResultBytes = ByteStack<RESULT_CAPACITY>;

/// Errors that can occur on the byte stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteStackError {
    /// Push would exceed the fixed capacity
    Overflow,
    /// Pop requested more bytes than remain
    Underflow,
}

/// A primitive value that can travel over the byte stack
///
/// Values are serialized little-endian into `SIZE` consecutive bytes.
pub trait StackValue: Sized {
    /// Serialized size in bytes
    const SIZE: usize;

    /// Write the value's bytes into `out` (exactly `SIZE` bytes)
    fn to_bytes(self, out: &mut [u8]);

    /// Reconstruct the value from `buf` (exactly `SIZE` bytes)
    fn from_bytes(buf: &[u8]) -> Self;
}

macro_rules! impl_stack_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StackValue for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                fn to_bytes(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                fn from_bytes(buf: &[u8]) -> Self {
                    let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(buf);
                    Self::from_le_bytes(bytes)
                }
            }
        )*
    };
}

impl_stack_value!(u8, i8, u16, i16, u32, i32, f32, f64);

impl StackValue for bool {
    const SIZE: usize = 1;

    fn to_bytes(self, out: &mut [u8]) {
        out[0] = u8::from(self);
    }

    fn from_bytes(buf: &[u8]) -> Self {
        buf[0] != 0
    }
}

/// Fixed-capacity LIFO byte buffer for typed value passing
///
/// Values pushed since the last [`reset`](Self::reset) must fit within
/// `N` bytes, and reads must occur in the reverse order of the writes to
/// reproduce the original values.
#[derive(Debug, Clone, Default)]
pub struct ByteStack<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> ByteStack<N> {
    /// Create an empty byte stack
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Logically empty the buffer; capacity is unchanged
    ///
    /// The runtime resets the shared channel before every `set_result`
    /// so stale data from a previous navigation cannot leak into the
    /// next read.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }

    /// Number of bytes currently held
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if no bytes are held
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fixed capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Serialize `value` onto the top of the stack
    ///
    /// Fails with [`ByteStackError::Overflow`] if the write would exceed
    /// capacity; the buffer is unchanged after a rejected push.
    pub fn push<T: StackValue>(&mut self, value: T) -> Result<(), ByteStackError> {
        let start = self.bytes.len();
        if start + T::SIZE > N {
            return Err(ByteStackError::Overflow);
        }
        self.bytes
            .resize(start + T::SIZE, 0)
            .map_err(|_| ByteStackError::Overflow)?;
        value.to_bytes(&mut self.bytes[start..]);
        Ok(())
    }

    /// Deserialize and remove the most recently pushed value of type `T`
    ///
    /// Fails with [`ByteStackError::Underflow`] if fewer than
    /// `T::SIZE` bytes remain; the buffer is unchanged after a rejected
    /// pop.
    pub fn pop<T: StackValue>(&mut self) -> Result<T, ByteStackError> {
        let len = self.bytes.len();
        if len < T::SIZE {
            return Err(ByteStackError::Underflow);
        }
        let value = T::from_bytes(&self.bytes[len - T::SIZE..]);
        self.bytes.truncate(len - T::SIZE);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mixed_roundtrip() {
        // push a 32-bit value, then an 8-bit value; pop in reverse order
        let mut stack: ResultBytes = ByteStack::new();
        stack.push(1000u32).unwrap();
        stack.push(5u8).unwrap();

        assert_eq!(stack.pop::<u8>(), Ok(5));
        assert_eq!(stack.pop::<u32>(), Ok(1000));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_signed_and_float_roundtrip() {
        let mut stack: ByteStack<16> = ByteStack::new();
        stack.push(-42i8).unwrap();
        stack.push(-30000i16).unwrap();
        stack.push(3.5f32).unwrap();
        stack.push(true).unwrap();

        assert_eq!(stack.pop::<bool>(), Ok(true));
        assert_eq!(stack.pop::<f32>(), Ok(3.5));
        assert_eq!(stack.pop::<i16>(), Ok(-30000));
        assert_eq!(stack.pop::<i8>(), Ok(-42));
    }

    #[test]
    fn test_overflow_rejected_without_corruption() {
        let mut stack: ByteStack<16> = ByteStack::new();
        for i in 0..16u8 {
            stack.push(i).unwrap();
        }

        // Seventeenth byte must be rejected and leave the buffer intact
        assert_eq!(stack.push(16u8), Err(ByteStackError::Overflow));
        assert_eq!(stack.len(), 16);
        for i in (0..16u8).rev() {
            assert_eq!(stack.pop::<u8>(), Ok(i));
        }
    }

    #[test]
    fn test_overflow_on_wide_value() {
        let mut stack: ByteStack<16> = ByteStack::new();
        stack.push(0u32).unwrap();
        stack.push(0u32).unwrap();
        stack.push(0u32).unwrap();
        stack.push(0u16).unwrap();

        // 14 bytes used; a u32 does not fit
        assert_eq!(stack.push(7u32), Err(ByteStackError::Overflow));
        assert_eq!(stack.len(), 14);
    }

    #[test]
    fn test_underflow() {
        let mut stack: ByteStack<16> = ByteStack::new();
        assert_eq!(stack.pop::<u8>(), Err(ByteStackError::Underflow));

        stack.push(5u8).unwrap();
        assert_eq!(stack.pop::<u32>(), Err(ByteStackError::Underflow));
        // Rejected pop leaves the byte in place
        assert_eq!(stack.pop::<u8>(), Ok(5));
    }

    #[test]
    fn test_reset_empties_buffer() {
        let mut stack: ByteStack<16> = ByteStack::new();
        stack.push(123u32).unwrap();
        stack.reset();

        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 16);
        assert_eq!(stack.pop::<u8>(), Err(ByteStackError::Underflow));
    }

    proptest! {
        #[test]
        fn prop_lifo_discipline(values in proptest::collection::vec(any::<u16>(), 0..8)) {
            let mut stack: ByteStack<16> = ByteStack::new();
            for &v in &values {
                stack.push(v).unwrap();
            }
            for &v in values.iter().rev() {
                prop_assert_eq!(stack.pop::<u16>(), Ok(v));
            }
            prop_assert!(stack.is_empty());
        }
    }
}
