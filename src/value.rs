//! Inline storage for generated value types.
//!
//! A generated binding for a foreign value type does not mirror the runtime's field
//! list; it holds the instance's bytes and reaches fields by offset. `ValueBlob`
//! is that storage, with copy and move implemented as whole-region byte transfers.
use crate::{
    bytes::{copy_by_byte, move_by_byte},
    classify::Classified,
    ptr::Ptr,
};
use std::ffi::c_void;

#[derive(PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ValueBlob<const N: usize>([u8; N]);

impl<const N: usize> Classified for ValueBlob<N> {
    const IS_VALUE: bool = true;
}

impl<const N: usize> Default for ValueBlob<N> {
    fn default() -> Self {
        ValueBlob([0; N])
    }
}

impl<const N: usize> Clone for ValueBlob<N> {
    fn clone(&self) -> Self {
        let mut out = Self::default();
        copy_by_byte(&self.0, &mut out.0);
        out
    }

    fn clone_from(&mut self, source: &Self) {
        copy_by_byte(&source.0, &mut self.0);
    }
}

impl<const N: usize> std::fmt::Debug for ValueBlob<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValueBlob<{}>({:02x?})", N, &self.0[..])
    }
}

impl<const N: usize> ValueBlob<N> {
    pub const SIZE: usize = N;

    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        ValueBlob(bytes)
    }

    pub fn bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Moves the contents out, leaving `self` relinquished.
    ///
    /// Whatever remains in `self` is unspecified and should be overwritten before the
    /// blob is read again.
    pub fn take(&mut self) -> Self {
        let mut out = Self::default();
        move_by_byte(&mut self.0, &mut out.0);
        out
    }

    /// Moves `source` into `self`.
    pub fn move_from(&mut self, source: &mut Self) {
        move_by_byte(&mut source.0, &mut self.0);
    }

    /// Address of the storage, for handing the value to the foreign runtime.
    pub fn as_foreign(&mut self) -> Ptr<c_void> {
        Ptr::new(self.0.as_mut_ptr().cast())
    }

    /// Copies `N` bytes out of foreign memory.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `N` bytes.
    pub unsafe fn read_from(src: *const c_void) -> Self {
        let mut out = Self::default();
        unsafe { crate::bytes::copy_by_byte_raw::<N>(src, out.0.as_mut_ptr().cast()) };
        out
    }

    /// Copies the value into foreign memory.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `N` bytes and must not overlap `self`.
    pub unsafe fn write_to(&self, dst: *mut c_void) {
        unsafe { crate::bytes::copy_by_byte_raw::<N>(self.0.as_ptr().cast(), dst) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, Classification};

    #[test]
    fn test_clone_is_byte_identical() {
        let blob = ValueBlob::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
        let copy = blob.clone();
        assert_eq!(copy, blob);

        let mut target = ValueBlob::<8>::default();
        target.clone_from(&blob);
        assert_eq!(target.bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_take_transfers_contents() {
        let mut blob = ValueBlob::from_bytes([9u8; 12]);
        let moved = blob.take();
        assert_eq!(moved.bytes(), &[9u8; 12]);

        let mut target = ValueBlob::<12>::default();
        let mut source = ValueBlob::from_bytes([4u8; 12]);
        target.move_from(&mut source);
        assert_eq!(target.bytes(), &[4u8; 12]);
    }

    #[test]
    fn test_foreign_round_trip() {
        let mut foreign = [0u8; 32];
        let blob = ValueBlob::from_bytes([0xEEu8; 8]);
        unsafe {
            blob.write_to(foreign.as_mut_ptr().add(16).cast());
        }
        assert_eq!(&foreign[16..24], &[0xEE; 8]);
        assert!(foreign[..16].iter().all(|&b| b == 0));

        let back = unsafe { ValueBlob::<8>::read_from(foreign.as_ptr().add(16).cast()) };
        assert_eq!(back, blob);
    }

    #[test]
    fn test_foreign_address_is_storage() {
        let mut blob = ValueBlob::from_bytes([0u8; 4]);
        let ptr = blob.as_foreign();
        unsafe { Ptr::<u32>::from_raw(ptr.convert()).write(0x0102_0304) };
        assert_eq!(blob.bytes(), &0x0102_0304u32.to_ne_bytes());
    }

    #[test]
    fn test_blob_is_value_classified() {
        assert_eq!(classify::<ValueBlob<4>>(), Classification::VALUE);
        assert_eq!(ValueBlob::<24>::SIZE, 24);
    }
}
