//! Field addressing into foreign-owned instances.
//!
//! Offsets come from the foreign runtime's own layout metadata, so nothing here
//! validates them: the arithmetic is performed on the byte representation of the
//! base address and the result is handed back untouched.
use std::ffi::c_void;

/// A byte offset known only at run time, as reported by the runtime's field metadata.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteOffset(pub usize);

impl From<usize> for ByteOffset {
    fn from(offset: usize) -> Self {
        ByteOffset(offset)
    }
}

/// Gets the slot `OFFSET` bytes past `instance`.
///
/// The returned pointer has not been dereferenced and carries no guarantee of
/// alignment or validity; it keeps the provenance of `instance`.
#[inline(always)]
pub const fn get_at_offset<const OFFSET: usize>(instance: *mut c_void) -> *mut *mut c_void {
    instance.cast::<u8>().wrapping_add(OFFSET).cast()
}

/// Runtime-offset form of [`get_at_offset`].
#[inline(always)]
pub fn slot_at(instance: *mut c_void, offset: ByteOffset) -> *mut *mut c_void {
    instance.cast::<u8>().wrapping_add(offset.0).cast()
}
