//! C-ABI entry points for binding code that is not written in Rust.
//!
//! Const generics do not survive the C ABI, so sizes and offsets are ordinary
//! arguments here. The symbols are unmangled and end up in the final artifact
//! that links this crate, e.g. a `cdylib` built by the binding generator. The
//! module is compiled out under the `hidden-visibility` feature.
use crate::offset::slot_at;
use std::{ffi::c_void, ptr};

/// Address of the slot `offset` bytes into `instance`.
#[no_mangle]
pub extern "C" fn interop_get_at_offset(instance: *mut c_void, offset: usize) -> *mut *mut c_void {
    slot_at(instance, offset.into())
}

/// Copies `size` bytes between non-overlapping regions.
///
/// # Safety
///
/// Both regions must be valid for `size` bytes and must not overlap.
#[no_mangle]
pub unsafe extern "C" fn interop_copy_by_byte(src: *const c_void, dst: *mut c_void, size: usize) {
    unsafe { ptr::copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), size) }
}

/// Moves `size` bytes between possibly overlapping regions.
///
/// # Safety
///
/// Both regions must be valid for `size` bytes.
#[no_mangle]
pub unsafe extern "C" fn interop_move_by_byte(src: *const c_void, dst: *mut c_void, size: usize) {
    unsafe { ptr::copy(src.cast::<u8>(), dst.cast::<u8>(), size) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_have_c_signatures() {
        let offset: unsafe extern "C" fn(*mut c_void, usize) -> *mut *mut c_void = interop_get_at_offset;
        let copy: unsafe extern "C" fn(*const c_void, *mut c_void, usize) = interop_copy_by_byte;
        let mv: unsafe extern "C" fn(*const c_void, *mut c_void, usize) = interop_move_by_byte;

        let mut buf = [0u8, 1, 2, 3];
        let base = buf.as_mut_ptr().cast::<c_void>();
        unsafe {
            let slot = offset(base, 2);
            copy(base.cast_const(), slot.cast(), 2);
            mv(slot.cast_const().cast(), base, 1);
        }
        assert_eq!(buf, [0, 1, 0, 1]);
    }

    #[test]
    fn test_exported_offset() {
        let mut buf = [0u8; 16];
        let base = buf.as_mut_ptr().cast::<c_void>();
        assert_eq!(
            interop_get_at_offset(base, 12),
            crate::offset::get_at_offset::<12>(base)
        );
    }

    #[test]
    fn test_exported_move_overlaps() {
        let mut buf: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
        let base = buf.as_mut_ptr();
        unsafe {
            interop_move_by_byte(base.cast(), base.add(2).cast(), 6);
        }
        assert_eq!(buf, [1, 2, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_exported_copy() {
        let src = [9u8; 4];
        let mut dst = [0u8; 4];
        unsafe {
            interop_copy_by_byte(src.as_ptr().cast(), dst.as_mut_ptr().cast(), 4);
        }
        assert_eq!(dst, src);
    }
}
