//! Exact-size byte copy and move between memory regions.
//!
//! Two region shapes are supported: fixed-size byte arrays and raw address pairs.
//! The size is always a const generic, so generated value types pick the routine
//! matching their layout size at compile time.
use std::{ffi::c_void, ptr};

/// Copies a whole `N`-byte region over another.
#[inline(always)]
pub fn copy_by_byte<const N: usize>(src: &[u8; N], dst: &mut [u8; N]) {
    *dst = *src;
}

/// Copies `N` bytes from `src` to `dst`.
///
/// # Safety
///
/// Both addresses must be valid for `N` bytes (reads for `src`, writes for `dst`)
/// and the two regions must not overlap. Use [`move_by_byte_raw`] when they might.
#[inline(always)]
pub unsafe fn copy_by_byte_raw<const N: usize>(src: *const c_void, dst: *mut c_void) {
    unsafe { ptr::copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), N) }
}

/// Transfers an `N`-byte region into `dst`.
///
/// After the call the content of `src` is unspecified; callers treat it as
/// relinquished and must reinitialise it before reading it again.
#[inline(always)]
pub fn move_by_byte<const N: usize>(src: &mut [u8; N], dst: &mut [u8; N]) {
    dst.copy_from_slice(src);
}

/// Transfers `N` bytes from `src` to `dst`, tolerating overlap.
///
/// # Safety
///
/// Both addresses must be valid for `N` bytes (reads for `src`, writes for `dst`).
/// The content of `src` outside the overlapping part is unspecified afterwards.
#[inline(always)]
pub unsafe fn move_by_byte_raw<const N: usize>(src: *const c_void, dst: *mut c_void) {
    unsafe { ptr::copy(src.cast::<u8>(), dst.cast::<u8>(), N) }
}
