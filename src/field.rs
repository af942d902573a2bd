//! Typed access to instance fields of foreign objects.
//!
//! Generated getters and setters call these with the field type and the offset the
//! runtime reported for it. Value-classified fields live inline in the instance;
//! reference-classified fields hold a single object address.
use crate::{
    classify::{AssertReference, Classified, ReferenceHandle},
    descriptor::installed_type_system,
    offset::get_at_offset,
    ptr::Ptr,
};
use std::{any::type_name, ffi::c_void};
use tracing::trace;

/// Pointer to the inline value field at `OFFSET`.
///
/// # Safety
///
/// `instance` must be the base of a live foreign object that holds a `T` at `OFFSET`.
#[inline(always)]
pub unsafe fn value_field<T: Classified, const OFFSET: usize>(instance: *mut c_void) -> Ptr<T> {
    Ptr::from_raw(get_at_offset::<OFFSET>(instance).cast())
}

/// Copies the inline value field at `OFFSET` out of the instance.
///
/// # Safety
///
/// As for [`value_field`].
#[inline]
pub unsafe fn get_value_field<T: Classified + Copy, const OFFSET: usize>(instance: *mut c_void) -> T {
    unsafe { value_field::<T, OFFSET>(instance).read() }
}

/// Overwrites the inline value field at `OFFSET`.
///
/// # Safety
///
/// As for [`value_field`]. Value fields that embed object references must be
/// written by the runtime instead, since this bypasses any write barrier.
#[inline]
pub unsafe fn set_value_field<T: Classified + Copy, const OFFSET: usize>(instance: *mut c_void, value: T) {
    unsafe { value_field::<T, OFFSET>(instance).write(value) }
}

/// Reads the object reference stored at `OFFSET`.
///
/// # Safety
///
/// `instance` must be the base of a live foreign object with a reference slot at
/// `OFFSET`.
#[inline]
pub unsafe fn get_reference_field<T: ReferenceHandle, const OFFSET: usize>(instance: *mut c_void) -> T {
    #[allow(clippy::let_unit_value)]
    let () = AssertReference::<T>::OK;
    let slot = get_at_offset::<OFFSET>(instance);
    T::from_raw(unsafe { slot.read_unaligned() })
}

/// Stores an object reference at `OFFSET`, going through the installed runtime's
/// write barrier when there is one.
///
/// # Safety
///
/// As for [`get_reference_field`]. `value` must be a reference the runtime
/// considers live.
pub unsafe fn set_reference_field<T: ReferenceHandle, const OFFSET: usize>(instance: *mut c_void, value: T) {
    #[allow(clippy::let_unit_value)]
    let () = AssertReference::<T>::OK;
    let slot = get_at_offset::<OFFSET>(instance);
    match installed_type_system() {
        Some(system) => {
            trace!(field = type_name::<T>(), offset = OFFSET, "reference store through write barrier");
            unsafe { system.write_barrier(instance, slot, value.as_raw()) }
        }
        None => unsafe { slot.write_unaligned(value.as_raw()) },
    }
}

/// Wraps a whole value-type instance that the runtime handed out by address, e.g.
/// the unboxed payload of a boxed struct.
///
/// # Safety
///
/// `instance` must point at a live `T`.
pub unsafe fn value_instance<T: Classified>(instance: *mut c_void) -> Ptr<T> {
    Ptr::from_raw(instance)
}
