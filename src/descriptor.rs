//! Bridge between [`Ptr`] and the foreign runtime's type-query protocol.
//!
//! The runtime identifies every type by a descriptor object it owns. Generated
//! bindings tell this crate how to find the class of each foreign type through
//! [`NoArgClass`]; argument marshalling then asks for descriptors through
//! [`NoArgType`] and [`ArgType`]. A `Ptr<T>` answers with the by-reference
//! ("this-arg") descriptor of `T`, the same one a direct instance reference to `T`
//! would carry.
use crate::{error::DescriptorError, ptr::Ptr};
use dashmap::DashMap;
use std::{
    any::{type_name, TypeId},
    ffi::c_void,
    fmt::{self, Debug, Formatter},
    ptr::NonNull,
    sync::OnceLock,
};
use tracing::{debug, trace};

macro_rules! descriptor_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(NonNull<c_void>);

        // Descriptors are immutable runtime metadata that outlive every caller.
        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl $name {
            pub const fn new(raw: NonNull<c_void>) -> Self {
                Self(raw)
            }

            pub fn from_raw(raw: *const c_void) -> Option<Self> {
                NonNull::new(raw.cast_mut()).map(Self)
            }

            pub const fn as_ptr(self) -> *const c_void {
                self.0.as_ptr()
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:p})"), self.0)
            }
        }
    };
}

descriptor_handle!(
    /// Address of a foreign type descriptor.
    TypeHandle
);
descriptor_handle!(
    /// Address of a foreign class descriptor.
    ClassHandle
);

/// The parts of the foreign runtime's metadata API this crate calls into.
pub trait ForeignTypeSystem: Send + Sync {
    /// Descriptor used when an instance of `class` is passed by reference.
    fn this_arg(&self, class: ClassHandle) -> Result<TypeHandle, DescriptorError>;

    /// Descriptor used when a `class` value is passed by value.
    fn byval_arg(&self, class: ClassHandle) -> Result<TypeHandle, DescriptorError>;

    /// Stores the object address `value` into the reference slot `slot` of `instance`.
    ///
    /// Runtimes with a generational or concurrent collector override this to record
    /// the store; the default is a plain write.
    ///
    /// # Safety
    ///
    /// `slot` must lie within `instance` and be valid for a pointer-sized write.
    unsafe fn write_barrier(&self, instance: *mut c_void, slot: *mut *mut c_void, value: *mut c_void) {
        let _ = instance;
        unsafe { slot.write_unaligned(value) }
    }
}

static TYPE_SYSTEM: OnceLock<&'static dyn ForeignTypeSystem> = OnceLock::new();
static THIS_ARG_CACHE: OnceLock<DashMap<TypeId, TypeHandle>> = OnceLock::new();

/// Installs the process-wide type system. Only the first call succeeds.
pub fn install_type_system(system: &'static dyn ForeignTypeSystem) -> Result<(), DescriptorError> {
    TYPE_SYSTEM
        .set(system)
        .map_err(|_| DescriptorError::AlreadyInstalled)?;
    debug!("foreign type system installed");
    Ok(())
}

pub fn type_system() -> Result<&'static dyn ForeignTypeSystem, DescriptorError> {
    TYPE_SYSTEM.get().copied().ok_or(DescriptorError::NotInstalled)
}

pub(crate) fn installed_type_system() -> Option<&'static dyn ForeignTypeSystem> {
    TYPE_SYSTEM.get().copied()
}

/// Looks up the class of a foreign type without needing an instance.
pub trait NoArgClass {
    fn no_arg_class() -> Result<ClassHandle, DescriptorError>;
}

/// Looks up the type descriptor of a type without needing an instance.
pub trait NoArgType {
    fn no_arg_type() -> Result<TypeHandle, DescriptorError>;
}

/// Looks up the type descriptor of a live argument.
pub trait ArgType {
    fn arg_type(&self) -> Result<TypeHandle, DescriptorError>;
}

/// By-value descriptor of `T`, for bindings implementing [`NoArgType`] on their own
/// foreign types.
pub fn byval_arg_of<T: NoArgClass>() -> Result<TypeHandle, DescriptorError> {
    type_system()?.byval_arg(T::no_arg_class()?)
}

/// By-reference descriptor of `T`. Successful lookups are remembered per type.
pub fn this_arg_of<T: NoArgClass + 'static>() -> Result<TypeHandle, DescriptorError> {
    let cache = THIS_ARG_CACHE.get_or_init(DashMap::new);
    let key = TypeId::of::<T>();
    if let Some(hit) = cache.get(&key) {
        return Ok(*hit);
    }

    let class = T::no_arg_class()?;
    let ty = type_system()?.this_arg(class)?;
    trace!(pointee = type_name::<T>(), ?class, ?ty, "resolved this-arg descriptor");
    cache.insert(key, ty);
    Ok(ty)
}

impl<T: NoArgClass + 'static> NoArgType for Ptr<T> {
    fn no_arg_type() -> Result<TypeHandle, DescriptorError> {
        this_arg_of::<T>()
    }
}

impl<T: NoArgClass + 'static> ArgType for Ptr<T> {
    fn arg_type(&self) -> Result<TypeHandle, DescriptorError> {
        <Self as NoArgType>::no_arg_type()
    }
}
