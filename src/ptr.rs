//! A non-owning pointer to foreign-owned memory.
use crate::classify::{AssertNotReference, Classified};
use std::{
    any::type_name,
    ffi::c_void,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::size_of,
    ptr::NonNull,
};

/// Address of a foreign-owned `T`, or of untyped memory when `T` is `c_void`.
///
/// `Ptr` never owns what it points at: the foreign runtime decides when the pointee
/// lives and dies, and dropping a `Ptr` does nothing. It is exactly one address wide
/// and passes across the C ABI as a bare pointer.
///
/// Typed construction is reserved for types that are not reference-classified, since
/// those already are handles. Wrapping one is rejected when the program is compiled:
///
/// ```compile_fail
/// use foreign_interop::{reference_type, Ptr};
///
/// #[derive(Clone, Copy)]
/// struct GameObject(*mut std::ffi::c_void);
/// reference_type!(GameObject);
///
/// let mut object = GameObject(std::ptr::null_mut());
/// let wrapped = Ptr::from(&mut object as *mut GameObject);
/// println!("{:?}", wrapped);
/// ```
///
/// Every other typed path carries the same check, including the unvalidated
/// [`from_raw`](Ptr::from_raw):
///
/// ```compile_fail
/// use foreign_interop::{reference_type, Ptr};
///
/// #[derive(Clone, Copy)]
/// struct Transform(*mut std::ffi::c_void);
/// reference_type!(Transform);
///
/// let wrapped = Ptr::<Transform>::from_raw(std::ptr::null_mut());
/// println!("{:?}", wrapped);
/// ```
///
/// and [`cast`](Ptr::cast), which cannot be used to smuggle a reference type in:
///
/// ```compile_fail
/// use foreign_interop::{reference_type, Ptr};
///
/// #[derive(Clone, Copy)]
/// struct Camera(*mut std::ffi::c_void);
/// reference_type!(Camera);
///
/// let mut word = 0usize;
/// let wrapped: Ptr<Camera> = Ptr::from(&mut word).cast();
/// println!("{:?}", wrapped);
/// ```
///
/// The same code with a value-classified type compiles:
///
/// ```
/// use foreign_interop::{value_type, Ptr};
///
/// #[derive(Clone, Copy)]
/// struct Color([u8; 16]);
/// value_type!(Color);
///
/// let mut color = Color([0; 16]);
/// let wrapped = Ptr::from(&mut color as *mut Color);
/// println!("{:?}", wrapped);
/// ```
#[repr(transparent)]
pub struct Ptr<T = c_void> {
    instance: *mut c_void,
    _marker: PhantomData<*mut T>,
}

const _: () = assert!(size_of::<Ptr<c_void>>() == size_of::<*mut c_void>());

impl<T> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Ptr<T> {}

impl<T> PartialEq for Ptr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance
    }
}
impl<T> Eq for Ptr<T> {}

impl<T> Hash for Ptr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.instance, state);
    }
}

impl<T> Debug for Ptr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr<{}>({:p})", type_name::<T>(), self.instance)
    }
}

// A Ptr is a view, not a foreign reference or an inline foreign value.
impl<T> Classified for Ptr<T> {
    const IS_REFERENCE: bool = false;
    const IS_VALUE: bool = false;
}

impl<T> Ptr<T> {
    /// The raw address, for lower-level marshalling that expects an untyped pointer.
    #[inline(always)]
    pub const fn convert(self) -> *mut c_void {
        self.instance
    }

    pub fn is_null(self) -> bool {
        self.instance.is_null()
    }

    /// The address without exposing its provenance.
    pub fn addr(self) -> usize {
        sptr::Strict::addr(self.instance)
    }

    /// Forgets the pointee type.
    pub const fn erase(self) -> Ptr<c_void> {
        Ptr {
            instance: self.instance,
            _marker: PhantomData,
        }
    }
}

impl Ptr<c_void> {
    pub const fn new(instance: *mut c_void) -> Self {
        Self {
            instance,
            _marker: PhantomData,
        }
    }

    pub const fn null() -> Self {
        Self::new(std::ptr::null_mut())
    }

    /// Rebuilds a pointer from an address previously exposed with
    /// [`expose_addr`](Self::expose_addr), e.g. one handed over by the foreign runtime
    /// as an integer.
    pub fn from_exposed_addr(addr: usize) -> Self {
        Self::new(sptr::from_exposed_addr_mut(addr))
    }

    pub fn expose_addr(self) -> usize {
        sptr::Strict::expose_addr(self.instance)
    }
}

impl From<*mut c_void> for Ptr<c_void> {
    #[inline(always)]
    fn from(instance: *mut c_void) -> Self {
        Self::new(instance)
    }
}

impl From<Ptr<c_void>> for *mut c_void {
    fn from(ptr: Ptr<c_void>) -> Self {
        ptr.instance
    }
}

impl<T: Classified> Ptr<T> {
    /// Wraps an untyped address as a `Ptr<T>`. Nothing about the pointee is checked.
    #[inline(always)]
    pub const fn from_raw(instance: *mut c_void) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = AssertNotReference::<T>::OK;
        Self {
            instance,
            _marker: PhantomData,
        }
    }

    /// Wraps a shared reference. Only reads through the result are sound.
    pub const fn from_ref(value: &T) -> Self {
        Self::from_raw(value as *const T as *mut c_void)
    }

    #[inline(always)]
    pub const fn as_ptr(self) -> *mut T {
        self.instance.cast()
    }

    /// Views the pointee as a `T`.
    ///
    /// # Safety
    ///
    /// The address must denote a live, correctly laid out and aligned `T` for the
    /// whole of `'a`, and nothing may mutate it during that time.
    #[inline(always)]
    pub unsafe fn as_ref<'a>(self) -> &'a T {
        unsafe { &*self.as_ptr() }
    }

    /// Views the pointee as a mutable `T`.
    ///
    /// # Safety
    ///
    /// As for [`as_ref`](Self::as_ref), and additionally no other reference to the
    /// pointee may be used during `'a`.
    #[inline(always)]
    pub unsafe fn as_mut<'a>(self) -> &'a mut T {
        unsafe { &mut *self.as_ptr() }
    }

    /// Copies the pointee out.
    ///
    /// # Safety
    ///
    /// The address must be valid for reads of a `T`. It need not be aligned.
    pub unsafe fn read(self) -> T
    where
        T: Copy,
    {
        unsafe { self.as_ptr().read_unaligned() }
    }

    /// Overwrites the pointee without dropping the old value.
    ///
    /// # Safety
    ///
    /// The address must be valid for writes of a `T`. It need not be aligned.
    pub unsafe fn write(self, value: T) {
        unsafe { self.as_ptr().write_unaligned(value) }
    }

    /// Reinterprets the pointee as another non-reference type.
    pub const fn cast<U: Classified>(self) -> Ptr<U> {
        Ptr::from_raw(self.instance)
    }
}

impl<T: Classified> From<*mut T> for Ptr<T> {
    #[inline(always)]
    fn from(instance: *mut T) -> Self {
        Self::from_raw(instance.cast())
    }
}

impl<T: Classified> From<NonNull<T>> for Ptr<T> {
    fn from(instance: NonNull<T>) -> Self {
        Self::from_raw(instance.as_ptr().cast())
    }
}

impl<T: Classified> From<&mut T> for Ptr<T> {
    fn from(value: &mut T) -> Self {
        Self::from_raw((value as *mut T).cast())
    }
}
