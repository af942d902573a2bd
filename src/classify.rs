//! Compile-time classification of types into the foreign runtime's reference and
//! value categories.
//!
//! A reference-classified type is a handle whose identity is owned by the runtime
//! (an object reference). A value-classified type is stored inline and copied by
//! bytes. Generated bindings register their types with [`value_type!`] or
//! [`reference_type!`]; everything else falls back to the trait defaults, which
//! classify as neither.
//!
//! [`value_type!`]: crate::value_type
//! [`reference_type!`]: crate::reference_type
use std::ffi::c_void;

/// Classification of a type, as seen by the surrounding binding layer.
pub trait Classified {
    const IS_REFERENCE: bool = false;
    const IS_VALUE: bool = false;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    pub is_reference: bool,
    pub is_value: bool,
}

impl Classification {
    pub const NEITHER: Self = Classification {
        is_reference: false,
        is_value: false,
    };
    pub const REFERENCE: Self = Classification {
        is_reference: true,
        is_value: false,
    };
    pub const VALUE: Self = Classification {
        is_reference: false,
        is_value: true,
    };
}

/// Reads the classification of `T`. Resolved entirely at compile time.
pub const fn classify<T: Classified + ?Sized>() -> Classification {
    Classification {
        is_reference: T::IS_REFERENCE,
        is_value: T::IS_VALUE,
    }
}

/// A reference-classified type that is represented by a single object address.
///
/// Reference fields store exactly this address, so reading or writing such a field
/// goes through [`from_raw`](Self::from_raw) and [`as_raw`](Self::as_raw).
pub trait ReferenceHandle: Classified + Copy {
    fn from_raw(raw: *mut c_void) -> Self;
    fn as_raw(&self) -> *mut c_void;
}

/// Registers types as value-classified.
#[macro_export]
macro_rules! value_type {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::classify::Classified for $t {
                const IS_VALUE: bool = true;
            }
        )+
    };
}

/// Registers types as reference-classified.
#[macro_export]
macro_rules! reference_type {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::classify::Classified for $t {
                const IS_REFERENCE: bool = true;
            }
        )+
    };
}

// Scalars are inline values in every managed runtime this layer targets.
value_type!(bool, u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64, char);

/// Fails to compile when instantiated with a reference-classified `T`.
pub(crate) struct AssertNotReference<T: ?Sized>(std::marker::PhantomData<T>);

impl<T: Classified + ?Sized> AssertNotReference<T> {
    pub(crate) const OK: () = assert!(
        !T::IS_REFERENCE,
        "reference-classified types carry their own handle and cannot be wrapped in Ptr"
    );
}

/// Fails to compile when instantiated with a `T` that is not reference-classified.
pub(crate) struct AssertReference<T: ?Sized>(std::marker::PhantomData<T>);

impl<T: Classified + ?Sized> AssertReference<T> {
    pub(crate) const OK: () = assert!(
        T::IS_REFERENCE,
        "expected a reference-classified type"
    );
}
