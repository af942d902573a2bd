//! Native ABI description of the types marshalled across the foreign boundary.
//!
//! Argument marshalling for calls into the runtime is built on libffi. A `Ptr<T>`
//! is described as a plain pointer, whatever `T` is, and is passed by handing
//! libffi the address of the wrapper itself.
use crate::ptr::Ptr;
use libffi::middle::{Arg, Type};

pub trait AbiType {
    fn ffi_type() -> Type;
}

macro_rules! scalar_abi {
    ($($t:ty => $ctor:ident),+ $(,)?) => {
        $(
            impl AbiType for $t {
                fn ffi_type() -> Type {
                    Type::$ctor()
                }
            }
        )+
    };
}

scalar_abi!(
    u8 => u8,
    i8 => i8,
    u16 => u16,
    i16 => i16,
    u32 => u32,
    i32 => i32,
    u64 => u64,
    i64 => i64,
    usize => usize,
    isize => isize,
    f32 => f32,
    f64 => f64,
);

impl<T> AbiType for Ptr<T> {
    fn ffi_type() -> Type {
        Type::pointer()
    }
}

impl<T> Ptr<T> {
    /// The libffi argument for this pointer. It borrows `self`, so the wrapper must
    /// outlive the call.
    pub fn as_arg(&self) -> Arg {
        Arg::new(self)
    }
}
