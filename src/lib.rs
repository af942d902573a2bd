//! # foreign-interop
//!
//! Low-level plumbing for bindings to objects owned by a foreign managed runtime:
//! field addressing by offset, exact-size byte copy and move, compile-time
//! reference/value classification, and the non-owning [`Ptr`] wrapper together
//! with its type-descriptor bridge.
//!
//! None of this allocates, frees or type-checks foreign objects. Layout facts
//! (offsets, sizes, classifications) come from the runtime's metadata through the
//! generated bindings, and are trusted as given.
pub mod abi;
pub mod bytes;
pub mod classify;
pub mod config;
pub mod descriptor;
pub mod error;
#[cfg(not(feature = "hidden-visibility"))]
pub mod exports;
pub mod field;
pub mod offset;
pub mod ptr;
pub mod value;

pub use bytes::{copy_by_byte, copy_by_byte_raw, move_by_byte, move_by_byte_raw};
pub use classify::{classify, Classification, Classified, ReferenceHandle};
pub use descriptor::{ArgType, ClassHandle, ForeignTypeSystem, NoArgClass, NoArgType, TypeHandle};
pub use error::DescriptorError;
pub use offset::{get_at_offset, ByteOffset};
pub use ptr::Ptr;
pub use value::ValueBlob;
