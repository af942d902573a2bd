//! Build-time configuration.
//!
//! The only switch is the `hidden-visibility` feature, which compiles the C-ABI
//! primitives in [`crate::exports`] out of the crate. Without it they are
//! `#[no_mangle]` symbols that land in whatever library or executable links this
//! crate.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Primitives are not compiled in.
    Hidden,
    /// Primitives are compiled in with unmangled external names.
    Default,
}

impl Visibility {
    pub const fn exports_symbols(self) -> bool {
        matches!(self, Visibility::Default)
    }
}

#[cfg(feature = "hidden-visibility")]
pub const VISIBILITY: Visibility = Visibility::Hidden;

#[cfg(not(feature = "hidden-visibility"))]
pub const VISIBILITY: Visibility = Visibility::Default;
