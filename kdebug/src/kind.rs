//! The closed set of value shapes every inspected value falls into.

use crate::{Inspect, try_inspect};

/// Which of the fixed value shapes a value has.
///
/// Every [`Inspect`] implementation produces exactly one of these. The set is
/// closed: renderers match on it exhaustively, and anything that fits nowhere
/// else is [`Kind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// The absence of a value (`()`, `PhantomData`).
    Nil,
    /// `bool`.
    Bool,
    /// Every signed and unsigned integer width, plus `isize` and `char`.
    Integer,
    /// `usize`, the pointer-sized integer. Rendered in hex.
    PointerSizedInteger,
    /// `f32`, `f64` and complex numbers.
    FloatOrComplex,
    /// Fixed-length arrays.
    Array,
    /// Opaque callables and channel ends: printable, not introspectable.
    ChannelOrFunctionOrInterface,
    /// Key/value collections.
    Map,
    /// Owning or shared indirection that may be empty (`Box`, `Rc`, `Arc`, `Option`).
    Pointer,
    /// Growable or borrowed sequences (`Vec`, `[T]`, sets).
    Slice,
    /// Text.
    String,
    /// Named fields in declaration order.
    Struct,
    /// Raw pointers: the address is shown, the pointee never read.
    OpaquePointer,
    /// Anything else.
    Unknown,
}

impl Kind {
    /// Lowercase name, as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::PointerSizedInteger => "uptr",
            Kind::FloatOrComplex => "float",
            Kind::Array => "array",
            Kind::ChannelOrFunctionOrInterface => "opaque",
            Kind::Map => "map",
            Kind::Pointer => "ptr",
            Kind::Slice => "slice",
            Kind::String => "string",
            Kind::Struct => "struct",
            Kind::OpaquePointer => "opaqueptr",
            Kind::Unknown => "unknown",
        }
    }

    /// Returns true for kinds that render as a single line with no children.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Kind::Nil
                | Kind::Bool
                | Kind::Integer
                | Kind::PointerSizedInteger
                | Kind::FloatOrComplex
                | Kind::ChannelOrFunctionOrInterface
                | Kind::String
                | Kind::Unknown
        )
    }

    /// Returns true for kinds that may have child values.
    pub const fn is_composite(self) -> bool {
        !self.is_scalar()
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the kind of `value`.
///
/// Never panics: an `Inspect` implementation that faults is classified as
/// [`Kind::Unknown`].
pub fn classify(value: &dyn Inspect) -> Kind {
    match try_inspect(value) {
        Ok(handle) => handle.kind(),
        Err(_) => Kind::Unknown,
    }
}
