//! Read-only views over inspectable values.

use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};
use core::{any::Any, fmt::Display, panic::AssertUnwindSafe};

use crate::{Dumper, IntrospectError, Kind, format_inline};

/// A value that can be taken apart at runtime.
///
/// This is the only thing the dumper, the field formatter and the projector
/// need from a value. Implementations exist for the standard library's
/// scalars, strings, collections, pointers and tuples; user types get one
/// with `#[derive(Inspect)]`:
///
/// ```
/// use kdebug::Inspect;
///
/// #[derive(Inspect)]
/// struct Person {
///     name: String,
///     #[inspect(tag(json = "age_years"))]
///     age: u32,
/// }
///
/// let lines = kdebug::dump(&Person { name: "x".into(), age: 5 });
/// assert_eq!(lines[0], "struct[Person] ==> {");
/// ```
pub trait Inspect {
    /// Returns a view of this value: its kind, type name and children.
    fn inspect(&self) -> ValueHandle<'_>;
}

/// Inspects `value`, turning a panicking `Inspect` implementation into an
/// [`IntrospectError::Fault`].
pub fn try_inspect<'mem>(value: &'mem dyn Inspect) -> Result<ValueHandle<'mem>, IntrospectError> {
    std::panic::catch_unwind(AssertUnwindSafe(|| value.inspect())).map_err(|payload| {
        let message = panic_message(payload);
        tracing::warn!(%message, "Inspect implementation panicked");
        IntrospectError::Fault { message }
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Returns the type name of `T` with module paths stripped, e.g.
/// `Vec<String>` rather than `alloc::vec::Vec<alloc::string::String>`.
pub fn type_name_of<T: ?Sized>() -> String {
    short_type_name(core::any::type_name::<T>())
}

/// Strips the module path from every path segment of a type name.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => {
                out.push(c);
                segment_start = out.len();
            }
        }
    }
    out
}

/// One field of a struct-shaped value.
#[derive(Clone, Copy)]
pub struct FieldHandle<'mem> {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    value: &'mem dyn Inspect,
}

impl<'mem> FieldHandle<'mem> {
    /// A field with no tags.
    pub fn new(name: &'static str, value: &'mem dyn Inspect) -> Self {
        Self {
            name,
            tags: &[],
            value,
        }
    }

    /// Attaches declared `key = value` tags.
    pub fn with_tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All declared tags, in declaration order.
    pub fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// The value of the tag named `key`, if declared. The last declaration wins.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// The field's value.
    pub fn value(&self) -> &'mem dyn Inspect {
        self.value
    }
}

impl core::fmt::Debug for FieldHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldHandle")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
enum Repr<'mem> {
    Nil,
    Text(String),
    Word(usize),
    Str(&'mem str),
    Elements(Vec<&'mem dyn Inspect>),
    Entries(Vec<(&'mem dyn Inspect, &'mem dyn Inspect)>),
    Target(Option<&'mem dyn Inspect>),
    Address(usize),
    Fields(Vec<FieldHandle<'mem>>),
}

/// A read-only view of one value: its [`Kind`], its type name, and for
/// composite kinds, its children.
///
/// Handles are built fresh by [`Inspect::inspect`] and borrow from the value
/// they describe. The constructor used decides the kind, so a handle's
/// accessors always agree with [`ValueHandle::kind`].
#[derive(Clone)]
pub struct ValueHandle<'mem> {
    kind: Kind,
    type_name: String,
    repr: Repr<'mem>,
}

impl<'mem> ValueHandle<'mem> {
    fn new(kind: Kind, type_name: impl Into<String>, repr: Repr<'mem>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            repr,
        }
    }

    /// The absence of a value.
    pub fn nil(type_name: impl Into<String>) -> Self {
        Self::new(Kind::Nil, type_name, Repr::Nil)
    }

    /// A boolean.
    pub fn bool(type_name: impl Into<String>, value: bool) -> Self {
        Self::new(Kind::Bool, type_name, Repr::Text(value.to_string()))
    }

    /// An integer of any width, rendered with its `Display` impl.
    pub fn integer(type_name: impl Into<String>, value: impl Display) -> Self {
        Self::new(Kind::Integer, type_name, Repr::Text(value.to_string()))
    }

    /// A pointer-sized integer.
    pub fn pointer_sized(type_name: impl Into<String>, value: usize) -> Self {
        Self::new(Kind::PointerSizedInteger, type_name, Repr::Word(value))
    }

    /// A floating point or complex number, rendered with its `Display` impl.
    pub fn float(type_name: impl Into<String>, value: impl Display) -> Self {
        Self::new(Kind::FloatOrComplex, type_name, Repr::Text(value.to_string()))
    }

    /// Text borrowed from the inspected value.
    pub fn string(type_name: impl Into<String>, value: &'mem str) -> Self {
        Self::new(Kind::String, type_name, Repr::Str(value))
    }

    /// A fixed-length sequence.
    pub fn array(type_name: impl Into<String>, elements: Vec<&'mem dyn Inspect>) -> Self {
        Self::new(Kind::Array, type_name, Repr::Elements(elements))
    }

    /// A growable or borrowed sequence, in its own order.
    pub fn slice(type_name: impl Into<String>, elements: Vec<&'mem dyn Inspect>) -> Self {
        Self::new(Kind::Slice, type_name, Repr::Elements(elements))
    }

    /// A sequence with no stable iteration order (hash sets). Elements are
    /// sorted by their single-line rendering, then by their full dump, so
    /// repeated dumps agree. Elements whose dumps are identical are
    /// indistinguishable in the output, whatever their order.
    pub fn unordered_slice(
        type_name: impl Into<String>,
        mut elements: Vec<&'mem dyn Inspect>,
    ) -> Self {
        elements.sort_by_cached_key(|element| {
            (format_inline(*element), Dumper::new().format(*element))
        });
        Self::slice(type_name, elements)
    }

    /// A map, in its own iteration order.
    pub fn map(
        type_name: impl Into<String>,
        entries: Vec<(&'mem dyn Inspect, &'mem dyn Inspect)>,
    ) -> Self {
        Self::new(Kind::Map, type_name, Repr::Entries(entries))
    }

    /// A map with no stable iteration order (hash maps). Entries are sorted
    /// by the single-line rendering of their keys so repeated dumps agree.
    /// Keys that render alike (`["a b"]` and `["a", "b"]`) are ordered by
    /// the full dump of the key, then of the value.
    pub fn unordered_map(
        type_name: impl Into<String>,
        mut entries: Vec<(&'mem dyn Inspect, &'mem dyn Inspect)>,
    ) -> Self {
        entries.sort_by_cached_key(|(key, value)| {
            let dumper = Dumper::new();
            (format_inline(*key), dumper.format(*key), dumper.format(*value))
        });
        Self::map(type_name, entries)
    }

    /// Indirection to `target`, or a nil pointer when `target` is `None`.
    pub fn pointer(type_name: impl Into<String>, target: Option<&'mem dyn Inspect>) -> Self {
        Self::new(Kind::Pointer, type_name, Repr::Target(target))
    }

    /// A raw pointer. Only its address is kept; `0` is the null pointer.
    pub fn opaque_pointer(type_name: impl Into<String>, address: usize) -> Self {
        Self::new(Kind::OpaquePointer, type_name, Repr::Address(address))
    }

    /// A struct-shaped value with fields in declaration order.
    pub fn structure(type_name: impl Into<String>, fields: Vec<FieldHandle<'mem>>) -> Self {
        Self::new(Kind::Struct, type_name, Repr::Fields(fields))
    }

    /// A callable, channel end or trait object: printable, not introspectable.
    pub fn opaque(type_name: impl Into<String>, text: impl Display) -> Self {
        Self::new(
            Kind::ChannelOrFunctionOrInterface,
            type_name,
            Repr::Text(text.to_string()),
        )
    }

    /// A value of no supported kind, described by `text`.
    pub fn unknown(type_name: impl Into<String>, text: impl Display) -> Self {
        Self::new(Kind::Unknown, type_name, Repr::Text(text.to_string()))
    }

    /// The value's kind.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The value's type name.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of elements, entries or fields, or the byte length of a string.
    /// `None` for kinds that have no length.
    pub fn len(&self) -> Option<usize> {
        match &self.repr {
            Repr::Str(s) => Some(s.len()),
            Repr::Elements(elements) => Some(elements.len()),
            Repr::Entries(entries) => Some(entries.len()),
            Repr::Fields(fields) => Some(fields.len()),
            Repr::Nil | Repr::Text(_) | Repr::Word(_) | Repr::Target(_) | Repr::Address(_) => {
                None
            }
        }
    }

    /// The rendered value of a scalar (`Bool`, `Integer`, `FloatOrComplex`,
    /// `ChannelOrFunctionOrInterface`, `Unknown`) or the content of a string.
    pub fn text(&self) -> Option<&str> {
        match &self.repr {
            Repr::Text(text) => Some(text),
            Repr::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value of a pointer-sized integer.
    pub fn word(&self) -> Option<usize> {
        match self.repr {
            Repr::Word(word) => Some(word),
            _ => None,
        }
    }

    /// The address held by an opaque pointer.
    pub fn address(&self) -> Option<usize> {
        match self.repr {
            Repr::Address(address) => Some(address),
            _ => None,
        }
    }

    /// Elements of an array or slice, in index order. Empty for other kinds.
    pub fn elements(&self) -> &[&'mem dyn Inspect] {
        match &self.repr {
            Repr::Elements(elements) => elements,
            _ => &[],
        }
    }

    /// The element at `index` of an array or slice.
    pub fn index(&self, index: usize) -> Option<&'mem dyn Inspect> {
        self.elements().get(index).copied()
    }

    /// Entries of a map. Empty for other kinds.
    pub fn entries(&self) -> &[(&'mem dyn Inspect, &'mem dyn Inspect)] {
        match &self.repr {
            Repr::Entries(entries) => entries,
            _ => &[],
        }
    }

    /// The map value whose key renders (see [`format_inline`]) as `key`.
    pub fn get(&self, key: &str) -> Option<&'mem dyn Inspect> {
        self.entries()
            .iter()
            .find(|(k, _)| format_inline(*k) == key)
            .map(|(_, v)| *v)
    }

    /// Fields of a struct-shaped value, in declaration order. Empty for
    /// other kinds.
    pub fn fields(&self) -> &[FieldHandle<'mem>] {
        match &self.repr {
            Repr::Fields(fields) => fields,
            _ => &[],
        }
    }

    /// The first field declared as `name`.
    pub fn field(&self, name: &str) -> Option<&FieldHandle<'mem>> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Returns true for a pointer or opaque pointer that points nowhere.
    pub fn is_nil_pointer(&self) -> bool {
        matches!(self.repr, Repr::Target(None) | Repr::Address(0))
    }

    /// Follows a pointer.
    ///
    /// Fails with [`IntrospectError::NilDereference`] for a nil pointer and
    /// with [`IntrospectError::UnsupportedKind`] for everything that is not a
    /// readable pointer, including non-null opaque pointers, which are
    /// never read through.
    pub fn deref(&self) -> Result<&'mem dyn Inspect, IntrospectError> {
        match self.repr {
            Repr::Target(Some(target)) => Ok(target),
            Repr::Target(None) | Repr::Address(0) => Err(IntrospectError::NilDereference {
                type_name: self.type_name.clone(),
            }),
            _ => Err(IntrospectError::UnsupportedKind {
                type_name: self.type_name.clone(),
                kind: self.kind,
            }),
        }
    }
}

impl core::fmt::Debug for ValueHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueHandle")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// A handle dumps as the value it was taken from, so projections can be
// dumped directly.
impl Inspect for ValueHandle<'_> {
    fn inspect(&self) -> ValueHandle<'_> {
        self.clone()
    }
}
