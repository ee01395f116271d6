use alloc::string::String;

use crate::Kind;

/// Errors that can occur when inspecting a value.
///
/// None of these ever escape the dumper, the field formatter or
/// [`project`](crate::project): they degrade to text or to an empty (or
/// partial) mapping. The fallible entry points ([`try_inspect`](crate::try_inspect),
/// [`ValueHandle::deref`](crate::ValueHandle::deref),
/// [`try_project`](crate::try_project)) hand them to callers that want them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntrospectError {
    /// The value's kind does not support the requested operation.
    UnsupportedKind {
        /// The type that was inspected.
        type_name: String,
        /// Its kind.
        kind: Kind,
    },

    /// Tried to dereference a null or empty pointer.
    NilDereference {
        /// The pointer's type.
        type_name: String,
    },

    /// Tried to project a value that is not struct-shaped.
    NonStructInput {
        /// The type that was projected.
        type_name: String,
    },

    /// An `Inspect` implementation panicked while being inspected.
    Fault {
        /// The panic message, if it carried one.
        message: String,
    },
}

impl core::fmt::Display for IntrospectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IntrospectError::UnsupportedKind { type_name, kind } => {
                write!(f, "{type_name} is a {kind}, which does not support this operation")
            }
            IntrospectError::NilDereference { type_name } => {
                write!(f, "cannot dereference a nil {type_name}")
            }
            IntrospectError::NonStructInput { type_name } => {
                write!(f, "{type_name} is not struct-shaped")
            }
            IntrospectError::Fault { message } => write!(f, "introspection fault: {message}"),
        }
    }
}

impl core::error::Error for IntrospectError {}
