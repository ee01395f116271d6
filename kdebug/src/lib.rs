#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// Lets `#[derive(Inspect)]` expand to `::kdebug::...` paths inside this crate too.
extern crate self as kdebug;

mod error;
pub use error::*;

mod kind;
pub use kind::*;

mod handle;
pub use handle::*;

mod impls;
pub use impls::Opaque;

mod dump;
pub use dump::*;

mod display;
pub use display::*;

mod field;
pub use field::*;

mod project;
pub use project::*;

mod caller;
#[doc(hidden)]
pub use caller::__strip_function_name;

pub use kdebug_macros::Inspect;
