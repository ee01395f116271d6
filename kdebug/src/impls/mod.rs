//! `Inspect` implementations for the standard library's types.

mod map;
mod opaque;
mod pointer;
mod scalar;
mod sequence;
mod tuple;

#[cfg(feature = "num-complex")]
mod complex;

pub use opaque::Opaque;
