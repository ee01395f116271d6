use alloc::{borrow::Cow, string::String};
use core::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::{Inspect, ValueHandle, type_name_of};

impl Inspect for () {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::nil("()")
    }
}

impl<T: ?Sized> Inspect for PhantomData<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::nil(type_name_of::<Self>())
    }
}

impl Inspect for bool {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::bool("bool", *self)
    }
}

macro_rules! impl_inspect_for_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> ValueHandle<'_> {
                    ValueHandle::integer(stringify!($ty), self)
                }
            }
        )+
    };
}

impl_inspect_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, char);

impl Inspect for usize {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer_sized("usize", *self)
    }
}

impl Inspect for f32 {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::float("f32", self)
    }
}

impl Inspect for f64 {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::float("f64", self)
    }
}

impl Inspect for str {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::string("str", self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::string("String", self)
    }
}

impl Inspect for Cow<'_, str> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::string("Cow<str>", self)
    }
}

impl Inspect for Path {
    fn inspect(&self) -> ValueHandle<'_> {
        match self.to_str() {
            Some(path) => ValueHandle::string("Path", path),
            None => ValueHandle::unknown("Path", self.display()),
        }
    }
}

impl Inspect for PathBuf {
    fn inspect(&self) -> ValueHandle<'_> {
        match self.to_str() {
            Some(path) => ValueHandle::string("PathBuf", path),
            None => ValueHandle::unknown("PathBuf", self.display()),
        }
    }
}
