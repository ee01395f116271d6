use alloc::{boxed::Box, rc::Rc, sync::Arc};
use core::ptr::NonNull;

use crate::{Inspect, ValueHandle, type_name_of};

// References are not indirection worth showing: `&str` dumps as text and a
// `&Vec<T>` field dumps as the vector.
impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> ValueHandle<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn inspect(&self) -> ValueHandle<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer(type_name_of::<Self>(), Some(&**self))
    }
}

impl<T: Inspect> Inspect for Rc<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer(type_name_of::<Self>(), Some(&**self))
    }
}

impl<T: Inspect> Inspect for Arc<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer(type_name_of::<Self>(), Some(&**self))
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer(
            type_name_of::<Self>(),
            self.as_ref().map(|value| value as &dyn Inspect),
        )
    }
}

impl<T: ?Sized> Inspect for *const T {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::opaque_pointer(type_name_of::<Self>(), self.cast::<()>() as usize)
    }
}

impl<T: ?Sized> Inspect for *mut T {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::opaque_pointer(type_name_of::<Self>(), self.cast::<()>() as usize)
    }
}

impl<T: ?Sized> Inspect for NonNull<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::opaque_pointer(type_name_of::<Self>(), self.cast::<()>().as_ptr() as usize)
    }
}
