use core::{any::Any, fmt::Debug};
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::{Inspect, ValueHandle, type_name_of};

macro_rules! impl_inspect_for_fn_ptr {
    ($($args:ident),*) => {
        impl<R, $($args),*> Inspect for fn($($args),*) -> R {
            fn inspect(&self) -> ValueHandle<'_> {
                ValueHandle::opaque(type_name_of::<Self>(), format_args!("{:p}", *self as *const ()))
            }
        }
    };
}

impl_inspect_for_fn_ptr!();
impl_inspect_for_fn_ptr!(A);
impl_inspect_for_fn_ptr!(A, B);
impl_inspect_for_fn_ptr!(A, B, C);
impl_inspect_for_fn_ptr!(A, B, C, D);

macro_rules! impl_inspect_for_channel {
    ($($channel:ident),+) => {
        $(
            impl<T> Inspect for $channel<T> {
                fn inspect(&self) -> ValueHandle<'_> {
                    ValueHandle::opaque(type_name_of::<Self>(), format_args!("{:p}", self as *const Self))
                }
            }
        )+
    };
}

impl_inspect_for_channel!(Sender, SyncSender, Receiver);

macro_rules! impl_inspect_for_dyn_any {
    ($($ty:ty),+) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> ValueHandle<'_> {
                    ValueHandle::opaque(type_name_of::<Self>(), format_args!("{self:?}"))
                }
            }
        )+
    };
}

impl_inspect_for_dyn_any!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

/// Makes a value of any `Debug` type dumpable, as [`Kind::Unknown`](crate::Kind::Unknown).
///
/// ```
/// use kdebug::Opaque;
/// use std::time::Duration;
///
/// let lines = kdebug::dump(&Opaque(Duration::from_millis(1500)));
/// assert_eq!(lines, ["[Unknown] : 1.5s"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opaque<T>(pub T);

impl<T: Debug> Inspect for Opaque<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::unknown(type_name_of::<T>(), format_args!("{:?}", self.0))
    }
}
