use alloc::{format, vec};

use crate::{FieldHandle, Inspect, ValueHandle, type_name_of};

macro_rules! impl_inspect_for_tuple {
    ($($elems:ident.$idx:tt),+) => {
        impl<$($elems: Inspect),+> Inspect for ($($elems,)+) {
            fn inspect(&self) -> ValueHandle<'_> {
                ValueHandle::structure(
                    type_name_of::<Self>(),
                    vec![$(FieldHandle::new(stringify!($idx), &self.$idx)),+],
                )
            }
        }
    };
}

impl_inspect_for_tuple!(A.0);
impl_inspect_for_tuple!(A.0, B.1);
impl_inspect_for_tuple!(A.0, B.1, C.2);
impl_inspect_for_tuple!(A.0, B.1, C.2, D.3);
impl_inspect_for_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_inspect_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);

// Dumped like a derived enum: a struct named after the active variant.
impl<T: Inspect, E: Inspect> Inspect for Result<T, E> {
    fn inspect(&self) -> ValueHandle<'_> {
        let ty = type_name_of::<Self>();
        match self {
            Ok(value) => {
                ValueHandle::structure(format!("{ty}::Ok"), vec![FieldHandle::new("0", value)])
            }
            Err(error) => {
                ValueHandle::structure(format!("{ty}::Err"), vec![FieldHandle::new("0", error)])
            }
        }
    }
}
