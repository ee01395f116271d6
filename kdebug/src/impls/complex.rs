use num_complex::Complex;

use crate::{Inspect, ValueHandle, type_name_of};

impl Inspect for Complex<f32> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::float(type_name_of::<Self>(), self)
    }
}

impl Inspect for Complex<f64> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::float(type_name_of::<Self>(), self)
    }
}
