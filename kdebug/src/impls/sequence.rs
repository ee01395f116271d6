use alloc::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};
use std::collections::HashSet;

use crate::{Inspect, ValueHandle, type_name_of};

fn elements<'mem, T: Inspect + 'mem>(
    items: impl Iterator<Item = &'mem T>,
) -> Vec<&'mem dyn Inspect> {
    items.map(|item| item as &dyn Inspect).collect()
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::array(type_name_of::<Self>(), elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::slice(type_name_of::<Self>(), elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::slice(type_name_of::<Self>(), elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::slice(type_name_of::<Self>(), elements(self.iter()))
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::slice(type_name_of::<Self>(), elements(self.iter()))
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::unordered_slice(type_name_of::<HashSet<T>>(), elements(self.iter()))
    }
}
