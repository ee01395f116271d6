use alloc::{collections::BTreeMap, vec::Vec};
use indexmap::IndexMap;
use std::collections::HashMap;

use crate::{Inspect, ValueHandle, type_name_of};

fn entries<'mem, K: Inspect + 'mem, V: Inspect + 'mem>(
    items: impl Iterator<Item = (&'mem K, &'mem V)>,
) -> Vec<(&'mem dyn Inspect, &'mem dyn Inspect)> {
    items
        .map(|(k, v)| (k as &dyn Inspect, v as &dyn Inspect))
        .collect()
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::map(type_name_of::<Self>(), entries(self.iter()))
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::unordered_map(type_name_of::<HashMap<K, V>>(), entries(self.iter()))
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for IndexMap<K, V, S> {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::map(type_name_of::<IndexMap<K, V>>(), entries(self.iter()))
    }
}
