// Copyright 2025 the Brackets Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational storage for registered regions.

use alloc::vec::Vec;

/// Handle of a registered region (generational).
///
/// Handles are returned by [`Brackets::register`](crate::Brackets::register)
/// and owned by the caller. Once a region is unregistered its handle becomes
/// stale: the slot may be reused, but with a bumped generation, so a stale
/// handle never addresses the new occupant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub(crate) u32, pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Registry<T> {
    slots: Vec<Option<T>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    /// Insert the value built by `f`, which receives the value's future handle.
    pub(crate) fn insert_with(&mut self, f: impl FnOnce(RegionId) -> T) -> RegionId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "region slots are addressed with 32-bit indices"
            )]
            let id = RegionId::new(idx as u32, generation);
            self.slots[idx] = Some(f(id));
            id
        } else {
            let generation = 1_u32;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "region slots are addressed with 32-bit indices"
            )]
            let id = RegionId::new(self.slots.len() as u32, generation);
            self.slots.push(Some(f(id)));
            self.generations.push(generation);
            id
        }
    }

    /// Remove and return the value for a live handle.
    pub(crate) fn remove(&mut self, id: RegionId) -> Option<T> {
        if !self.is_alive(id) {
            return None;
        }
        let value = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        value
    }

    /// A handle is live if its slot is occupied and its generation matches.
    pub(crate) fn is_alive(&self, id: RegionId) -> bool {
        self.generations.get(id.idx()).copied() == Some(id.1)
            && self.slots.get(id.idx()).is_some_and(Option::is_some)
    }

    pub(crate) fn get(&self, id: RegionId) -> Option<&T> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: RegionId) -> Option<&mut T> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }

    /// Live values in slot order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (RegionId, &mut T)> {
        let generations = &self.generations;
        self.slots.iter_mut().enumerate().filter_map(move |(idx, slot)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "region slots are addressed with 32-bit indices"
            )]
            let id = RegionId::new(idx as u32, generations[idx]);
            slot.as_mut().map(|value| (id, value))
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut reg = Registry::default();
        let a = reg.insert_with(|_| "a");
        let b = reg.insert_with(|_| "b");
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(a), Some(&"a"));
        assert_eq!(reg.remove(a), Some("a"));
        assert!(!reg.is_alive(a));
        assert_eq!(reg.get(a), None);
        assert_eq!(reg.remove(a), None, "double remove is a no-op");
        assert_eq!(reg.get(b), Some(&"b"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn builder_sees_its_own_handle() {
        let mut reg = Registry::default();
        let id = reg.insert_with(|id| id);
        assert_eq!(reg.get(id), Some(&id));
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut reg = Registry::default();
        let a = reg.insert_with(|_| 1);
        let _ = reg.remove(a);
        let b = reg.insert_with(|_| 2);
        assert_eq!(a.idx(), b.idx());
        assert!(b.1 > a.1, "generation must increase on reuse");
        assert_eq!(reg.get(a), None, "stale handle must not see the new occupant");
        assert_eq!(reg.get(b), Some(&2));
    }

    #[test]
    fn iter_mut_skips_free_slots() {
        let mut reg = Registry::default();
        let a = reg.insert_with(|_| 1);
        let b = reg.insert_with(|_| 2);
        let c = reg.insert_with(|_| 3);
        let _ = reg.remove(b);
        for (_, v) in reg.iter_mut() {
            *v *= 10;
        }
        let ids: Vec<_> = reg.iter_mut().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, c]);
        assert_eq!(reg.get(c), Some(&30));
    }
}
