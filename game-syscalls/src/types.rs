// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use bytemuck::{Pod, Zeroable};

/// The most clients a server can have connected at once.
pub const MAX_CLIENTS: usize = 64;

/// A set of client numbers, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct ClientList {
    bits: [u32; MAX_CLIENTS / 32],
}

impl ClientList {
    /// A list with every client in it.
    pub fn all() -> ClientList {
        ClientList {
            bits: [u32::MAX; MAX_CLIENTS / 32],
        }
    }

    /// Adds `client`. Returns false if the number is out of range.
    pub fn insert(&mut self, client: usize) -> bool {
        let Some(word) = self.bits.get_mut(client / 32) else {
            return false;
        };
        *word |= 1 << (client % 32);
        true
    }

    pub fn remove(&mut self, client: usize) {
        if let Some(word) = self.bits.get_mut(client / 32) {
            *word &= !(1 << (client % 32));
        }
    }

    pub fn contains(&self, client: usize) -> bool {
        match self.bits.get(client / 32) {
            Some(word) => word & (1 << (client % 32)) != 0,
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&word| word == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientList, MAX_CLIENTS};

    #[test]
    fn client_lists_are_bitmasks() {
        let mut list = ClientList::default();
        assert!(list.is_empty());

        assert!(list.insert(0));
        assert!(list.insert(33));
        assert!(!list.insert(MAX_CLIENTS), "out of range");
        assert!(list.contains(33));
        assert!(!list.contains(32));
        assert!(!list.contains(1000));

        list.remove(33);
        list.remove(1000);
        assert!(!list.contains(33));
        assert!(list.contains(0));
        assert_eq!(8, size_of::<ClientList>());
        assert!((0..MAX_CLIENTS).all(|client| ClientList::all().contains(client)));
    }
}
