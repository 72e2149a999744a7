//! Growable ordered container for directory entries.
//!
//! `EntryStore` tracks its own logical capacity instead of relying on
//! whatever `Vec` decides to allocate: capacity starts at the requested
//! value and doubles when full, so the growth sequence is predictable.
//! Clearing keeps the allocation around for the next directory scan.

use std::ops::Range;
use std::slice;

use crate::entry::Entry;
use crate::error::{BrowserError, Result};

/// Capacity used when the caller asks for zero
pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
    capacity: usize,
}

impl EntryStore {
    /// Create an empty store able to hold `initial_capacity` entries
    /// without growing (or [`DEFAULT_CAPACITY`] when zero is passed).
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        let mut store = Self {
            entries: Vec::new(),
            capacity: 0,
        };
        let capacity = if initial_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            initial_capacity
        };
        store.reserve_to(capacity)?;
        Ok(store)
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the store can hold before it has to grow
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an entry at the end, doubling capacity when the store is full.
    ///
    /// If growing fails the store is left exactly as it was.
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        if self.entries.len() == self.capacity {
            let requested = if self.capacity == 0 {
                DEFAULT_CAPACITY
            } else {
                self.capacity.saturating_mul(2)
            };
            self.reserve_to(requested)?;
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry at `index`, shifting later entries one slot left.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(BrowserError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Index of the first entry called `name`
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name() == name)
    }

    /// Drop all entries but keep the allocated capacity
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Like [`get`](Self::get), but reports a missing index as an error
    pub fn try_get(&self, index: usize) -> Result<&Entry> {
        self.entries.get(index).ok_or(BrowserError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Entries in `range`, clipped to the current length
    pub fn slice(&self, range: Range<usize>) -> &[Entry] {
        let end = range.end.min(self.entries.len());
        let start = range.start.min(end);
        &self.entries[start..end]
    }

    pub fn iter(&self) -> slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Make room for `requested` entries in total.
    fn reserve_to(&mut self, requested: usize) -> Result<()> {
        let additional = requested.saturating_sub(self.entries.len());
        self.entries
            .try_reserve_exact(additional)
            .map_err(|source| BrowserError::Allocation { requested, source })?;
        self.capacity = requested;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryDetails;

    fn entry(name: &str) -> Entry {
        Entry::new(name, EntryDetails::new("1 B", "2024-01-01 00:00:00", "File"))
    }

    fn names(store: &EntryStore) -> Vec<&str> {
        store.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_new_store_uses_requested_capacity() {
        let store = EntryStore::with_capacity(4).unwrap();
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_capacity_falls_back_to_default() {
        let store = EntryStore::with_capacity(0).unwrap();
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_capacity_doubles_to_smallest_fitting_power() {
        for initial in [0usize, 1, 3, 10] {
            for count in 0..100usize {
                let mut store = EntryStore::with_capacity(initial).unwrap();
                for i in 0..count {
                    store.push(entry(&i.to_string())).unwrap();
                }

                // Zero starts from the default and doubles from there
                let mut expected = if initial == 0 { DEFAULT_CAPACITY } else { initial };
                while expected < count {
                    expected *= 2;
                }
                assert_eq!(store.capacity(), expected, "C={initial} N={count}");
                assert_eq!(store.len(), count);
            }
        }
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = EntryStore::with_capacity(2).unwrap();
        for name in ["a", "b", "c", "d", "e"] {
            store.push(entry(name)).unwrap();
        }
        let capacity = store.capacity();

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&store), vec!["a", "c", "d", "e"]);

        store.remove_at(3).unwrap();
        assert_eq!(names(&store), vec!["a", "c", "d"]);

        store.remove_at(0).unwrap();
        assert_eq!(names(&store), vec!["c", "d"]);
        assert_eq!(store.capacity(), capacity);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = EntryStore::with_capacity(2).unwrap();
        store.push(entry("a")).unwrap();

        let err = store.remove_at(1).unwrap_err();
        assert!(matches!(err, BrowserError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(names(&store), vec!["a"]);
        assert!(store.try_get(5).is_err());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut store = EntryStore::with_capacity(2).unwrap();
        for i in 0..9 {
            store.push(entry(&i.to_string())).unwrap();
        }
        let capacity = store.capacity();

        store.clear();
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), capacity);

        // Refilling up to the old size does not grow again
        for i in 0..capacity {
            store.push(entry(&i.to_string())).unwrap();
        }
        assert_eq!(store.capacity(), capacity);
    }

    #[test]
    fn test_find_by_name() {
        let mut store = EntryStore::with_capacity(4).unwrap();
        for name in ["..", "src", "Cargo.toml", "src"] {
            store.push(entry(name)).unwrap();
        }
        assert_eq!(store.find_by_name("Cargo.toml"), Some(2));
        // Duplicates resolve to the lowest index
        assert_eq!(store.find_by_name("src"), Some(1));
        assert_eq!(store.find_by_name("missing"), None);
    }

    #[test]
    fn test_slice_is_clipped() {
        let mut store = EntryStore::with_capacity(4).unwrap();
        for name in ["a", "b", "c"] {
            store.push(entry(name)).unwrap();
        }
        assert_eq!(store.slice(1..10).len(), 2);
        assert!(store.slice(5..8).is_empty());
        assert_eq!(store.slice(0..2)[1].name(), "b");
    }

    #[test]
    fn test_impossible_capacity_is_reported() {
        let err = EntryStore::with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            BrowserError::Allocation {
                requested: usize::MAX,
                ..
            }
        ));
    }

    #[test]
    fn test_failed_growth_leaves_store_untouched() {
        let mut store = EntryStore::with_capacity(2).unwrap();
        store.push(entry("a")).unwrap();
        store.push(entry("b")).unwrap();

        assert!(store.reserve_to(usize::MAX).is_err());
        assert_eq!(store.capacity(), 2);
        assert_eq!(names(&store), vec!["a", "b"]);

        store.push(entry("c")).unwrap();
        assert_eq!(store.capacity(), 4);
    }
}
