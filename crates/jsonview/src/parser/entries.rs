use alloc::{collections::TryReserveError, vec::Vec};

const INITIAL_CAPACITY: usize = 4;

/// Growable accumulator for array elements and object members.
///
/// Capacity starts at 4 and doubles when full. Growth is fallible so that
/// allocation failure surfaces as a parse error instead of an abort.
#[derive(Debug)]
pub(crate) struct EntryBuffer<T> {
    entries: Vec<T>,
}

impl<T> EntryBuffer<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: T) -> Result<(), TryReserveError> {
        if self.entries.len() == self.entries.capacity() {
            let additional = if self.entries.is_empty() {
                INITIAL_CAPACITY
            } else {
                self.entries.len()
            };
            self.entries.try_reserve_exact(additional)?;
        }
        self.entries.push(entry);
        Ok(())
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// The filled entries, in insertion order.
    pub(crate) fn finish(self) -> Vec<T> {
        self.entries
    }
}
