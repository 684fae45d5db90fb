//! Record store: a singly linked list of employees kept in an index arena
//!
//! Nodes live in a growable slot vector and link to each other by index.
//! Slots released by an aborted insertion go on a free list and are handed
//! out again before the vector grows.

use crate::domain::employee::{Employee, EmployeeName};
use crate::error::{Result, StaffrollError};

#[derive(Debug)]
struct Node {
    record: Employee,
    next: Option<usize>,
}

/// Ordered collection of employee records
#[derive(Debug, Default)]
pub struct RecordStore {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
    inserted: u32,
    capacity: Option<usize>,
}

impl RecordStore {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Create an empty store that refuses to hold more than `limit` records
    pub fn with_capacity_limit(limit: usize) -> Self {
        RecordStore {
            capacity: Some(limit),
            ..RecordStore::default()
        }
    }

    /// Insert a new record at a 1-based position and return its sequence number.
    ///
    /// The sequence number is taken before placement, so a failed insertion
    /// still consumes one. Positions `<= 1` go to the head; positions at or
    /// past the updated insertion count go to the tail; anything else is
    /// linked after the `(position - 1)`-th node.
    ///
    /// Sequence numbers are exhausted at `u32::MAX`; past that every
    /// insertion fails with `AllocationFailure` until the store is cleared.
    ///
    /// `InvalidPosition` guards the middle walk against an insertion count
    /// that has drifted ahead of the linked length. The public API cannot
    /// produce that drift: the only failing path is the capacity check in
    /// `alloc`, which runs before the walk and keeps failing once reached.
    pub fn insert(
        &mut self,
        id: i64,
        name: EmployeeName,
        salary: f64,
        position: i64,
    ) -> Result<u32> {
        self.inserted = self
            .inserted
            .checked_add(1)
            .ok_or(StaffrollError::AllocationFailure)?;
        let seq = self.inserted;
        let record = Employee {
            seq,
            id,
            name,
            salary,
        };

        if position <= 1 {
            self.push_front(record)?;
        } else if position >= i64::from(self.inserted) {
            self.push_back(record)?;
        } else {
            self.insert_after(position, record)?;
        }

        tracing::debug!(seq, id, position, len = self.len, "inserted employee");
        Ok(seq)
    }

    /// Release every record and restart sequence numbering.
    ///
    /// Returns how many records were released.
    pub fn clear(&mut self) -> usize {
        let released = self.len;
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
        self.inserted = 0;
        tracing::debug!(released, "cleared record store");
        released
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of records currently linked
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insertions performed since the last clear, failed ones included
    pub fn insertion_count(&self) -> u32 {
        self.inserted
    }

    /// Walk the records from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            current: self.head,
        }
    }

    fn push_front(&mut self, record: Employee) -> Result<()> {
        let index = self.alloc(record)?;
        self.set_next(index, self.head);
        self.head = Some(index);
        self.len += 1;
        Ok(())
    }

    fn push_back(&mut self, record: Employee) -> Result<()> {
        let index = self.alloc(record)?;

        match self.tail() {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.len += 1;
        Ok(())
    }

    fn insert_after(&mut self, position: i64, record: Employee) -> Result<()> {
        let index = self.alloc(record)?;

        let mut current = self.head;
        let mut step = 1;
        while let Some(at) = current {
            if step >= position - 1 {
                break;
            }
            current = self.next_of(at);
            step += 1;
        }

        match current {
            Some(at) => {
                self.set_next(index, self.next_of(at));
                self.set_next(at, Some(index));
                self.len += 1;
                Ok(())
            }
            None => {
                self.release(index);
                tracing::warn!(position, len = self.len, "position runs past end of list");
                Err(StaffrollError::InvalidPosition {
                    position,
                    len: self.len,
                })
            }
        }
    }

    /// Take a slot for `record`, preferring the free list
    fn alloc(&mut self, record: Employee) -> Result<usize> {
        if let Some(limit) = self.capacity {
            if self.len >= limit {
                tracing::warn!(limit, "record capacity exhausted");
                return Err(StaffrollError::AllocationFailure);
            }
        }

        let node = Some(Node { record, next: None });

        if let Some(index) = self.free.pop() {
            self.slots[index] = node;
            return Ok(index);
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| StaffrollError::AllocationFailure)?;
        self.slots.push(node);
        Ok(self.slots.len() - 1)
    }

    /// Drop an unlinked node and recycle its slot
    fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.take().is_some() {
                self.free.push(index);
            }
        }
    }

    fn tail(&self) -> Option<usize> {
        let mut current = self.head?;
        while let Some(next) = self.next_of(current) {
            current = next;
        }
        Some(current)
    }

    fn next_of(&self, index: usize) -> Option<usize> {
        self.slots.get(index)?.as_ref()?.next
    }

    fn set_next(&mut self, index: usize, next: Option<usize>) {
        if let Some(node) = self.slots.get_mut(index).and_then(Option::as_mut) {
            node.next = next;
        }
    }
}

/// Head-to-tail iterator over the store's records
pub struct Iter<'a> {
    slots: &'a [Option<Node>],
    current: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.current?)?.as_ref()?;
        self.current = node.next;
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Employee;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
