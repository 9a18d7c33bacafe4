//! Indexed binary min-heap over vertex ids.
//!
//! The heap owns three parallel arrays for the lifetime of one algorithm
//! run: `slots` (position to vertex), `positions` (vertex to position, `0`
//! meaning absent) and `priorities` (vertex to current priority). Keeping
//! them in one value means no other code can write a priority without the
//! heap re-establishing order afterwards.

use crate::{error::HeapError, graph::NO_VERTEX};

/// Priority assigned to vertices that have not been reached yet.
pub const INFINITE_PRIORITY: u64 = u64::MAX;

const ROOT: usize = 1;

/// A binary min-heap of vertex ids supporting `decrease_key`.
///
/// # Examples
/// ```
/// use spanwise_core::heap::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new(4);
/// heap.insert(3, 10)?;
/// heap.insert(1, 7)?;
/// heap.insert(4, 9)?;
/// heap.decrease_key(3, 2)?;
/// assert_eq!(heap.extract_min()?, (3, 2));
/// assert_eq!(heap.extract_min()?, (1, 7));
/// assert_eq!(heap.len(), 1);
/// # Ok::<(), spanwise_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<usize>,
    positions: Vec<usize>,
    priorities: Vec<u64>,
    len: usize,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold vertices `1..=capacity`.
    ///
    /// Every priority starts at [`INFINITE_PRIORITY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let size = capacity.saturating_add(1);
        Self {
            slots: vec![NO_VERTEX; size],
            positions: vec![0; size],
            priorities: vec![INFINITE_PRIORITY; size],
            len: 0,
        }
    }

    /// Returns the largest vertex id the heap can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Returns the number of queued vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when no vertex is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when `vertex` is currently queued.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        vertex != NO_VERTEX && self.positions.get(vertex).is_some_and(|&pos| pos != 0)
    }

    /// Returns the priority last written for `vertex`, queued or not.
    ///
    /// Vertices outside `1..=capacity` yield `None`.
    #[must_use]
    pub fn priority(&self, vertex: usize) -> Option<u64> {
        if vertex == NO_VERTEX {
            return None;
        }
        self.priorities.get(vertex).copied()
    }

    /// Records `priority` for `vertex` and adds it to the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::VertexOutOfRange`] for ids outside
    /// `1..=capacity`, [`HeapError::AlreadyQueued`] when the vertex is
    /// present, and [`HeapError::Full`] when the heap holds `capacity`
    /// vertices.
    pub fn insert(&mut self, vertex: usize, priority: u64) -> Result<(), HeapError> {
        self.check_vertex(vertex)?;
        if self.contains(vertex) {
            return Err(HeapError::AlreadyQueued { vertex });
        }
        if self.len == self.capacity() {
            return Err(HeapError::Full {
                capacity: self.capacity(),
            });
        }

        self.priorities[vertex] = priority;
        self.len += 1;
        self.slots[self.len] = vertex;
        self.positions[vertex] = self.len;
        self.sift_up(self.len);
        Ok(())
    }

    /// Lowers the priority of a queued vertex and restores heap order by
    /// sifting up from its current position.
    ///
    /// Writing the same priority again is allowed and leaves order intact.
    ///
    /// # Errors
    /// Returns [`HeapError::VertexOutOfRange`] for unknown ids,
    /// [`HeapError::NotQueued`] when the vertex is absent and
    /// [`HeapError::PriorityIncrease`] when `priority` exceeds the stored one.
    pub fn decrease_key(&mut self, vertex: usize, priority: u64) -> Result<(), HeapError> {
        self.check_vertex(vertex)?;
        let position = self.positions[vertex];
        if position == 0 {
            return Err(HeapError::NotQueued { vertex });
        }
        let current = self.priorities[vertex];
        if priority > current {
            return Err(HeapError::PriorityIncrease {
                vertex,
                current,
                requested: priority,
            });
        }

        self.priorities[vertex] = priority;
        self.sift_up(position);
        Ok(())
    }

    /// Removes and returns the vertex with the smallest priority together
    /// with that priority.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when nothing is queued.
    pub fn extract_min(&mut self) -> Result<(usize, u64), HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let min = self.slots[ROOT];
        let last = self.slots[self.len];
        self.positions[min] = 0;
        self.slots[self.len] = NO_VERTEX;
        self.len -= 1;

        if !self.is_empty() {
            self.slots[ROOT] = last;
            self.positions[last] = ROOT;
            self.sift_down(ROOT);
        }

        Ok((min, self.priorities[min]))
    }

    /// Consumes the heap and returns the priority array, indexed by vertex
    /// id with slot `0` unused.
    #[must_use]
    pub fn into_priorities(self) -> Vec<u64> {
        self.priorities
    }

    /// Verifies the min-heap property and the slot/position cross-references.
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolation`] naming the first broken
    /// invariant.
    pub fn check_invariants(&self) -> Result<(), HeapError> {
        for position in ROOT..=self.len {
            let vertex = self.slots[position];
            if self.positions.get(vertex) != Some(&position) {
                return Err(HeapError::InvariantViolation {
                    invariant: "position index must point back at its slot",
                    position,
                });
            }
            if position > ROOT {
                let parent = self.slots[position / 2];
                if self.priorities[parent] > self.priorities[vertex] {
                    return Err(HeapError::InvariantViolation {
                        invariant: "parent priority must not exceed child priority",
                        position,
                    });
                }
            }
        }

        if let Some(offset) = self
            .slots
            .iter()
            .skip(self.len.saturating_add(1))
            .position(|&vertex| vertex != NO_VERTEX)
        {
            return Err(HeapError::InvariantViolation {
                invariant: "vacated slots must be cleared",
                position: self.len + 1 + offset,
            });
        }

        let indexed = self.positions.iter().filter(|&&pos| pos != 0).count();
        if indexed != self.len {
            return Err(HeapError::InvariantViolation {
                invariant: "every indexed vertex must occupy a slot",
                position: self.len,
            });
        }
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), HeapError> {
        if vertex == NO_VERTEX || vertex > self.capacity() {
            return Err(HeapError::VertexOutOfRange {
                vertex,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn sift_up(&mut self, mut position: usize) {
        let vertex = self.slots[position];
        let priority = self.priorities[vertex];

        while position > ROOT {
            let parent_position = position / 2;
            let parent = self.slots[parent_position];
            if self.priorities[parent] <= priority {
                break;
            }
            self.slots[position] = parent;
            self.positions[parent] = position;
            position = parent_position;
        }

        self.slots[position] = vertex;
        self.positions[vertex] = position;
    }

    fn sift_down(&mut self, mut position: usize) {
        let vertex = self.slots[position];
        let priority = self.priorities[vertex];

        loop {
            let mut child_position = position * 2;
            if child_position > self.len {
                break;
            }
            // Equal children resolve to the left one.
            if child_position < self.len
                && self.priorities[self.slots[child_position + 1]]
                    < self.priorities[self.slots[child_position]]
            {
                child_position += 1;
            }

            let child = self.slots[child_position];
            if priority <= self.priorities[child] {
                break;
            }
            self.slots[position] = child;
            self.positions[child] = position;
            position = child_position;
        }

        self.slots[position] = vertex;
        self.positions[vertex] = position;
    }
}
