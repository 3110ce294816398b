//! Double buffering of two grid models for synchronous stepping.
//!
//! [`DoubleBuffer`] holds two models bound to the same structure. One is
//! *current* (read by the step rule), the other is *next* (written by
//! it). [`swap`](DoubleBuffer::swap) flips the roles by index; no cell
//! data is copied.
//!
//! ```text
//! buffers[current]      ←─── read during the step, published after swap
//! buffers[1 - current]  ←─── written during the step
//! ```

use crate::error::StoreError;
use crate::model::GridModel;

/// Two models that alternate between the current and next roles.
#[derive(Clone, Debug)]
pub struct DoubleBuffer<M> {
    buffers: [M; 2],
    current: usize,
}

impl<M: GridModel> DoubleBuffer<M> {
    /// Pair `current` with a scratch model `next`.
    ///
    /// Returns `Err(StoreError::StructureMismatch)` if the two models
    /// disagree on their structure, and `Err(StoreError::DefaultMismatch)`
    /// if they disagree on the default entity: after a swap the published
    /// model's notion of "empty" would change.
    pub fn new(current: M, next: M) -> Result<Self, StoreError> {
        if current.structure() != next.structure() {
            return Err(StoreError::StructureMismatch {
                expected: *current.structure(),
                found: *next.structure(),
            });
        }
        if current.default_entity() != next.default_entity() {
            return Err(StoreError::DefaultMismatch {
                expected: format!("{:?}", current.default_entity()),
                found: format!("{:?}", next.default_entity()),
            });
        }
        Ok(Self {
            buffers: [current, next],
            current: 0,
        })
    }

    /// Pair `current` with a cleared clone of itself.
    pub fn from_clone(current: M) -> Self
    where
        M: Clone,
    {
        let mut next = current.clone();
        next.clear();
        Self {
            buffers: [current, next],
            current: 0,
        }
    }

    /// The published model.
    pub fn current(&self) -> &M {
        &self.buffers[self.current]
    }

    /// Mutable access to the published model, for setup between steps.
    pub fn current_mut(&mut self) -> &mut M {
        &mut self.buffers[self.current]
    }

    /// Borrow the current model for reading and the next for writing.
    pub fn split(&mut self) -> (&M, &mut M) {
        let [a, b] = &mut self.buffers;
        if self.current == 0 {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Publish the next model. O(1).
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Consume the buffer, keeping only the current model.
    pub fn into_current(self) -> M {
        let [a, b] = self.buffers;
        if self.current == 0 {
            a
        } else {
            b
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DenseGrid, SparseGrid};
    use cellsim_core::Coord;
    use cellsim_space::{CellShape, GridEdgeBehavior, GridStructure};

    fn structure(w: u32, h: u32) -> GridStructure {
        GridStructure::new(CellShape::Square, GridEdgeBehavior::WRAP_XY, w, h).unwrap()
    }

    #[test]
    fn mismatched_structures_rejected() {
        let a = DenseGrid::new(structure(4, 4), 0u8);
        let b = DenseGrid::new(structure(4, 5), 0u8);
        assert!(matches!(
            DoubleBuffer::new(a, b),
            Err(StoreError::StructureMismatch { .. })
        ));
    }

    #[test]
    fn mismatched_defaults_rejected() {
        let s = structure(3, 3);
        let mut live = DenseGrid::new(s, false);
        live.set(Coord::new(1, 1), true);
        let err = DoubleBuffer::new(live, DenseGrid::new(s, true)).unwrap_err();
        assert_eq!(
            err,
            StoreError::DefaultMismatch {
                expected: "false".into(),
                found: "true".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "default entity mismatch: expected false, found true"
        );
    }

    #[test]
    fn writes_to_next_invisible_until_swap() {
        let s = structure(3, 3);
        let mut buf = DoubleBuffer::new(SparseGrid::new(s, 0u8), SparseGrid::new(s, 0u8)).unwrap();
        let c = Coord::new(1, 1);
        {
            let (current, next) = buf.split();
            assert_eq!(*current.get(c), 0);
            next.set(c, 9);
            assert_eq!(*current.get(c), 0);
        }
        assert_eq!(*buf.current().get(c), 0);
        buf.swap();
        assert_eq!(*buf.current().get(c), 9);
    }

    #[test]
    fn from_clone_starts_with_empty_next() {
        let mut g = DenseGrid::new(structure(3, 3), 0u8);
        g.set(Coord::new(1, 2), 4);
        let mut buf = DoubleBuffer::from_clone(g);
        let (current, next) = buf.split();
        assert_eq!(current.non_default_count(), 1);
        assert_eq!(next.non_default_count(), 0);
        assert_eq!(current.structure(), next.structure());
    }

    #[test]
    fn swap_twice_restores_roles() {
        let s = structure(2, 2);
        let mut buf = DoubleBuffer::new(DenseGrid::new(s, 0u8), DenseGrid::new(s, 0u8)).unwrap();
        buf.current_mut().set(Coord::new(0, 0), 1);
        buf.swap();
        assert_eq!(buf.current().non_default_count(), 0);
        buf.swap();
        assert_eq!(buf.current().non_default_count(), 1);
        assert_eq!(*buf.into_current().get(Coord::new(0, 0)), 1);
    }
}
