//! Weighted quick-union disjoint sets.
//!
//! Elements `0..n` start as singleton trees. A union hangs the root of the
//! smaller tree under the root of the larger one, which bounds tree height by
//! `log2(n)` without path compression. `find` therefore never mutates and is
//! available through a shared reference.

use std::collections::TryReserveError;

use crate::error::DisjointSetError;

/// Partition of `0..n` into components under incremental unions.
///
/// # Examples
/// ```
/// use algs_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.connected(0, 1)?);
/// assert_eq!(sets.count(), 3);
/// # Ok::<(), algs_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Creates `n` singleton components, reporting allocation failure instead
    /// of aborting.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AllocationFailed`] when storage for `n`
    /// elements cannot be reserved.
    pub fn try_new(n: usize) -> Result<Self, DisjointSetError> {
        let failed = |source: TryReserveError| DisjointSetError::AllocationFailed { len: n, source };
        let mut parent: Vec<usize> = Vec::new();
        parent.try_reserve_exact(n).map_err(failed)?;
        let mut size: Vec<usize> = Vec::new();
        size.try_reserve_exact(n).map_err(failed)?;
        parent.extend(0..n);
        size.resize(n, 1);
        Ok(Self {
            parent,
            size,
            components: n,
        })
    }

    /// Returns the number of elements tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.components
    }

    /// Returns the root of the tree containing `p`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] if `p >= len()`.
    pub fn find(&self, p: usize) -> Result<usize, DisjointSetError> {
        let mut node = p;
        loop {
            let parent = self.parent_of(node)?;
            if parent == node {
                return Ok(node);
            }
            node = parent;
        }
    }

    /// Returns `true` if `p` and `q` belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] if either index is
    /// invalid.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Returns the number of elements in the component containing `p`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] if `p >= len()`.
    pub fn component_size(&self, p: usize) -> Result<usize, DisjointSetError> {
        let root = self.find(p)?;
        self.size_of(root)
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// The smaller tree is attached beneath the larger tree's root. On equal
    /// sizes the root of `q` goes under the root of `p`. Returns `false` when
    /// both were already in the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] if either index is
    /// invalid. The structure is unchanged on error.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(false);
        }

        let p_size = self.size_of(p_root)?;
        let q_size = self.size_of(q_root)?;
        let (parent, child) = if p_size < q_size {
            (q_root, p_root)
        } else {
            (p_root, q_root)
        };

        *self.parent_mut(child)? = parent;
        *self.size_mut(parent)? = p_size + q_size;
        self.components -= 1;
        Ok(true)
    }

    fn parent_of(&self, p: usize) -> Result<usize, DisjointSetError> {
        self.parent.get(p).copied().ok_or_else(|| self.out_of_range(p))
    }

    fn size_of(&self, root: usize) -> Result<usize, DisjointSetError> {
        self.size.get(root).copied().ok_or_else(|| self.out_of_range(root))
    }

    fn parent_mut(&mut self, p: usize) -> Result<&mut usize, DisjointSetError> {
        let len = self.parent.len();
        self.parent
            .get_mut(p)
            .ok_or(DisjointSetError::ElementOutOfRange { element: p, len })
    }

    fn size_mut(&mut self, root: usize) -> Result<&mut usize, DisjointSetError> {
        let len = self.parent.len();
        self.size
            .get_mut(root)
            .ok_or(DisjointSetError::ElementOutOfRange { element: root, len })
    }

    fn out_of_range(&self, element: usize) -> DisjointSetError {
        DisjointSetError::ElementOutOfRange {
            element,
            len: self.parent.len(),
        }
    }
}
