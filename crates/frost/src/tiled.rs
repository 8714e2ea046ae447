//! Tiled freeze array: fixed-width rows, one allocation per row.
//!
//! [`TiledFreezeArray`] partitions the element space into rows of
//! [`TiledConfig::row_width`] elements. Unlike arithmetic-only tiling
//! over a flat buffer, each row is a separate allocation, so
//! [`TiledFreezeArray::freeze`] can drop unused trailing rows outright
//! instead of copying the whole array.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::TiledConfig;
use crate::error::FreezeError;

/// A fixed-capacity append-only array stored as fixed-width rows.
///
/// Index `i` maps to row `i / row_width`, column `i % row_width`. The
/// final row is allocated short when the capacity is not a multiple of
/// the row width. All rows are allocated at construction, so appends
/// never allocate.
///
/// The observable contract matches [`FreezeArray`]: appends fail with
/// [`FreezeError::Full`] at capacity, indexed access is checked, and
/// traversal yields exactly the appended elements in insertion order.
///
/// [`FreezeArray`]: crate::flat::FreezeArray
pub struct TiledFreezeArray<T> {
    /// Row storage. Each row is filled left to right before the next
    /// row receives its first element.
    rows: Vec<Vec<T>>,
    /// Elements per full row. Immutable after construction.
    row_width: usize,
    /// Append limit. Tightened only by `freeze`.
    capacity: usize,
    /// Number of elements appended so far.
    len: usize,
}

impl<T> TiledFreezeArray<T> {
    /// Create an array with the default row width of
    /// [`TiledConfig::DEFAULT_ROW_WIDTH`] elements.
    pub fn new(capacity: usize) -> Self {
        Self::with_config(capacity, TiledConfig::default())
    }

    /// Create an array with an explicit tiling configuration.
    ///
    /// Allocates `capacity.div_ceil(row_width)` rows up front; the final
    /// row is short when `row_width` does not divide `capacity`.
    ///
    /// # Panics
    ///
    /// Panics if `config.row_width` is zero.
    pub fn with_config(capacity: usize, config: TiledConfig) -> Self {
        assert!(config.row_width > 0, "row_width must be non-zero");
        let row_count = capacity.div_ceil(config.row_width);
        let mut rows = Vec::with_capacity(row_count);
        for row in 0..row_count {
            let start = row * config.row_width;
            let row_capacity = config.row_width.min(capacity - start);
            rows.push(Vec::with_capacity(row_capacity));
        }
        Self {
            rows,
            row_width: config.row_width,
            capacity,
            len: 0,
        }
    }

    /// Append a value at the next free slot.
    ///
    /// Returns `Err(FreezeError::Full)` when the array is at capacity,
    /// leaving the stored elements and `len` untouched.
    pub fn push(&mut self, value: T) -> Result<(), FreezeError> {
        if self.len == self.capacity {
            return Err(FreezeError::Full {
                capacity: self.capacity,
            });
        }
        self.rows[self.len / self.row_width].push(value);
        self.len += 1;
        Ok(())
    }

    /// Append all values from a slice in one bulk write.
    ///
    /// All-or-nothing: if the slice does not fit in the remaining
    /// capacity, `Err(FreezeError::WouldOverflow)` is returned and
    /// nothing is written. Values that straddle a row boundary are split
    /// across the adjacent rows.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), FreezeError>
    where
        T: Copy,
    {
        let remaining = self.remaining();
        if values.len() > remaining {
            return Err(FreezeError::WouldOverflow {
                requested: values.len(),
                remaining,
            });
        }
        let mut rest = values;
        while !rest.is_empty() {
            let row = self.len / self.row_width;
            let col = self.len % self.row_width;
            let take = (self.row_width - col).min(rest.len());
            self.rows[row].extend_from_slice(&rest[..take]);
            self.len += take;
            rest = &rest[take..];
        }
        Ok(())
    }

    /// Get a shared reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(&self.rows[index / self.row_width][index % self.row_width])
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        Some(&mut self.rows[index / self.row_width][index % self.row_width])
    }

    /// Iterate over the appended elements in insertion order.
    ///
    /// Chains the rows front to back; lazy, finite, and restartable.
    pub fn iter(&self) -> std::iter::Flatten<std::slice::Iter<'_, Vec<T>>> {
        self.rows.iter().flatten()
    }

    /// Release unused trailing capacity, locking `capacity` to `len`.
    ///
    /// Drops unused trailing rows and shrinks the partially-filled
    /// boundary row; stored values and their order are preserved. A
    /// no-op when the array is already full. Returns the number of
    /// bytes released.
    pub fn freeze(&mut self) -> usize {
        if self.len == self.capacity {
            return 0;
        }
        let released = (self.capacity - self.len) * std::mem::size_of::<T>();
        let used_rows = self.len.div_ceil(self.row_width);
        self.rows.truncate(used_rows);
        self.rows.shrink_to_fit();
        if let Some(last) = self.rows.last_mut() {
            last.shrink_to_fit();
        }
        self.capacity = self.len;
        released
    }

    /// Number of elements appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no elements have been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the array has reached capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Maximum number of elements. Changes only when `freeze` tightens it.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots remaining before the array is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// Elements per full row.
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Number of allocated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Approximate memory usage of the row storage in bytes.
    ///
    /// Computed from the logical capacity, so it reflects the up-front
    /// allocation before `freeze` and the tightened one after.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}

impl<T> Default for TiledFreezeArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for TiledFreezeArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiledFreezeArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("row_width", &self.row_width)
            .field("row_count", &self.rows.len())
            .finish()
    }
}

impl<T> Index<usize> for TiledFreezeArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> IndexMut<usize> for TiledFreezeArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a TiledFreezeArray<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Vec<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
