//! Flat freeze array: one contiguous buffer with linear indexing.
//!
//! [`FreezeArray`] is the baseline layout — a single allocation sized
//! exactly to the requested capacity at construction, filled left to
//! right by [`FreezeArray::push`].

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::FreezeError;

/// A fixed-capacity append-only array over a single contiguous buffer.
///
/// The backing storage is allocated once, up front, so appends never
/// reallocate. Once `len == capacity` further appends fail with
/// [`FreezeError::Full`]; there is no growth path. [`FreezeArray::freeze`]
/// optionally releases unused trailing capacity, after which the capacity
/// equals the element count permanently.
///
/// Indexed access is checked: [`FreezeArray::get`] returns `Option`, and
/// the `Index` operator panics on out-of-range indices like a slice.
pub struct FreezeArray<T> {
    /// Backing storage. Reallocated only by [`FreezeArray::freeze`].
    data: Vec<T>,
    /// Append limit. Set at construction; tightened only by `freeze`.
    capacity: usize,
}

impl<T> FreezeArray<T> {
    /// Create an array with storage for exactly `capacity` elements.
    ///
    /// Zero capacity is legal and yields a container on which every
    /// append fails and traversal is empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value at the next free slot.
    ///
    /// Returns `Err(FreezeError::Full)` when the array is at capacity,
    /// leaving the stored elements and `len` untouched.
    pub fn push(&mut self, value: T) -> Result<(), FreezeError> {
        if self.data.len() == self.capacity {
            return Err(FreezeError::Full {
                capacity: self.capacity,
            });
        }
        self.data.push(value);
        Ok(())
    }

    /// Append all values from a slice in one bulk write.
    ///
    /// All-or-nothing: if the slice does not fit in the remaining
    /// capacity, `Err(FreezeError::WouldOverflow)` is returned and
    /// nothing is written.
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
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Get a shared reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get a mutable reference to the element at `index`.
    ///
    /// Returns `None` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// View the appended elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the appended elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the appended elements in insertion order.
    ///
    /// The iterator is lazy and finite; calling `iter` again restarts
    /// from the first element.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Release unused trailing capacity, locking `capacity` to `len`.
    ///
    /// Reallocates the backing storage to exactly `len` elements; stored
    /// values and their order are preserved. A no-op when the array is
    /// already full. Returns the number of bytes released.
    ///
    /// After freezing a partially-filled array, every subsequent `push`
    /// fails with [`FreezeError::Full`].
    pub fn freeze(&mut self) -> usize {
        if self.data.len() == self.capacity {
            return 0;
        }
        let released = (self.capacity - self.data.len()) * std::mem::size_of::<T>();
        self.data.shrink_to_fit();
        self.capacity = self.data.len();
        released
    }

    /// Number of elements appended so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no elements have been appended.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the array has reached capacity.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Maximum number of elements. Changes only when `freeze` tightens it.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots remaining before the array is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Approximate memory usage of the backing storage in bytes.
    ///
    /// Computed from the logical capacity, so it reflects the up-front
    /// allocation before `freeze` and the tightened one after.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}

impl<T> Default for FreezeArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Debug> fmt::Debug for FreezeArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreezeArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<T> Index<usize> for FreezeArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for FreezeArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T> IntoIterator for &'a FreezeArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_read_back_in_order() {
        let mut arr = FreezeArray::new(10);
        for i in 0..10u32 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.len(), 10);
        for i in 0..10usize {
            assert_eq!(arr[i], i as u32);
        }
    }

    #[test]
    fn push_past_capacity_fails_and_preserves_contents() {
        let mut arr = FreezeArray::new(10);
        for i in 0..10u32 {
            arr.push(i).unwrap();
        }
        let result = arr.push(10);
        assert_eq!(result, Err(FreezeError::Full { capacity: 10 }));
        assert_eq!(arr.len(), 10);
        assert_eq!(arr[9], 9);
    }

    #[test]
    fn zero_capacity_rejects_push_and_iterates_empty() {
        let mut arr = FreezeArray::new(0);
        assert_eq!(arr.push(1u8), Err(FreezeError::Full { capacity: 0 }));
        assert!(arr.is_empty());
        assert!(arr.is_full());
        assert_eq!(arr.iter().count(), 0);
    }

    #[test]
    fn freeze_tightens_capacity_and_preserves_data() {
        let mut arr = FreezeArray::new(100);
        for i in 0..30u32 {
            arr.push(i).unwrap();
        }
        let released = arr.freeze();
        assert_eq!(released, 70 * std::mem::size_of::<u32>());
        assert_eq!(arr.capacity(), 30);
        assert_eq!(arr.len(), 30);
        for i in 0..30usize {
            assert_eq!(arr[i], i as u32);
        }
    }

    #[test]
    fn freeze_on_full_array_is_noop() {
        let mut arr = FreezeArray::new(5);
        for i in 0..5u32 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.freeze(), 0);
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr.len(), 5);
    }

    #[test]
    fn push_after_freeze_fails() {
        let mut arr = FreezeArray::new(8);
        arr.push(1u32).unwrap();
        arr.freeze();
        assert_eq!(arr.push(2), Err(FreezeError::Full { capacity: 1 }));
    }

    #[test]
    fn extend_from_slice_writes_all_or_nothing() {
        let mut arr = FreezeArray::new(5);
        arr.extend_from_slice(&[1u32, 2, 3]).unwrap();
        assert_eq!(arr.as_slice(), &[1, 2, 3]);

        let result = arr.extend_from_slice(&[4, 5, 6]);
        assert_eq!(
            result,
            Err(FreezeError::WouldOverflow {
                requested: 3,
                remaining: 2,
            })
        );
        // Nothing written by the failed bulk append.
        assert_eq!(arr.as_slice(), &[1, 2, 3]);

        arr.extend_from_slice(&[4, 5]).unwrap();
        assert!(arr.is_full());
    }

    #[test]
    fn get_is_bounds_checked() {
        let mut arr = FreezeArray::new(4);
        arr.push(7u32).unwrap();
        assert_eq!(arr.get(0), Some(&7));
        assert_eq!(arr.get(1), None);
        // Within capacity but past len is still out of range.
        assert_eq!(arr.get(3), None);
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut arr = FreezeArray::new(4);
        arr.push(1u32).unwrap();
        *arr.get_mut(0).unwrap() = 9;
        assert_eq!(arr[0], 9);
        arr[0] = 11;
        assert_eq!(arr[0], 11);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let mut arr = FreezeArray::new(4);
        arr.push(1u32).unwrap();
        let _ = arr[1];
    }

    #[test]
    fn iter_is_restartable() {
        let mut arr = FreezeArray::new(3);
        arr.extend_from_slice(&[1u32, 2, 3]).unwrap();
        let first: Vec<u32> = arr.iter().copied().collect();
        let second: Vec<u32> = arr.iter().copied().collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn into_iterator_over_reference() {
        let mut arr = FreezeArray::new(3);
        arr.extend_from_slice(&[4u32, 5, 6]).unwrap();
        let mut sum = 0;
        for &v in &arr {
            sum += v;
        }
        assert_eq!(sum, 15);
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let mut arr = FreezeArray::<u32>::new(1000);
        assert_eq!(arr.memory_bytes(), 4000);
        arr.push(1).unwrap();
        arr.freeze();
        assert_eq!(arr.memory_bytes(), 4);
    }

    #[test]
    fn million_element_fill_and_freeze_noop() {
        let count = 1_000_000;
        let mut arr = FreezeArray::new(count);
        for i in 0..count {
            arr.push(i as u32).unwrap();
        }
        assert_eq!(arr.freeze(), 0);
        assert_eq!(arr.capacity(), count);
        assert_eq!(arr[999_999], 999_999);
    }

    #[test]
    fn works_with_non_copy_elements() {
        let mut arr = FreezeArray::new(2);
        arr.push(String::from("a")).unwrap();
        arr.push(String::from("b")).unwrap();
        assert_eq!(arr.push(String::from("c")), Err(FreezeError::Full { capacity: 2 }));
        assert_eq!(arr[1], "b");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn appends_within_capacity_read_back_in_order(
                values in proptest::collection::vec(any::<u32>(), 0..200),
            ) {
                let mut arr = FreezeArray::new(values.len());
                for &v in &values {
                    prop_assert!(arr.push(v).is_ok());
                }
                prop_assert_eq!(arr.len(), values.len());
                for (i, &v) in values.iter().enumerate() {
                    prop_assert_eq!(arr[i], v);
                }
            }

            #[test]
            fn overflowing_appends_never_change_state(
                capacity in 0usize..64,
                extra in 1usize..16,
            ) {
                let mut arr = FreezeArray::new(capacity);
                for i in 0..capacity {
                    arr.push(i as u64).unwrap();
                }
                let before: Vec<u64> = arr.iter().copied().collect();
                for i in 0..extra {
                    prop_assert!(arr.push(i as u64).is_err());
                }
                prop_assert_eq!(arr.len(), capacity);
                let after: Vec<u64> = arr.iter().copied().collect();
                prop_assert_eq!(before, after);
            }

            #[test]
            fn freeze_preserves_every_element(
                capacity in 1usize..256,
                fill in 0usize..256,
            ) {
                let fill = fill.min(capacity);
                let mut arr = FreezeArray::new(capacity);
                for i in 0..fill {
                    arr.push(i as u32).unwrap();
                }
                arr.freeze();
                prop_assert_eq!(arr.capacity(), fill);
                for i in 0..fill {
                    prop_assert_eq!(arr[i], i as u32);
                }
            }
        }
    }
}
