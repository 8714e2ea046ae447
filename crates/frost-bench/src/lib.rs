//! Benchmark fixtures for the frost freeze arrays.
//!
//! Provides pre-filled containers shared by the criterion benches and the
//! `freeze_demo` example:
//!
//! - [`fill_flat`]: a [`FreezeArray`] filled with sequential integers
//! - [`fill_tiled`]: a [`TiledFreezeArray`] filled the same way

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frost::{FreezeArray, TiledFreezeArray};

/// Build a flat freeze array of `count` sequential integers `0..count`.
pub fn fill_flat(count: usize) -> FreezeArray<u32> {
    let mut arr = FreezeArray::new(count);
    for i in 0..count {
        arr.push(i as u32).expect("array sized to fit the fill");
    }
    arr
}

/// Build a tiled freeze array of `count` sequential integers `0..count`.
pub fn fill_tiled(count: usize) -> TiledFreezeArray<u32> {
    let mut arr = TiledFreezeArray::new(count);
    for i in 0..count {
        arr.push(i as u32).expect("array sized to fit the fill");
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_flat_is_full_and_ordered() {
        let arr = fill_flat(100);
        assert!(arr.is_full());
        assert_eq!(arr[0], 0);
        assert_eq!(arr[99], 99);
    }

    #[test]
    fn fill_tiled_is_full_and_ordered() {
        let arr = fill_tiled(3000);
        assert!(arr.is_full());
        assert_eq!(arr[0], 0);
        assert_eq!(arr[2999], 2999);
        // 3000 elements at the default row width of 1024 spans 3 rows.
        assert_eq!(arr.row_count(), 3);
    }
}
