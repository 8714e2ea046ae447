//! Tiling configuration parameters.

/// Configuration for the tiled freeze array layout.
///
/// Controls the row width used to partition the element space. Immutable
/// after the array is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiledConfig {
    /// Number of elements per row.
    ///
    /// Default: 1024. The final row of an array whose capacity is not a
    /// multiple of the row width is allocated short. Must be non-zero.
    pub row_width: usize,
}

impl TiledConfig {
    /// Default row width in elements.
    pub const DEFAULT_ROW_WIDTH: usize = 1024;

    /// Create a config with the given row width.
    pub fn new(row_width: usize) -> Self {
        Self { row_width }
    }

    /// Size of one full row in bytes, for elements of type `T`.
    pub fn row_bytes<T>(&self) -> usize {
        self.row_width * std::mem::size_of::<T>()
    }
}

impl Default for TiledConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROW_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_row_width_is_1024() {
        assert_eq!(TiledConfig::default().row_width, 1024);
    }

    #[test]
    fn row_bytes_scales_with_element_size() {
        let config = TiledConfig::new(256);
        assert_eq!(config.row_bytes::<u32>(), 1024);
        assert_eq!(config.row_bytes::<u64>(), 2048);
    }
}
