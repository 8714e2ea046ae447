//! Fixed-capacity append-only arrays ("freeze arrays").
//!
//! A freeze array is sized once at construction, filled by appending, and
//! never reallocates during population. An optional one-shot [`freeze`]
//! step releases unused trailing capacity, locking the capacity to the
//! current element count. This trades the flexibility of `Vec<T>` for
//! reallocation-free bulk insertion and a tight memory footprint.
//!
//! # Architecture
//!
//! ```text
//! FreezeArray<T>        flat variant: one contiguous buffer,
//!                       linear indexing
//! TiledFreezeArray<T>   tiled variant: one allocation per fixed-width
//!                       row, index i → (i / row_width, i % row_width)
//! ```
//!
//! Both variants share the same contract: `push` fails with
//! [`FreezeError::Full`] once capacity is reached (there is no growth
//! path), indexed access is checked, and traversal covers exactly the
//! appended elements in insertion order.
//!
//! Neither type carries any internal synchronisation; mutation goes
//! through `&mut self` and the borrow checker enforces exclusive access.
//!
//! [`freeze`]: FreezeArray::freeze

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod flat;
pub mod tiled;

// Public re-exports for the primary API surface.
pub use config::TiledConfig;
pub use error::FreezeError;
pub use flat::FreezeArray;
pub use tiled::TiledFreezeArray;
