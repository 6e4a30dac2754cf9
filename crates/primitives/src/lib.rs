//! Building blocks for fixed-layout records.

/// Fixed-width field encoding: padded arrays and padded text.
pub mod fixed;

pub use fixed::{FixedStr, FixedWidthError, pad_array, try_pad_array};
