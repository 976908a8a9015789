//! A resizable container of `i32` values backed by a manually managed
//! contiguous buffer.
//!
//! [`IntBuffer`] tracks its capacity explicitly, separate from the logical
//! element count, and grows with an amortized `capacity + capacity / 2`
//! policy. Capacity never shrinks on its own; only
//! [`IntBuffer::trim_to_size`] reallocates down to the element count.
//!
//! Sorting is an in-place counting sort ([`sort`]) that buckets negative and
//! non-negative values separately, with cost O(n + maxAbsoluteValue).

pub mod buffer;
pub mod sort;

pub use buffer::IntBuffer;
