//! Ordered map on an unbalanced binary search tree, with a few independent
//! generic utilities.
//!
//! [`OrderedMap`] keeps unique keys in ascending order. It is never
//! rebalanced, so its operations take time proportional to the tree height.
//! The other items do not interact with it or with each other:
//! [`CircularQueue`] is a fixed-capacity FIFO queue, [`to_little_endian`]
//! reverses the byte order of unsigned integers, and [`map()`], [`filter()`] and
//! [`reduce()`] transform optional slices.

mod byte_order;
mod functional;
mod map;
mod queue;
mod tree;

pub use byte_order::{to_little_endian, ReverseBytes};
pub use functional::{filter, map, reduce};
pub use map::{MapIterator, OrderedMap};
pub use queue::CircularQueue;
