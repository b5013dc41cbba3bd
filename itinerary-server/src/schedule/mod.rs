//! Schedule propagation from a single anchor event.
//!
//! The engine mutates stop records in place, cascading the landing time
//! through the airport chain with configurable duration offsets. It is pure
//! and synchronous: no I/O, no shared state between runs.

mod anchor;
mod durations;
mod engine;

pub use anchor::{Anchor, AnchorError};
pub use durations::Durations;
pub use engine::propagate;
