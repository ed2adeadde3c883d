//! Serialization of corrupted tables and their trackers.

mod writer;

pub use writer::{tracker_path, write_outputs};
