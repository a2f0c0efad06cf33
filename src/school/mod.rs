//! Multi-brain curriculum aggregation.
//!
//! A [`School`] holds one curriculum per brain in the environment, loaded
//! from a folder of definition files, and fans the trainer's lesson
//! operations out across all of them.

mod core;

#[cfg(test)]
mod proptests;

pub use core::School;
