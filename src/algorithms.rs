//! Useful algorithms.

pub(crate) mod blocks;
