//! Routed pages.

pub mod fleet;
