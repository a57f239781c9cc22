//! CLI library components for the data-quality validation engine.

pub mod logging;
