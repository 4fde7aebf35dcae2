pub mod cli;
pub mod collect;
pub mod error;
pub mod git;
pub mod langs;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod render;
