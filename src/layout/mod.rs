//! Layout arithmetic for the terminal summary: bar widths and the calendar grid.

pub mod alloc;
pub mod heatmap;

pub use alloc::{allocate, ranking_width};
pub use heatmap::{Heatmap, HeatmapCell, MonthLabel};
