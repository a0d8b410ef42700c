// ABOUTME: Adjustable column width reconciliation.
// ABOUTME: Normalizes layout specs, merges drag results, and sizes columns with floors.

mod columns;
mod error;
mod primitive;
mod resize;
mod spec;
mod widths;

pub use columns::{ColumnOptions, LegacyResult, Reconciler, RenderResult};
pub use error::LayoutError;
pub use primitive::{Column, ColumnLayout, Rect, SpanLayout};
pub use resize::{NoResize, ResizeRequest, ResizeSource};
#[cfg(any(test, feature = "testing"))]
pub use resize::ScriptedResize;
pub use spec::{normalize, resolve_labels, resolve_min_widths, LayoutSpec, LegacySpec};
pub use widths::{
    apply_minimum_widths, load_or_seed, merge_resize, primitive_sizes, validate_report, Merge,
};
