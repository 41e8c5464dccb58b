//! Flex layout computation.
//!
//! # Architecture
//!
//! The module splits along the engine's natural seams:
//!
//! - [`context`] — the [`LayoutContext`] accessor trait, the engine's only
//!   view of the host widget tree.
//! - [`engine`] — [`layout_flex`], the four-phase single-pass algorithm.
//! - [`contract`] — [`verify_context`] and [`ContractViolation`], opt-in
//!   detection of accessor misuse off the hot path.
//!
//! One call lays out one container's immediate children. Whole-tree layout
//! is re-entrant: the accessor's `layout` callback calls [`layout_flex`]
//! again for container children.

mod context;
mod contract;
mod engine;

pub use context::LayoutContext;
pub use contract::{ContractViolation, verify_context};
pub use engine::layout_flex;
