//! # flexpass
//!
//! Single-pass flexbox-style layout for a container and its direct children.
//!
//! Given available space and sizing constraints, [`layout_flex`] determines
//! each child's width, height and position, and reports the container's own
//! resulting size. The engine is headless and toolkit-agnostic: it never
//! touches pixels, rendering or events, and is driven entirely through the
//! [`LayoutContext`] accessor trait supplied by the caller.
//!
//! ## Architecture
//!
//! ```text
//! host widget tree ── LayoutContext ──▶ layout_flex ──▶ geometry written back
//!         ▲                                 │
//!         └──────── layout() re-entry ──────┘   (container children recurse)
//! ```
//!
//! One invocation lays out one container's immediate children; recursive
//! application to a full tree happens through the accessor's `layout`
//! callback re-entering [`layout_flex`]. The engine is stateless, reentrant,
//! synchronous, and performs a full fresh computation on every call — no
//! caching, no hidden state.
//!
//! Not covered by design: wrapping (multi-line flex), absolute positioning,
//! right-to-left axis flipping, and percentage units.
//!
//! ## Modules
//!
//! - [`types`] — [`FlexDirection`], [`MeasureMode`], [`Align`], [`FlexParams`]
//! - [`layout`] — the engine, the accessor trait, and contract checks
//!
//! ## Example
//!
//! ```ignore
//! use flexpass::{layout_flex, Align, FlexDirection, MeasureMode};
//!
//! // `tree` is any host type implementing LayoutContext.
//! layout_flex(
//!     &mut tree,
//!     root,
//!     Some(300.0),
//!     MeasureMode::Exactly,
//!     None,
//!     MeasureMode::Unspecified,
//!     FlexDirection::Row,
//!     Align::Start,
//! );
//! ```

pub mod layout;
pub mod types;

pub use layout::{ContractViolation, LayoutContext, layout_flex, verify_context};
pub use types::{Align, FlexDirection, FlexParams, MeasureMode};
