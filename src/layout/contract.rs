//! Explicit accessor contract checks.
//!
//! The engine itself never validates its inputs: a malformed accessor is
//! undefined behavior at the boundary, and the conforming path pays nothing
//! for it beyond `debug_assert!`s. Hosts that want violations surfaced as
//! values run [`verify_context`] before layout — typically once per tree
//! change, or in debug builds only.

use thiserror::Error;

use crate::types::{Align, FlexDirection};

use super::context::LayoutContext;

/// A detectable violation of the [`LayoutContext`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContractViolation {
    /// A child requests `SpaceBetween` or `SpaceAround` as its cross-axis
    /// alignment; those are container justifications and have no per-child
    /// meaning.
    #[error("child {index}: {align:?} is a container justification, not a child alignment")]
    InvalidChildAlign {
        /// Index of the offending child.
        index: usize,
        /// The rejected alignment value.
        align: Align,
    },

    /// A child's flex weight is NaN or infinite, which would poison every
    /// sibling's share of the distributed space.
    #[error("child {index}: flex weight {flex} is not finite")]
    NonFiniteFlex {
        /// Index of the offending child.
        index: usize,
        /// The rejected weight.
        flex: f32,
    },

    /// A child's margin is NaN or infinite.
    #[error("child {index}: margin {value} is not finite")]
    NonFiniteMargin {
        /// Index of the offending child.
        index: usize,
        /// The rejected margin value.
        value: f32,
    },

    /// A child's explicit style size is negative or not finite.
    #[error("child {index}: explicit {axis:?} size {size} is invalid")]
    InvalidStyleSize {
        /// Index of the offending child.
        index: usize,
        /// The dimension carrying the bad size.
        axis: FlexDirection,
        /// The rejected size.
        size: f32,
    },
}

/// Checks the per-child parameters of `container` against the accessor
/// contract, returning the first violation found.
///
/// This is the detection hook the engine deliberately omits from the hot
/// path: [`layout_flex`](super::layout_flex) assumes a conforming accessor
/// and only `debug_assert!`s these conditions.
pub fn verify_context<C: LayoutContext>(
    ctx: &C,
    container: C::Widget,
) -> Result<(), ContractViolation> {
    for index in 0..ctx.child_count(container) {
        let child = ctx.child_at(container, index);
        let params = ctx.layout_params(child);

        if matches!(params.align, Align::SpaceBetween | Align::SpaceAround) {
            return Err(ContractViolation::InvalidChildAlign { index, align: params.align });
        }
        if !params.flex.is_finite() {
            return Err(ContractViolation::NonFiniteFlex { index, flex: params.flex });
        }
        for value in [
            params.margin_top,
            params.margin_right,
            params.margin_bottom,
            params.margin_left,
        ] {
            if !value.is_finite() {
                return Err(ContractViolation::NonFiniteMargin { index, value });
            }
        }
        for axis in [FlexDirection::Row, FlexDirection::Column] {
            if let Some(size) = params.style_size(axis) {
                if !size.is_finite() || size < 0.0 {
                    return Err(ContractViolation::InvalidStyleSize { index, axis, size });
                }
            }
        }
    }
    Ok(())
}
