//! Single-pass flex layout.
//!
//! [`layout_flex`] lays out one container's immediate children in four
//! phases, executed once, with no backtracking:
//!
//! 1. **Basis resolution**: each child's main-axis starting size, from its
//!    explicit style size, a zero flex basis, or a provisional measurement.
//! 2. **Flexible resizing**: leftover space is distributed to growing
//!    children by weight, deficits to shrinking children in proportion to
//!    their basis; every child is laid out for real at its resolved size.
//! 3. **Main-axis placement**: leading offset and inter-child gaps per the
//!    container's justification, then a running cursor positions each child.
//! 4. **Cross-axis placement**: stretch children are re-laid-out to fill the
//!    cross extent; the rest get a start/center/end offset.
//!
//! Recursion over a widget tree happens by re-entry: the accessor's `layout`
//! callback may call [`layout_flex`] again for a child that is itself a
//! container. The engine keeps no state between calls.
//!
//! # Rounding
//!
//! All arithmetic is plain `f32` with no rounding step anywhere: cursor
//! positions accumulate fractional gaps exactly as computed. Hosts that need
//! integral coordinates round at the accessor boundary.

use log::trace;

use crate::types::{Align, FlexDirection, FlexParams, MeasureMode};

use super::context::LayoutContext;

/// The widget's current size along `axis`, as reported by the accessor.
#[inline]
fn layout_size<C: LayoutContext>(ctx: &C, widget: C::Widget, axis: FlexDirection) -> f32 {
    match axis {
        FlexDirection::Row => ctx.width(widget),
        FlexDirection::Column => ctx.height(widget),
    }
}

/// Whether an available size lets flexible children claim space.
///
/// Zero disables flex; a defined non-zero size and an unconstrained (`None`)
/// one both allow it.
#[inline]
fn allows_flex(available: Option<f32>) -> bool {
    available.is_none_or(|size| size != 0.0)
}

/// Provisional constraint for one dimension of a child about to be measured.
///
/// An explicit style size is imposed exactly. A stretch child whose cross
/// axis is this dimension inherits the container's exact size. Everything
/// else sees the available size as an upper bound, with `Unspecified`
/// propagated through.
fn provisional_constraint(
    params: &FlexParams,
    dimension: FlexDirection,
    cross_axis: FlexDirection,
    available: Option<f32>,
    mode: MeasureMode,
) -> (Option<f32>, MeasureMode) {
    if let Some(style) = params.style_size(dimension) {
        (Some(style), MeasureMode::Exactly)
    } else if cross_axis == dimension && mode == MeasureMode::Exactly && params.align == Align::Stretch {
        (available, MeasureMode::Exactly)
    } else {
        let mode = if mode == MeasureMode::Unspecified {
            MeasureMode::Unspecified
        } else {
            MeasureMode::AtMost
        };
        (available, mode)
    }
}

/// Lays out the immediate children of `container` and reports its size.
///
/// Every child has its position and size written through `ctx`, and the
/// container's own width and height are written last: the supplied available
/// size on an axis whose mode is [`MeasureMode::Exactly`], the computed
/// content extent otherwise. The container's own position is untouched; it
/// belongs to the caller.
///
/// `direction` selects the main axis; `justify` distributes main-axis slack
/// when no child can grow. Shrunk children are *not* clamped at zero: under
/// extreme overflow a child may be assigned a negative main size.
///
/// The call is stateless and idempotent: repeating it with identical inputs
/// and no external mutation yields identical geometry.
#[allow(clippy::too_many_arguments)]
pub fn layout_flex<C: LayoutContext>(
    ctx: &mut C,
    container: C::Widget,
    width: Option<f32>,
    width_mode: MeasureMode,
    height: Option<f32>,
    height_mode: MeasureMode,
    direction: FlexDirection,
    justify: Align,
) {
    let main_axis = direction;
    let cross_axis = main_axis.perpendicular();
    let child_count = ctx.child_count(container);

    let (main_mode, cross_mode) = match main_axis {
        FlexDirection::Row => (width_mode, height_mode),
        FlexDirection::Column => (height_mode, width_mode),
    };
    let (available_main, available_cross) = match main_axis {
        FlexDirection::Row => (width, height),
        FlexDirection::Column => (height, width),
    };
    debug_assert!(
        main_mode != MeasureMode::Exactly || available_main.is_some(),
        "Exactly mode requires a defined available size on the main axis"
    );
    debug_assert!(
        cross_mode != MeasureMode::Exactly || available_cross.is_some(),
        "Exactly mode requires a defined available size on the cross axis"
    );

    // =========================================================================
    // PHASE 1: Resolve each child's main-axis basis
    // =========================================================================

    let mut bases = vec![0.0f32; child_count];
    let mut size_consumed = 0.0f32;
    let mut total_grow = 0.0f32;
    let mut total_shrink_scaled = 0.0f32;

    for (i, basis_slot) in bases.iter_mut().enumerate() {
        let child = ctx.child_at(container, i);
        let params = ctx.layout_params(child);
        debug_assert!(params.flex.is_finite(), "flex weight must be finite");

        let basis = if let Some(style) = params.style_size(main_axis) {
            style
        } else if !params.is_basis_auto() && allows_flex(available_main) {
            // Flexible children start from a zero basis; their real size
            // comes from the distribution below.
            0.0
        } else {
            // Measure the child to obtain its content size.
            let (child_width, child_width_mode) =
                provisional_constraint(&params, FlexDirection::Row, cross_axis, width, width_mode);
            let (child_height, child_height_mode) =
                provisional_constraint(&params, FlexDirection::Column, cross_axis, height, height_mode);
            ctx.layout(child, child_width, child_width_mode, child_height, child_height_mode);
            layout_size(ctx, child, main_axis)
        };

        *basis_slot = basis;
        size_consumed += basis + params.margin(main_axis);
        total_grow += params.grow_factor();
        total_shrink_scaled += params.shrink_factor() * basis;
    }

    // =========================================================================
    // PHASE 2: Distribute remaining space and lay out each child for real
    // =========================================================================

    let remaining_space = match available_main {
        Some(available) if available != 0.0 => available - size_consumed,
        _ => 0.0,
    };
    trace!(
        "layout_flex: {child_count} children, consumed {size_consumed}, \
         remaining {remaining_space}, grow {total_grow}, shrink {total_shrink_scaled}"
    );

    for (i, &basis) in bases.iter().enumerate() {
        let child = ctx.child_at(container, i);
        let params = ctx.layout_params(child);
        let cross_style = params.style_size(cross_axis);
        let mut child_main = basis;

        if remaining_space < 0.0 {
            let shrink_scaled = params.shrink_factor() * basis;
            if shrink_scaled != 0.0 {
                child_main += remaining_space / total_shrink_scaled * shrink_scaled;
            }
        } else if remaining_space > 0.0 {
            let grow = params.grow_factor();
            if grow != 0.0 {
                child_main += remaining_space / total_grow * grow;
            }
        }

        let child_cross = cross_style.or(available_cross);
        let child_cross_mode = if cross_style.is_some()
            || (cross_mode == MeasureMode::Exactly && params.align == Align::Stretch)
        {
            MeasureMode::Exactly
        } else if cross_mode == MeasureMode::Unspecified {
            MeasureMode::Unspecified
        } else {
            MeasureMode::AtMost
        };

        match main_axis {
            FlexDirection::Row => ctx.layout(
                child,
                Some(child_main),
                MeasureMode::Exactly,
                child_cross,
                child_cross_mode,
            ),
            FlexDirection::Column => ctx.layout(
                child,
                child_cross,
                child_cross_mode,
                Some(child_main),
                MeasureMode::Exactly,
            ),
        }
    }

    // =========================================================================
    // PHASE 3: Justify and position along the main axis
    // =========================================================================

    let mut leading_main = 0.0f32;
    let mut between_main = 0.0f32;
    if total_grow == 0.0 && remaining_space > 0.0 && main_mode == MeasureMode::Exactly {
        match justify {
            Align::Center => leading_main = remaining_space / 2.0,
            Align::End => leading_main = remaining_space,
            Align::SpaceBetween => {
                if child_count > 1 {
                    between_main = remaining_space / (child_count - 1) as f32;
                }
            }
            Align::SpaceAround => {
                between_main = remaining_space / child_count as f32;
                leading_main = between_main / 2.0;
            }
            // Start, and Stretch as a justification, leave children at the
            // leading edge.
            Align::Start | Align::Stretch => {}
        }
    }

    let mut main_size = leading_main;
    let mut cross_size = 0.0f32;
    for i in 0..child_count {
        let child = ctx.child_at(container, i);
        let params = ctx.layout_params(child);

        let main_pos = main_size + params.leading_margin(main_axis);
        match main_axis {
            FlexDirection::Row => ctx.set_x(child, main_pos),
            FlexDirection::Column => ctx.set_y(child, main_pos),
        }
        main_size += between_main + layout_size(ctx, child, main_axis) + params.margin(main_axis);
        cross_size = cross_size.max(layout_size(ctx, child, cross_axis) + params.margin(cross_axis));
    }

    // Definite dimensions override the content-derived extents.
    if main_mode == MeasureMode::Exactly {
        if let Some(available) = available_main {
            main_size = available;
        }
    }
    if cross_mode == MeasureMode::Exactly {
        if let Some(available) = available_cross {
            cross_size = available;
        }
    }

    // =========================================================================
    // PHASE 4: Align along the cross axis
    // =========================================================================

    for i in 0..child_count {
        let child = ctx.child_at(container, i);
        let params = ctx.layout_params(child);
        debug_assert!(
            !matches!(params.align, Align::SpaceBetween | Align::SpaceAround),
            "SpaceBetween/SpaceAround are container justifications, not child alignments"
        );
        let mut leading_cross = 0.0f32;

        match params.align {
            Align::Stretch => {
                // Re-lay-out to fill the line, unless the cross size was
                // already definite from the child's style.
                if params.style_size(cross_axis).is_none() {
                    let stretched = cross_size - params.margin(cross_axis);
                    let (child_width, child_height) = match cross_axis {
                        FlexDirection::Row => (stretched, ctx.height(child)),
                        FlexDirection::Column => (ctx.width(child), stretched),
                    };
                    ctx.layout(
                        child,
                        Some(child_width),
                        MeasureMode::Exactly,
                        Some(child_height),
                        MeasureMode::Exactly,
                    );
                }
            }
            Align::Center | Align::End => {
                let free =
                    cross_size - layout_size(ctx, child, cross_axis) - params.margin(cross_axis);
                leading_cross = if params.align == Align::Center { free / 2.0 } else { free };
            }
            _ => {}
        }

        let cross_pos = leading_cross + params.leading_margin(cross_axis);
        match cross_axis {
            FlexDirection::Row => ctx.set_x(child, cross_pos),
            FlexDirection::Column => ctx.set_y(child, cross_pos),
        }
    }

    // Report the container's own size.
    trace!("layout_flex: container main {main_size}, cross {cross_size}");
    match main_axis {
        FlexDirection::Row => {
            ctx.set_width(container, main_size);
            ctx.set_height(container, cross_size);
        }
        FlexDirection::Column => {
            ctx.set_width(container, cross_size);
            ctx.set_height(container, main_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_flex() {
        assert!(allows_flex(Some(100.0)));
        assert!(allows_flex(None));
        assert!(!allows_flex(Some(0.0)));
    }

    #[test]
    fn test_provisional_constraint_explicit_size_wins() {
        let params = FlexParams { width: Some(40.0), ..Default::default() };
        let (size, mode) = provisional_constraint(
            &params,
            FlexDirection::Row,
            FlexDirection::Row,
            Some(100.0),
            MeasureMode::AtMost,
        );
        assert_eq!(size, Some(40.0));
        assert_eq!(mode, MeasureMode::Exactly);
    }

    #[test]
    fn test_provisional_constraint_stretch_inherits_exact_cross() {
        let params = FlexParams { align: Align::Stretch, ..Default::default() };
        let (size, mode) = provisional_constraint(
            &params,
            FlexDirection::Column,
            FlexDirection::Column,
            Some(60.0),
            MeasureMode::Exactly,
        );
        assert_eq!(size, Some(60.0));
        assert_eq!(mode, MeasureMode::Exactly);
    }

    #[test]
    fn test_provisional_constraint_demotes_to_at_most() {
        let params = FlexParams { align: Align::Start, ..Default::default() };
        let (size, mode) = provisional_constraint(
            &params,
            FlexDirection::Row,
            FlexDirection::Column,
            Some(100.0),
            MeasureMode::Exactly,
        );
        assert_eq!(size, Some(100.0));
        assert_eq!(mode, MeasureMode::AtMost);
    }

    #[test]
    fn test_provisional_constraint_propagates_unspecified() {
        let params = FlexParams::default();
        let (size, mode) = provisional_constraint(
            &params,
            FlexDirection::Row,
            FlexDirection::Column,
            None,
            MeasureMode::Unspecified,
        );
        assert_eq!(size, None);
        assert_eq!(mode, MeasureMode::Unspecified);
    }
}
