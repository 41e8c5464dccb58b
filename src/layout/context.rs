//! The widget accessor boundary.
//!
//! The engine has zero compile-time knowledge of any concrete widget
//! representation; everything it reads or writes goes through
//! [`LayoutContext`]. Hosts implement the trait over whatever storage they
//! use — an arena of nodes addressed by index, a pointer-based view tree, a
//! set of parallel arrays.

use crate::types::{FlexParams, MeasureMode};

/// Accessor interface between the layout engine and a host widget tree.
///
/// Widgets are addressed by a cheap `Copy` handle (typically an arena index).
/// All handles obtained through [`child_at`](Self::child_at) are only used
/// for the duration of one [`layout_flex`](crate::layout::layout_flex) call.
///
/// # Contract
///
/// - [`child_count`](Self::child_count) is stable for the duration of one
///   layout call, and [`child_at`](Self::child_at) must accept every index
///   below it.
/// - [`layout_params`](Self::layout_params) must return parameters consistent
///   with the widget for the duration of the call.
/// - [`layout`](Self::layout) must synchronously leave the widget's queryable
///   width and height (and, if the widget is itself a container, its
///   descendants' geometry) consistent with the constraints passed. It must
///   be idempotent and have no side effects beyond writing geometry. A
///   container child typically re-enters
///   [`layout_flex`](crate::layout::layout_flex) here.
///
/// Violations are not detected on the hot path; see
/// [`verify_context`](crate::layout::verify_context) for an explicit check.
pub trait LayoutContext {
    /// Handle addressing one widget in the host tree.
    type Widget: Copy;

    /// Sets the x-coordinate of the widget's leading edge, relative to its
    /// parent's coordinate space.
    fn set_x(&mut self, widget: Self::Widget, x: f32);

    /// Sets the y-coordinate of the widget's leading edge, relative to its
    /// parent's coordinate space.
    fn set_y(&mut self, widget: Self::Widget, y: f32);

    /// Returns the width most recently set by [`set_width`](Self::set_width)
    /// or a layout pass, whichever happened later.
    fn width(&self, widget: Self::Widget) -> f32;

    /// Returns the height most recently set by
    /// [`set_height`](Self::set_height) or a layout pass, whichever happened
    /// later.
    fn height(&self, widget: Self::Widget) -> f32;

    /// Overwrites the widget's width.
    fn set_width(&mut self, widget: Self::Widget, width: f32);

    /// Overwrites the widget's height.
    fn set_height(&mut self, widget: Self::Widget, height: f32);

    /// Returns the number of children of the container.
    fn child_count(&self, widget: Self::Widget) -> usize;

    /// Returns the child of the container at the given zero-based index.
    fn child_at(&self, widget: Self::Widget, index: usize) -> Self::Widget;

    /// Returns the layout parameters of the widget.
    fn layout_params(&self, widget: Self::Widget) -> FlexParams;

    /// Lays out the widget under the given constraints.
    ///
    /// `None` sizes mean "no constraint" and only occur together with
    /// [`MeasureMode::Unspecified`] or [`MeasureMode::AtMost`].
    fn layout(
        &mut self,
        widget: Self::Widget,
        width: Option<f32>,
        width_mode: MeasureMode,
        height: Option<f32>,
        height_mode: MeasureMode,
    );
}
