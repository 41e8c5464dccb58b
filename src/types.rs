//! Core types for flexpass.
//!
//! Everything here is a plain value type: the engine reads these through the
//! [`LayoutContext`](crate::layout::LayoutContext) accessor and holds no state
//! of its own between calls.
//!
//! Unset sizes and unconstrained availability are both expressed as
//! `Option<f32>` with `None` meaning "no value". `None` never compares equal
//! to a defined size and is distinguishable from zero, which matters in basis
//! resolution (a zero available size disables flex, an unconstrained one does
//! not).

// =============================================================================
// AXES
// =============================================================================

/// Direction in which a container places its children.
///
/// The chosen direction is the *main* axis; the perpendicular one is the
/// *cross* axis. All per-child geometry is resolved axis-relative and mapped
/// to width/height and x/y at the accessor boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Children are placed horizontally.
    #[default]
    Row,
    /// Children are placed vertically.
    Column,
}

impl FlexDirection {
    /// The axis perpendicular to this one.
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

// =============================================================================
// MEASURE MODES
// =============================================================================

/// Sizing requirement imposed on a widget for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// No constraint imposed; the widget sizes to its content.
    #[default]
    Unspecified,
    /// The supplied size is definitive.
    Exactly,
    /// The supplied size is an upper bound.
    AtMost,
}

// =============================================================================
// ALIGNMENT
// =============================================================================

/// Alignment of items within a container.
///
/// Used two ways: as container-level main-axis justification (all variants
/// valid; `Stretch` behaves as `Start` there) and as per-child cross-axis
/// alignment, where `SpaceBetween` and `SpaceAround` are meaningless and
/// rejected by [`verify_context`](crate::layout::verify_context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The start margin edge of the item is flush with the start of the line.
    #[default]
    Start,
    /// The end margin edge of the item is flush with the end of the line.
    End,
    /// The margin box of the item is centered.
    Center,
    /// Leftover space is allocated equally between the items.
    SpaceBetween,
    /// Leftover space is allocated equally around the items.
    SpaceAround,
    /// The item fills the line on the cross axis.
    Stretch,
}

// =============================================================================
// PER-CHILD PARAMETERS
// =============================================================================

/// Layout intent for one child of a flex container.
///
/// Exactly one of three regimes governs the child's main-axis basis: an
/// explicit style size (always wins), a non-zero `flex` weight (basis
/// defaults to zero, space comes from grow/shrink distribution), or neither
/// (the child is measured through its own `layout`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexParams {
    /// Cross-axis alignment of this child.
    pub align: Align,
    /// Signed flex weight.
    ///
    /// A value greater than zero is a grow factor: the child receives a share
    /// of leftover space equal to its weight divided by the sum of all
    /// positive weights. A negative value means the child shrinks with unit
    /// factor in the event of main-axis overflow. Zero makes the child
    /// non-flexible.
    pub flex: f32,
    /// Explicit width, or `None` if unset.
    pub width: Option<f32>,
    /// Explicit height, or `None` if unset.
    pub height: Option<f32>,
    /// Margin above the item.
    pub margin_top: f32,
    /// Margin to the right of the item.
    pub margin_right: f32,
    /// Margin below the item.
    pub margin_bottom: f32,
    /// Margin to the left of the item.
    pub margin_left: f32,
}

impl Default for FlexParams {
    fn default() -> Self {
        Self {
            align: Align::Stretch,
            flex: 0.0,
            width: None,
            height: None,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
        }
    }
}

impl FlexParams {
    /// The explicit style size along `axis`, if set.
    #[inline]
    pub fn style_size(&self, axis: FlexDirection) -> Option<f32> {
        match axis {
            FlexDirection::Row => self.width,
            FlexDirection::Column => self.height,
        }
    }

    /// The margin on the leading edge along `axis` (left for row, top for
    /// column).
    #[inline]
    pub fn leading_margin(&self, axis: FlexDirection) -> f32 {
        match axis {
            FlexDirection::Row => self.margin_left,
            FlexDirection::Column => self.margin_top,
        }
    }

    /// The margin on the trailing edge along `axis`.
    #[inline]
    pub fn trailing_margin(&self, axis: FlexDirection) -> f32 {
        match axis {
            FlexDirection::Row => self.margin_right,
            FlexDirection::Column => self.margin_bottom,
        }
    }

    /// Both margins along `axis` combined.
    #[inline]
    pub fn margin(&self, axis: FlexDirection) -> f32 {
        self.leading_margin(axis) + self.trailing_margin(axis)
    }

    /// The grow factor: the flex weight when positive, zero otherwise.
    #[inline]
    pub fn grow_factor(&self) -> f32 {
        if self.flex > 0.0 { self.flex } else { 0.0 }
    }

    /// The shrink factor: one when the flex weight is negative, zero
    /// otherwise. Shrink is scaled by the child's basis, so all shrinkable
    /// children share a unit factor.
    #[inline]
    pub fn shrink_factor(&self) -> f32 {
        if self.flex < 0.0 { 1.0 } else { 0.0 }
    }

    /// Whether the main-axis basis comes from measurement rather than the
    /// flex weight.
    #[inline]
    pub fn is_basis_auto(&self) -> bool {
        self.flex <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular() {
        assert_eq!(FlexDirection::Row.perpendicular(), FlexDirection::Column);
        assert_eq!(FlexDirection::Column.perpendicular(), FlexDirection::Row);
    }

    #[test]
    fn test_margin_lookup() {
        let params = FlexParams {
            margin_top: 1.0,
            margin_right: 2.0,
            margin_bottom: 3.0,
            margin_left: 4.0,
            ..Default::default()
        };

        assert_eq!(params.leading_margin(FlexDirection::Row), 4.0);
        assert_eq!(params.trailing_margin(FlexDirection::Row), 2.0);
        assert_eq!(params.margin(FlexDirection::Row), 6.0);
        assert_eq!(params.leading_margin(FlexDirection::Column), 1.0);
        assert_eq!(params.trailing_margin(FlexDirection::Column), 3.0);
        assert_eq!(params.margin(FlexDirection::Column), 4.0);
    }

    #[test]
    fn test_flex_factors() {
        let grow = FlexParams { flex: 2.0, ..Default::default() };
        assert_eq!(grow.grow_factor(), 2.0);
        assert_eq!(grow.shrink_factor(), 0.0);
        assert!(!grow.is_basis_auto());

        let shrink = FlexParams { flex: -1.0, ..Default::default() };
        assert_eq!(shrink.grow_factor(), 0.0);
        assert_eq!(shrink.shrink_factor(), 1.0);
        assert!(shrink.is_basis_auto());

        let fixed = FlexParams::default();
        assert_eq!(fixed.grow_factor(), 0.0);
        assert_eq!(fixed.shrink_factor(), 0.0);
        assert!(fixed.is_basis_auto());
    }

    #[test]
    fn test_style_size_distinguishes_unset_from_zero() {
        let unset = FlexParams::default();
        assert_eq!(unset.style_size(FlexDirection::Row), None);

        let zero = FlexParams { width: Some(0.0), ..Default::default() };
        assert_eq!(zero.style_size(FlexDirection::Row), Some(0.0));
    }
}
