//! Arena widget tree used by the integration suite.
//!
//! Nodes are indices into a flat vector, in the parallel-index style the
//! engine expects from hosts. A leaf resolves its own size from a fixed
//! content measure; a container node re-enters `layout_flex` from its
//! `layout` callback, exercising the re-entrant path the engine is built
//! around.

use flexpass::{Align, FlexDirection, FlexParams, LayoutContext, MeasureMode, layout_flex};

/// One widget in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub params: FlexParams,
    pub children: Vec<usize>,
    /// Intrinsic content size for leaves.
    pub measure: (f32, f32),
    /// Set when the node is itself a flex container.
    pub flex: Option<(FlexDirection, Align)>,
}

/// Arena widget tree implementing [`LayoutContext`].
#[derive(Debug, Default)]
pub struct TestTree {
    nodes: Vec<Node>,
}

impl TestTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf with zero intrinsic size.
    pub fn leaf(&mut self, params: FlexParams) -> usize {
        self.measured(params, 0.0, 0.0)
    }

    /// Adds a leaf whose content measures `width` × `height`.
    pub fn measured(&mut self, params: FlexParams, width: f32, height: f32) -> usize {
        self.nodes.push(Node {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            params,
            children: Vec::new(),
            measure: (width, height),
            flex: None,
        });
        self.nodes.len() - 1
    }

    /// Adds a container that lays out `children` with the given direction
    /// and justification whenever its own `layout` is invoked.
    pub fn container(
        &mut self,
        params: FlexParams,
        direction: FlexDirection,
        justify: Align,
        children: &[usize],
    ) -> usize {
        self.nodes.push(Node {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            params,
            children: children.to_vec(),
            measure: (0.0, 0.0),
            flex: Some((direction, justify)),
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Computed frame of a node as (x, y, width, height).
    pub fn frame(&self, index: usize) -> (f32, f32, f32, f32) {
        let node = &self.nodes[index];
        (node.x, node.y, node.width, node.height)
    }

    /// Frames of every node, for whole-tree snapshots.
    pub fn frames(&self) -> Vec<(f32, f32, f32, f32)> {
        (0..self.nodes.len()).map(|i| self.frame(i)).collect()
    }
}

/// Resolves one dimension of a leaf under a measurement constraint.
fn resolve_leaf(content: f32, available: Option<f32>, mode: MeasureMode) -> f32 {
    match mode {
        MeasureMode::Exactly => available.unwrap_or(content),
        MeasureMode::AtMost => match available {
            Some(limit) => content.min(limit),
            None => content,
        },
        MeasureMode::Unspecified => content,
    }
}

impl LayoutContext for TestTree {
    type Widget = usize;

    fn set_x(&mut self, widget: usize, x: f32) {
        self.nodes[widget].x = x;
    }

    fn set_y(&mut self, widget: usize, y: f32) {
        self.nodes[widget].y = y;
    }

    fn width(&self, widget: usize) -> f32 {
        self.nodes[widget].width
    }

    fn height(&self, widget: usize) -> f32 {
        self.nodes[widget].height
    }

    fn set_width(&mut self, widget: usize, width: f32) {
        self.nodes[widget].width = width;
    }

    fn set_height(&mut self, widget: usize, height: f32) {
        self.nodes[widget].height = height;
    }

    fn child_count(&self, widget: usize) -> usize {
        self.nodes[widget].children.len()
    }

    fn child_at(&self, widget: usize, index: usize) -> usize {
        self.nodes[widget].children[index]
    }

    fn layout_params(&self, widget: usize) -> FlexParams {
        self.nodes[widget].params
    }

    fn layout(
        &mut self,
        widget: usize,
        width: Option<f32>,
        width_mode: MeasureMode,
        height: Option<f32>,
        height_mode: MeasureMode,
    ) {
        if let Some((direction, justify)) = self.nodes[widget].flex {
            layout_flex(self, widget, width, width_mode, height, height_mode, direction, justify);
        } else {
            let (content_w, content_h) = self.nodes[widget].measure;
            self.nodes[widget].width = resolve_leaf(content_w, width, width_mode);
            self.nodes[widget].height = resolve_leaf(content_h, height, height_mode);
        }
    }
}

/// Asserts two floats are within a thousandth of each other.
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
