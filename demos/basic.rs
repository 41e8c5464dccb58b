//! Basic example - a fixed header and footer around a flexible body.
//!
//! Builds a small arena widget tree, implements `LayoutContext` over it, and
//! lays out a 320x240 column. The body row is itself a flex container, so its
//! `layout` callback re-enters `layout_flex` - that re-entry is the whole
//! tree-traversal story.
//!
//! Run with: cargo run --example basic

use flexpass::{Align, FlexDirection, FlexParams, LayoutContext, MeasureMode, layout_flex};

#[derive(Debug, Default, Clone)]
struct Widget {
    name: &'static str,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    params: FlexParams,
    children: Vec<usize>,
    flex: Option<(FlexDirection, Align)>,
}

#[derive(Debug, Default)]
struct App {
    widgets: Vec<Widget>,
}

impl App {
    fn add(&mut self, widget: Widget) -> usize {
        self.widgets.push(widget);
        self.widgets.len() - 1
    }
}

impl LayoutContext for App {
    type Widget = usize;

    fn set_x(&mut self, w: usize, x: f32) {
        self.widgets[w].x = x;
    }

    fn set_y(&mut self, w: usize, y: f32) {
        self.widgets[w].y = y;
    }

    fn width(&self, w: usize) -> f32 {
        self.widgets[w].width
    }

    fn height(&self, w: usize) -> f32 {
        self.widgets[w].height
    }

    fn set_width(&mut self, w: usize, width: f32) {
        self.widgets[w].width = width;
    }

    fn set_height(&mut self, w: usize, height: f32) {
        self.widgets[w].height = height;
    }

    fn child_count(&self, w: usize) -> usize {
        self.widgets[w].children.len()
    }

    fn child_at(&self, w: usize, index: usize) -> usize {
        self.widgets[w].children[index]
    }

    fn layout_params(&self, w: usize) -> FlexParams {
        self.widgets[w].params
    }

    fn layout(
        &mut self,
        w: usize,
        width: Option<f32>,
        width_mode: MeasureMode,
        height: Option<f32>,
        height_mode: MeasureMode,
    ) {
        if let Some((direction, justify)) = self.widgets[w].flex {
            layout_flex(self, w, width, width_mode, height, height_mode, direction, justify);
        } else {
            // Leaves have no intrinsic content here; they take what they are
            // given and are otherwise zero-sized.
            if width_mode == MeasureMode::Exactly {
                self.widgets[w].width = width.unwrap_or(0.0);
            }
            if height_mode == MeasureMode::Exactly {
                self.widgets[w].height = height.unwrap_or(0.0);
            }
        }
    }
}

fn main() {
    let mut app = App::default();

    let header = app.add(Widget {
        name: "header",
        params: FlexParams { height: Some(32.0), ..Default::default() },
        ..Default::default()
    });

    let sidebar = app.add(Widget {
        name: "sidebar",
        params: FlexParams { width: Some(80.0), ..Default::default() },
        ..Default::default()
    });
    let content = app.add(Widget {
        name: "content",
        params: FlexParams { flex: 1.0, ..Default::default() },
        ..Default::default()
    });
    let body = app.add(Widget {
        name: "body",
        params: FlexParams { flex: 1.0, ..Default::default() },
        children: vec![sidebar, content],
        flex: Some((FlexDirection::Row, Align::Start)),
        ..Default::default()
    });

    let footer = app.add(Widget {
        name: "footer",
        params: FlexParams { height: Some(24.0), ..Default::default() },
        ..Default::default()
    });

    let root = app.add(Widget {
        name: "root",
        children: vec![header, body, footer],
        flex: Some((FlexDirection::Column, Align::Start)),
        ..Default::default()
    });

    layout_flex(
        &mut app,
        root,
        Some(320.0),
        MeasureMode::Exactly,
        Some(240.0),
        MeasureMode::Exactly,
        FlexDirection::Column,
        Align::Start,
    );

    println!("=== flexpass basic example ===\n");
    for widget in &app.widgets {
        println!(
            "{:<8} x={:<6.1} y={:<6.1} w={:<6.1} h={:.1}",
            widget.name, widget.x, widget.y, widget.width, widget.height
        );
    }
}
