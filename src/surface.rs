use grooove_core::{DrawingSurface, Rgba};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas-backed drawing surface. Releasing it detaches the canvas from its root.
pub struct CanvasSurface {
    context: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    root: web::Node,
}

impl CanvasSurface {
    pub fn new(
        context: web::CanvasRenderingContext2d,
        canvas: web::HtmlCanvasElement,
        root: web::Node,
    ) -> Self {
        Self {
            context,
            canvas,
            root,
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.context.set_fill_style_str(&color.to_css());
    }

    fn draw_disc(&mut self, center_x: f64, center_y: f64, radius: f64) {
        if let Err(e) = self.context.arc(center_x, center_y, radius, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn release(&mut self) {
        if let Err(e) = self.root.remove_child(&self.canvas) {
            log::warn!("could not detach canvas: {:?}", e);
        }
    }
}
