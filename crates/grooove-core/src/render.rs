//! Compositing: turns a frame's circles into drawing calls.
//!
//! Consecutive circles sharing the same alpha are collected into one path and
//! filled once, which keeps fill-style changes to a minimum.

use crate::frame::CircleDescriptor;
use crate::layout::LayoutConstants;

/// 8-bit RGB colour, validated before it reaches the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// CSS colour string, e.g. `rgba(255,71,138,1)`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// The drawing backend the compositor paints into.
pub trait DrawingSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn set_fill_color(&mut self, color: Rgba);
    /// Adds a full circular contour to the current path.
    fn draw_disc(&mut self, center_x: f64, center_y: f64, radius: f64);
    fn fill(&mut self);
    /// Called once when the animation stops; the surface must not be drawn to afterwards.
    fn release(&mut self) {}
}

/// A maximal run of consecutive circles with identical alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillBatch<'a> {
    pub alpha: f64,
    pub circles: &'a [CircleDescriptor],
}

pub struct FillBatches<'a> {
    rest: &'a [CircleDescriptor],
}

impl<'a> Iterator for FillBatches<'a> {
    type Item = FillBatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let alpha = self.rest.first()?.alpha;
        let len = self
            .rest
            .iter()
            .position(|c| c.alpha != alpha)
            .unwrap_or(self.rest.len());
        let (circles, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(FillBatch { alpha, circles })
    }
}

/// Split circles into fill batches, preserving order. Alpha is compared exactly.
pub fn fill_batches(circles: &[CircleDescriptor]) -> FillBatches<'_> {
    FillBatches { rest: circles }
}

/// Paint one frame. `clear` wipes the whole surface first (skipped on the very
/// first frame, when nothing has been drawn yet). Returns the number of fills issued.
pub fn paint_frame<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &LayoutConstants,
    circles: &[CircleDescriptor],
    color: Rgb,
    clear: bool,
) -> usize {
    if clear {
        surface.clear(0.0, 0.0, layout.width, layout.height);
    }
    let mut fills = 0;
    for batch in fill_batches(circles) {
        surface.begin_path();
        surface.set_fill_color(color.with_alpha(batch.alpha));
        for circle in batch.circles {
            surface.draw_disc(circle.center.x, circle.center.y, circle.radius);
        }
        surface.fill();
        fills += 1;
    }
    fills
}
