// Test doubles for the drawing surface and the frame scheduler.
#![allow(dead_code)]

use grooove_core::{DrawingSurface, FrameScheduler, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(f64, f64, f64, f64),
    BeginPath,
    SetFillColor(Rgba),
    Disc(f64, f64, f64),
    Fill,
    Release,
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(Call::Clear(x, y, width, height));
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn set_fill_color(&mut self, color: Rgba) {
        self.calls.push(Call::SetFillColor(color));
    }
    fn draw_disc(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.calls.push(Call::Disc(center_x, center_y, radius));
    }
    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }
    fn release(&mut self) {
        self.calls.push(Call::Release);
    }
}

/// Hands out increasing handles and remembers which ones are live.
#[derive(Default)]
pub struct ManualScheduler {
    next: u32,
    pub live: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub requests: usize,
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn schedule_next_frame(&mut self) -> Option<u32> {
        self.next += 1;
        self.requests += 1;
        self.live.push(self.next);
        Some(self.next)
    }

    fn cancel(&mut self, handle: u32) {
        self.live.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
