//! Animation lifecycle: `Idle -> Running -> Stopped`, plus the driver binding it to a
//! frame scheduler and a drawing surface.

use crate::error::GroooveError;
use crate::frame::compute_frame;
use crate::layout::LayoutConstants;
use crate::options::Options;
use crate::params::AnimationParams;
use crate::render::{paint_frame, DrawingSurface, Rgb};

/// Milliseconds since the first frame.
///
/// Starts on the first tick; every later tick measures against that timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    start_ms: Option<f64>,
}

impl AnimationClock {
    /// Returns the elapsed time and whether this was the first tick.
    pub fn tick(&mut self, timestamp_ms: f64) -> (f64, bool) {
        match self.start_ms {
            Some(start) => ((timestamp_ms - start).max(0.0), false),
            None => {
                self.start_ms = Some(timestamp_ms);
                (0.0, true)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Running(AnimationClock),
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Frame painted; schedule the next one.
    Continue,
    /// Nothing painted; do not reschedule.
    Halt,
}

pub struct Grooove {
    layout: LayoutConstants,
    color: Rgb,
    phase: Phase,
}

impl Grooove {
    pub fn new(
        width: f64,
        height: f64,
        options: &Options,
        params: &AnimationParams,
    ) -> Result<Self, GroooveError> {
        Ok(Self {
            layout: LayoutConstants::new(width, height, params)?,
            color: options.color,
            phase: Phase::Idle,
        })
    }

    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// `Idle -> Running`. Returns `false` if already started or stopped.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            log::warn!("[grooove] start ignored in phase {:?}", self.phase);
            return false;
        }
        log::info!(
            "[grooove] start {}x{} circles={}",
            self.layout.width,
            self.layout.height,
            self.layout.circle_count
        );
        self.phase = Phase::Running(AnimationClock::default());
        true
    }

    /// Compute and paint the frame for `timestamp_ms`.
    pub fn render_frame<S: DrawingSurface + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        surface: &mut S,
    ) -> FrameStatus {
        let Phase::Running(clock) = &mut self.phase else {
            return FrameStatus::Halt;
        };
        let (elapsed_ms, first) = clock.tick(timestamp_ms);
        let frame = compute_frame(elapsed_ms, &self.layout);
        paint_frame(surface, &self.layout, &frame.circles, self.color, !first);
        FrameStatus::Continue
    }

    /// `Running -> Stopped` (also allowed from `Idle`). Returns `false` if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.phase == Phase::Stopped {
            return false;
        }
        log::info!("[grooove] stop");
        self.phase = Phase::Stopped;
        true
    }
}

/// Source of display-refresh callbacks. The scheduled callback is expected to
/// call [`FrameDriver::on_frame`] with a non-decreasing millisecond timestamp.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback on the next refresh. `None` if the request failed.
    fn schedule_next_frame(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Runs a [`Grooove`] on a scheduler, painting into a surface.
pub struct FrameDriver<Sch: FrameScheduler, Surf: DrawingSurface> {
    grooove: Grooove,
    scheduler: Sch,
    surface: Surf,
    pending: Option<Sch::Handle>,
}

impl<Sch: FrameScheduler, Surf: DrawingSurface> FrameDriver<Sch, Surf> {
    pub fn new(grooove: Grooove, scheduler: Sch, surface: Surf) -> Self {
        Self {
            grooove,
            scheduler,
            surface,
            pending: None,
        }
    }

    pub fn grooove(&self) -> &Grooove {
        &self.grooove
    }

    pub fn surface(&self) -> &Surf {
        &self.surface
    }

    pub fn scheduler(&self) -> &Sch {
        &self.scheduler
    }

    pub fn start(&mut self) {
        if self.grooove.start() {
            self.pending = self.scheduler.schedule_next_frame();
        }
    }

    /// Scheduler callback. Paints, then reschedules unless stopped.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.pending = None;
        match self.grooove.render_frame(timestamp_ms, &mut self.surface) {
            FrameStatus::Continue => self.pending = self.scheduler.schedule_next_frame(),
            FrameStatus::Halt => log::warn!("[grooove] frame dropped, animation not running"),
        }
    }

    /// Cancels the pending frame and releases the surface. Later calls do nothing.
    pub fn stop(&mut self) {
        if !self.grooove.stop() {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.surface.release();
    }
}
