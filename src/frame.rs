use crate::surface::CanvasSurface;
use grooove_core::{FrameDriver, FrameScheduler, Grooove};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` scheduler; every request re-arms the shared tick closure.
pub struct RafScheduler {
    window: web::Window,
    tick: Tick,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule_next_frame(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

pub type CanvasDriver = FrameDriver<RafScheduler, CanvasSurface>;

/// Keeps the running loop reachable so it can be stopped.
pub struct LoopHandle {
    driver: Rc<RefCell<CanvasDriver>>,
    tick: Tick,
}

impl LoopHandle {
    pub fn stop(self) {
        self.driver.borrow_mut().stop();
        // The tick closure owns the driver; dropping it breaks the cycle.
        drop(self.tick.borrow_mut().take());
    }
}

pub fn start_loop(grooove: Grooove, surface: CanvasSurface) -> anyhow::Result<LoopHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick: Tick = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window,
        tick: tick.clone(),
    };
    let driver = Rc::new(RefCell::new(FrameDriver::new(grooove, scheduler, surface)));

    let driver_tick = driver.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        driver_tick.borrow_mut().on_frame(timestamp);
    }) as Box<dyn FnMut(f64)>));

    driver.borrow_mut().start();
    Ok(LoopHandle { driver, tick })
}
