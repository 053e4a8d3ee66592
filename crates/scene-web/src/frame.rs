//! Per-scene frame contexts and the self-rescheduling animation loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use rand::rngs::StdRng;
use scene_core::{FrameClock, ParticleField, PointerState, StreamRing};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render;

/// Handle for a running requestAnimationFrame loop. `cancel` stops
/// rescheduling and cancels the pending frame; no callback fires afterwards.
pub struct RafLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // drop the closure to break the self-referential Rc cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Start a continuous loop calling `frame` once per animation frame.
pub fn start_loop(mut frame: impl FnMut() + 'static) -> RafLoop {
    let raf_id = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_inner = tick.clone();
    let raf_id_inner = raf_id.clone();
    let running_inner = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_inner.get() {
            return;
        }
        frame();
        if !running_inner.get() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_inner.borrow().as_ref()) {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id_inner.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
    RafLoop {
        raf_id,
        running,
        tick,
    }
}

/// Mutable per-frame state for the ambient field scene.
pub struct FieldFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: ParticleField,
    pub clock: FrameClock,
    pub rng: StdRng,
    pub pointer: Rc<RefCell<PointerState>>,
    pub resize_pending: Rc<Cell<bool>>,
    pub start: Instant,
}

impl FieldFrame {
    pub fn frame(&mut self) {
        if self.resize_pending.take() {
            let vp = dom::canvas_viewport(&self.canvas);
            dom::apply_backing_size(&self.canvas, &self.ctx, vp);
            self.field.resize(vp, &mut self.rng);
        }
        let now_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        let dt = self.clock.tick(now_ms);
        self.field.step(dt, *self.pointer.borrow());
        render::draw_field(&self.ctx, &self.field);
    }
}

/// Mutable per-frame state for the coin ring scene.
pub struct RingFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub ring: StreamRing,
    pub rng: StdRng,
    pub symbol: String,
    pub resize_pending: Rc<Cell<bool>>,
}

impl RingFrame {
    pub fn frame(&mut self) {
        if self.resize_pending.take() {
            let vp = dom::parent_viewport(&self.canvas);
            dom::apply_backing_size(&self.canvas, &self.ctx, vp);
            dom::apply_css_size(&self.canvas, vp);
            self.ring.resize(vp);
        }
        self.ring.step(&mut self.rng);
        render::draw_ring(&self.ctx, &self.ring, &self.symbol);
    }
}
