#![cfg(target_arch = "wasm32")]
//! WASM bindings for the neon canvas scenes. Each `mount_*` function binds
//! one scene to an element and returns a handle whose `dispose` tears down
//! the frame loop, listeners and timers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_core::{FrameClock, ParticleField, RingConfig, StreamRing};
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod render;

use events::{ListenerGuard, ObserverGuard};
use frame::{FieldFrame, RafLoop, RingFrame};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web ready");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Handle for a mounted ambient field scene.
#[wasm_bindgen]
pub struct FieldHandle {
    raf: Option<RafLoop>,
    listeners: Vec<ListenerGuard>,
}

#[wasm_bindgen]
impl FieldHandle {
    /// Cancel the frame loop and remove all listeners. Idempotent.
    pub fn dispose(&mut self) {
        self.raf.take();
        self.listeners.clear();
        log::info!("particle field disposed");
    }
}

/// Mount the ambient blockchain background on `canvas_id`.
///
/// The canvas fills its own bounding box; resizing the window rebuilds the
/// particle population. Without 2d-canvas support the scene stays blank.
#[wasm_bindgen]
pub fn mount_particle_field(canvas_id: &str) -> Result<FieldHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::get_canvas(&document, canvas_id).map_err(to_js)?;
    let Some(ctx) = dom::context2d(&canvas) else {
        log::warn!("2d context unavailable; particle field stays blank");
        return Ok(FieldHandle {
            raf: None,
            listeners: Vec::new(),
        });
    };

    let reduce_motion = dom::prefers_reduced_motion();
    let vp = dom::canvas_viewport(&canvas);
    dom::apply_backing_size(&canvas, &ctx, vp);

    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(vp, reduce_motion, &mut rng);
    let pointer = Rc::new(RefCell::new(scene_core::PointerState::default()));
    let resize_pending = Rc::new(Cell::new(false));

    let frame_ctx = Rc::new(RefCell::new(FieldFrame {
        canvas: canvas.clone(),
        ctx,
        field,
        clock: FrameClock::new(),
        rng,
        pointer: pointer.clone(),
        resize_pending: resize_pending.clone(),
        start: Instant::now(),
    }));

    let mut listeners = Vec::new();
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let win_target: &web::EventTarget = window.as_ref();

    {
        let pointer = pointer.clone();
        let canvas_for_move = canvas.clone();
        listeners.push(events::listen(
            win_target,
            "mousemove",
            move |ev: web::MouseEvent| {
                let rect = canvas_for_move.get_bounding_client_rect();
                let mut ps = pointer.borrow_mut();
                ps.pos = Vec2::new(
                    ev.client_x() as f32 - rect.left() as f32,
                    ev.client_y() as f32 - rect.top() as f32,
                );
                ps.active = true;
            },
        ));
    }
    {
        let pointer = pointer.clone();
        listeners.push(events::listen_void(win_target, "mouseleave", move || {
            pointer.borrow_mut().active = false;
        }));
    }
    {
        let resize_pending = resize_pending.clone();
        let frame_for_resize = frame_ctx.clone();
        listeners.push(events::listen_void(win_target, "resize", move || {
            resize_pending.set(true);
            // without a loop the static layout still re-renders on resize
            if reduce_motion {
                frame_for_resize.borrow_mut().frame();
            }
        }));
    }

    let raf = if reduce_motion {
        // one static frame; drift and pointer nudges are suppressed in core
        frame_ctx.borrow_mut().frame();
        None
    } else {
        let frame_tick = frame_ctx.clone();
        Some(frame::start_loop(move || frame_tick.borrow_mut().frame()))
    };

    log::info!("particle field mounted on #{canvas_id} (reduced motion: {reduce_motion})");
    Ok(FieldHandle { raf, listeners })
}

/// Handle for a mounted coin ring scene.
#[wasm_bindgen]
pub struct RingHandle {
    raf: Option<RafLoop>,
    observer: Option<ObserverGuard>,
}

#[wasm_bindgen]
impl RingHandle {
    /// Cancel the frame loop and disconnect the resize observer. Idempotent.
    pub fn dispose(&mut self) {
        self.raf.take();
        self.observer.take();
        log::info!("coin ring disposed");
    }
}

/// Mount the binary coin ring on `canvas_id`. The canvas tracks its parent
/// element's size; all options fall back to the tuned defaults.
#[wasm_bindgen]
pub fn mount_coin_ring(
    canvas_id: &str,
    symbol: Option<String>,
    alphabet: Option<String>,
    speed: Option<f32>,
    density: Option<f32>,
    spin: Option<f32>,
) -> Result<RingHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = dom::get_canvas(&document, canvas_id).map_err(to_js)?;
    let Some(ctx) = dom::context2d(&canvas) else {
        log::warn!("2d context unavailable; coin ring stays blank");
        return Ok(RingHandle {
            raf: None,
            observer: None,
        });
    };

    let defaults = RingConfig::default();
    let config = RingConfig {
        symbol: symbol.unwrap_or(defaults.symbol),
        alphabet: alphabet.unwrap_or(defaults.alphabet),
        speed: speed.unwrap_or(defaults.speed),
        density: density.unwrap_or(defaults.density),
        spin: spin.unwrap_or(defaults.spin),
    };

    let vp = dom::parent_viewport(&canvas);
    dom::apply_backing_size(&canvas, &ctx, vp);
    dom::apply_css_size(&canvas, vp);

    let resize_pending = Rc::new(Cell::new(false));
    let frame_ctx = Rc::new(RefCell::new(RingFrame {
        canvas: canvas.clone(),
        ctx,
        symbol: config.symbol.clone(),
        ring: StreamRing::new(&config, vp),
        rng: StdRng::from_entropy(),
        resize_pending: resize_pending.clone(),
    }));

    let observer = canvas.parent_element().and_then(|parent| {
        let resize_pending = resize_pending.clone();
        events::observe_resize(&parent, move || resize_pending.set(true))
    });

    let frame_tick = frame_ctx.clone();
    let raf = Some(frame::start_loop(move || frame_tick.borrow_mut().frame()));

    log::info!("coin ring mounted on #{canvas_id}");
    Ok(RingHandle { raf, observer })
}

/// Handle for a mounted splash overlay.
#[wasm_bindgen]
pub struct SplashHandle {
    overlay: Option<overlay::SplashOverlay>,
}

#[wasm_bindgen]
impl SplashHandle {
    /// Clear the dismiss timer and remove the overlay. The completion
    /// callback will not fire after this. Idempotent.
    pub fn dispose(&mut self) {
        self.overlay.take();
        log::info!("splash disposed");
    }
}

/// Mount the time-boxed splash overlay inside `container_id`. `on_done`
/// fires exactly once when the splash self-dismisses.
#[wasm_bindgen]
pub fn mount_splash(
    container_id: &str,
    title: Option<String>,
    subtitle: Option<String>,
    duration_ms: Option<f64>,
    on_done: js_sys::Function,
) -> Result<SplashHandle, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{container_id}")))?;

    let defaults = overlay::SplashOptions::default();
    let opts = overlay::SplashOptions {
        title: title.unwrap_or(defaults.title),
        subtitle: subtitle.unwrap_or(defaults.subtitle),
        duration_ms: duration_ms.map(|ms| ms as f32),
    };
    let reduce_motion = dom::prefers_reduced_motion();
    let mounted =
        overlay::mount(&document, &container, opts, reduce_motion, on_done).map_err(to_js)?;

    log::info!("splash mounted in #{container_id} (reduced motion: {reduce_motion})");
    Ok(SplashHandle {
        overlay: Some(mounted),
    })
}
