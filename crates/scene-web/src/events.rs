//! Event wiring with explicit teardown. Every closure registered here is
//! retained by a guard; dropping the guard removes the listener, so no
//! callback can fire after a scene handle is disposed.

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Removal happens on drop.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    func: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.func);
    }
}

/// Attach a typed event listener to `target`.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
) -> ListenerGuard
where
    E: 'static,
    dyn FnMut(E): WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let _ = target.add_event_listener_with_callback(event, &func);
    ListenerGuard {
        target: target.clone(),
        event,
        func,
        _closure: Box::new(closure),
    }
}

/// Attach a zero-argument event listener to `target`.
pub fn listen_void(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
) -> ListenerGuard {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let _ = target.add_event_listener_with_callback(event, &func);
    ListenerGuard {
        target: target.clone(),
        event,
        func,
        _closure: Box::new(closure),
    }
}

/// A `ResizeObserver` subscription on one element. Disconnected on drop.
pub struct ObserverGuard {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `element` for size changes. The callback's entry list is
/// irrelevant here; observers always re-measure from the live layout.
pub fn observe_resize(
    element: &web::Element,
    handler: impl FnMut() + 'static,
) -> Option<ObserverGuard> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref()).ok()?;
    observer.observe(element);
    Some(ObserverGuard {
        observer,
        _closure: closure,
    })
}
