use scene_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Platform reduced-motion preference, read once at mount.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn device_pixel_ratio() -> f32 {
    web::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0)
}

pub fn get_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{id} is not a canvas"))
}

/// 2d context, or `None` when the surface is unsupported. Callers render
/// nothing in that case; canvas support is an environment precondition.
pub fn context2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Field sizing: the canvas element's own bounding box.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::from_bounds(rect.width() as f32, rect.height() as f32, device_pixel_ratio())
}

/// Ring sizing: the parent container's bounding box, falling back to the
/// canvas itself when the canvas is detached.
pub fn parent_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = match canvas.parent_element() {
        Some(parent) => parent.get_bounding_client_rect(),
        None => canvas.get_bounding_client_rect(),
    };
    Viewport::from_bounds_ring(rect.width() as f32, rect.height() as f32, device_pixel_ratio())
}

/// Apply the sizing contract: backing store = logical * dpr, then a
/// transform so all drawing happens in logical units.
pub fn apply_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    vp: Viewport,
) {
    let (pw, ph) = vp.physical();
    canvas.set_width(pw);
    canvas.set_height(ph);
    let dpr = vp.dpr as f64;
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

/// The ring canvas also pins its CSS size so the backing store and layout
/// box agree.
pub fn apply_css_size(canvas: &web::HtmlCanvasElement, vp: Viewport) {
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", vp.width));
    let _ = style.set_property("height", &format!("{}px", vp.height));
}
