//! One-shot splash overlay. All motion is CSS keyframes; the only scripted
//! parts are the staggered delays (from `scene_core::splash`) and the
//! self-dismiss timer, which is cleared on dispose so a stale completion
//! callback can never fire.

use std::cell::Cell;
use std::rc::Rc;

use scene_core::{SplashTimeline, Stage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{cyan, magenta, white};

const STYLE_ID: &str = "scene-splash-style";
const EXIT_FADE_MS: f32 = 450.0;
const EXIT_FADE_REDUCED_MS: f32 = 150.0;

pub struct SplashOptions {
    pub title: String,
    pub subtitle: String,
    pub duration_ms: Option<f32>,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            title: "UNLIMITED".to_string(),
            subtitle: "X LABS".to_string(),
            duration_ms: None,
        }
    }
}

/// Mounted overlay. Dropping it clears pending timers and removes the DOM
/// subtree; the completion callback fires at most once either way.
pub struct SplashOverlay {
    root: web::Element,
    timeouts: Vec<i32>,
    _closures: Vec<Closure<dyn FnMut()>>,
}

impl Drop for SplashOverlay {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            for id in self.timeouts.drain(..) {
                w.clear_timeout_with_handle(id);
            }
        }
        self.root.remove();
    }
}

pub fn mount(
    document: &web::Document,
    container: &web::Element,
    opts: SplashOptions,
    reduce_motion: bool,
    on_done: js_sys::Function,
) -> anyhow::Result<SplashOverlay> {
    ensure_keyframes(document)?;
    let timeline = SplashTimeline::new(opts.duration_ms, reduce_motion);

    let root = styled_div(
        document,
        "position:fixed;inset:0;z-index:9999;display:grid;place-items:center;\
         pointer-events:none;overflow:hidden;\
         background:radial-gradient(1200px 700px at 30% 35%,rgba(9,129,254,0.18),transparent 60%),\
         radial-gradient(1100px 750px at 70% 65%,rgba(217,85,254,0.16),transparent 60%),\
         linear-gradient(180deg,rgba(2,8,20,0.96),rgba(2,8,20,0.96));\
         transition:opacity 0.45s ease-out;",
    )?;

    // soft haze film behind everything, gently breathing unless reduced
    let haze = styled_div(
        document,
        &format!(
            "position:absolute;inset:-20%;filter:blur(18px);opacity:0.55;\
             background:radial-gradient(700px 400px at 25% 40%,rgba(8,230,254,0.11),transparent 60%),\
             radial-gradient(650px 420px at 75% 60%,rgba(217,85,254,0.09),transparent 60%),\
             radial-gradient(520px 360px at 55% 30%,rgba(9,129,254,0.08),transparent 60%);{}",
            if reduce_motion {
                ""
            } else {
                "animation:scene-splash-haze 3.6s ease-in-out infinite;"
            }
        ),
    )?;
    root.append_child(&haze).ok();

    // faint grid film
    let grid = styled_div(
        document,
        &format!(
            "position:absolute;inset:0;opacity:{};\
             background-image:linear-gradient(to right,rgba(252,253,253,0.05) 1px,transparent 1px),\
             linear-gradient(to bottom,rgba(252,253,253,0.05) 1px,transparent 1px);\
             background-size:56px 56px;\
             mask-image:radial-gradient(circle at 50% 45%,black 0%,transparent 70%);\
             -webkit-mask-image:radial-gradient(circle at 50% 45%,black 0%,transparent 70%);",
            if reduce_motion { 0.12 } else { 0.18 }
        ),
    )?;
    root.append_child(&grid).ok();

    // one scanline sweep on entry
    if !reduce_motion {
        let scanline = styled_div(
            document,
            "position:absolute;left:0;right:0;top:0;height:160px;opacity:0.9;filter:blur(1px);\
             background:linear-gradient(180deg,transparent 0%,rgba(8,230,254,0.10) 40%,\
             rgba(217,85,254,0.08) 60%,transparent 100%);\
             animation:scene-splash-scan 1.25s ease-in-out forwards;",
        )?;
        root.append_child(&scanline).ok();
    }

    // static noise grain over the whole overlay
    let noise = styled_div(
        document,
        "position:absolute;inset:0;opacity:0.12;mix-blend-mode:overlay;\
         background-image:url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' \
         width='180' height='180'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' \
         baseFrequency='.8' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E\
         %3Crect width='180' height='180' filter='url(%23n)' opacity='.55'/%3E%3C/svg%3E\");",
    )?;
    root.append_child(&noise).ok();

    let content = styled_div(
        document,
        "position:relative;z-index:2;text-align:center;padding:18px;",
    )?;

    // neon ring with two orbit dots
    let ring = styled_div(
        document,
        &format!(
            "width:210px;height:210px;border-radius:999px;margin:0 auto 18px;position:relative;\
             background:radial-gradient(circle at 30% 30%,rgba(8,230,254,0.18),transparent 55%),\
             radial-gradient(circle at 70% 70%,rgba(217,85,254,0.14),transparent 55%);\
             box-shadow:0 0 44px rgba(8,230,254,0.16),0 0 70px rgba(217,85,254,0.10),\
             inset 0 0 30px rgba(252,253,253,0.05);\
             border:1px solid rgba(252,253,253,0.10);{}",
            entrance_css(&timeline, Stage::Ring)
        ),
    )?;
    if !reduce_motion {
        let orbit = styled_div(
            document,
            "position:absolute;inset:0;animation:scene-splash-orbit 3.4s linear infinite;",
        )?;
        let dot_a = styled_div(
            document,
            &format!(
                "position:absolute;top:12px;left:50%;width:10px;height:10px;\
                 transform:translateX(-50%);border-radius:99px;background:{};box-shadow:0 0 18px {};",
                cyan(0.85),
                cyan(0.35)
            ),
        )?;
        let dot_b = styled_div(
            document,
            &format!(
                "position:absolute;bottom:18px;left:20%;width:8px;height:8px;\
                 border-radius:99px;background:{};box-shadow:0 0 18px {};",
                magenta(0.78),
                magenta(0.28)
            ),
        )?;
        orbit.append_child(&dot_a).ok();
        orbit.append_child(&dot_b).ok();
        ring.append_child(&orbit).ok();
    }
    content.append_child(&ring).ok();

    // glitch-duplicated title
    let title = styled_div(
        document,
        &format!(
            "display:inline-block;position:relative;font-weight:900;text-transform:uppercase;\
             letter-spacing:0.22em;font-size:clamp(22px,4.8vw,38px);color:{};\
             text-shadow:0 0 30px {};padding-left:8px;{}",
            white(0.92),
            cyan(0.18),
            entrance_css(&timeline, Stage::Title)
        ),
    )?;
    if !reduce_motion {
        for (offset, tint, delay) in [(2, cyan(0.65), 0.08), (-2, magenta(0.55), 0.11)] {
            let layer = glitch_layer(document, &opts.title, offset, &tint, delay)?;
            title.append_child(&layer).ok();
        }
    }
    let label = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("create_element: {e:?}"))?;
    label.set_text_content(Some(&opts.title));
    title.append_child(&label).ok();
    content.append_child(&title).ok();

    let subtitle = styled_div(
        document,
        &format!(
            "margin-top:10px;font-size:clamp(12px,2.6vw,14px);font-weight:800;\
             letter-spacing:0.42em;color:{};text-transform:uppercase;{}",
            white(0.78),
            entrance_css(&timeline, Stage::Subtitle)
        ),
    )?;
    subtitle.set_text_content(Some(&opts.subtitle));
    content.append_child(&subtitle).ok();

    let shimmer = styled_div(
        document,
        &format!(
            "height:1px;width:min(420px,78vw);margin:18px auto 0;\
             background:linear-gradient(90deg,transparent,rgba(8,230,254,0.55),\
             rgba(217,85,254,0.38),rgba(9,129,254,0.42),transparent);\
             box-shadow:0 0 24px rgba(8,230,254,0.12);{}",
            entrance_css(&timeline, Stage::Shimmer)
        ),
    )?;
    content.append_child(&shimmer).ok();

    let status = styled_div(
        document,
        &format!(
            "margin-top:14px;font-size:12px;letter-spacing:0.16em;color:{};\
             text-transform:uppercase;{}",
            white(0.55),
            entrance_css(&timeline, Stage::Status)
        ),
    )?;
    status.set_text_content(Some("Initializing Mainnet Experience\u{2026}"));
    content.append_child(&status).ok();

    root.append_child(&content).ok();
    container.append_child(&root).ok();

    // self-dismiss: fade, signal completion once, then detach
    let mut timeouts = Vec::new();
    let mut closures = Vec::new();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let fade_ms = if reduce_motion {
        EXIT_FADE_REDUCED_MS
    } else {
        EXIT_FADE_MS
    };

    let fired = Rc::new(Cell::new(false));
    let root_fade = root.clone();
    let fired_cb = fired.clone();
    let dismiss = Closure::wrap(Box::new(move || {
        if fired_cb.replace(true) {
            return;
        }
        let current = root_fade.get_attribute("style").unwrap_or_default();
        let _ = root_fade.set_attribute("style", &format!("{current}opacity:0;"));
        let _ = on_done.call0(&wasm_bindgen::JsValue::NULL);
    }) as Box<dyn FnMut()>);
    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        dismiss.as_ref().unchecked_ref(),
        timeline.duration_ms() as i32,
    ) {
        timeouts.push(id);
    }
    closures.push(dismiss);

    let root_detach = root.clone();
    let detach = Closure::wrap(Box::new(move || {
        root_detach.remove();
    }) as Box<dyn FnMut()>);
    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        detach.as_ref().unchecked_ref(),
        (timeline.duration_ms() + fade_ms) as i32,
    ) {
        timeouts.push(id);
    }
    closures.push(detach);

    Ok(SplashOverlay {
        root,
        timeouts,
        _closures: closures,
    })
}

fn styled_div(document: &web::Document, style: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {e:?}"))?;
    let _ = el.set_attribute("style", style);
    Ok(el)
}

fn glitch_layer(
    document: &web::Document,
    text: &str,
    offset_px: i32,
    tint: &str,
    delay_sec: f32,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("span")
        .map_err(|e| anyhow::anyhow!("create_element: {e:?}"))?;
    el.set_text_content(Some(text));
    let _ = el.set_attribute(
        "style",
        &format!(
            "position:absolute;left:{offset_px}px;top:0;color:{tint};mix-blend-mode:screen;\
             opacity:0;animation:scene-splash-glitch 0.9s ease-out {delay_sec}s;"
        ),
    );
    Ok(el)
}

/// Entrance animation fragment for one stage, using the core timeline's
/// stagger so the markup never hardcodes timing.
fn entrance_css(timeline: &SplashTimeline, stage: Stage) -> String {
    let reduce = timeline.reduce_motion();
    format!(
        "opacity:0;animation:scene-splash-in {}s ease-out {}s both;",
        stage.duration_sec(reduce),
        stage.delay_sec(reduce)
    )
}

/// Inject the shared keyframes once per document.
fn ensure_keyframes(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create_element: {e:?}"))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(
        "@keyframes scene-splash-in{from{opacity:0;transform:translateY(10px)}\
         to{opacity:1;transform:translateY(0)}}\
         @keyframes scene-splash-orbit{from{transform:rotate(0deg)}to{transform:rotate(360deg)}}\
         @keyframes scene-splash-glitch{0%{opacity:0}25%{opacity:1}50%{opacity:0}\
         75%{opacity:1}100%{opacity:0}}\
         @keyframes scene-splash-haze{0%{opacity:0.45;transform:scale(1)}\
         50%{opacity:0.62;transform:scale(1.06)}100%{opacity:0.48;transform:scale(1.02)}}\
         @keyframes scene-splash-scan{from{transform:translateY(-120%)}\
         to{transform:translateY(100vh)}}",
    ));
    if let Some(head) = document.head() {
        head.append_child(&style).ok();
    }
    Ok(())
}
