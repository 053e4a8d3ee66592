//! All 2d-canvas drawing for both scenes. The core crate owns every number;
//! this module only turns state into strokes and fills, in logical units
//! (the dpr transform is applied by `dom::apply_backing_size`).

use scene_core::{Hue, ParticleField, ParticleKind, StreamRing, Tone, Viewport};
use web_sys as web;

use crate::constants::*;

type Ctx = web::CanvasRenderingContext2d;

// ---------------- shared primitives ----------------

fn glow_line(ctx: &Ctx, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, glow: f64, width: f64) {
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.set_shadow_color(color);
    ctx.set_shadow_blur(glow);
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
    ctx.restore();
}

fn glow_node(ctx: &Ctx, x: f64, y: f64, color: &str, r: f64) {
    ctx.save();
    ctx.set_shadow_color(color);
    ctx.set_shadow_blur(18.0);
    if let Ok(g) = ctx.create_radial_gradient(x, y, 0.0, x, y, r * 2.2) {
        let _ = g.add_color_stop(0.0, &white(0.95));
        let _ = g.add_color_stop(0.35, color);
        let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
        ctx.set_fill_style_canvas_gradient(&g);
    }
    ctx.begin_path();
    let _ = ctx.arc(x, y, r * 2.2, 0.0, std::f64::consts::TAU);
    ctx.fill();
    ctx.restore();
}

// ---------------- ambient field ----------------

pub fn draw_field(ctx: &Ctx, field: &ParticleField) {
    let vp = field.viewport();
    let (w, h) = (vp.width as f64, vp.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_field_haze(ctx, vp);

    for edge in field.connections() {
        let tint = match edge.tone {
            Tone::Magenta => magenta(edge.alpha),
            Tone::Cyan => cyan(edge.alpha),
            Tone::Blue => blue(edge.alpha),
        };
        ctx.save();
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(&tint);
        ctx.begin_path();
        ctx.move_to(edge.a.x as f64, edge.a.y as f64);
        ctx.line_to(edge.b.x as f64, edge.b.y as f64);
        ctx.stroke();
        ctx.restore();
    }

    // block wireframes first, glow nodes on top
    for p in field.particles() {
        if p.kind == ParticleKind::Block {
            draw_block(ctx, p.pos.x as f64, p.pos.y as f64, p.radius as f64, p.tone);
        }
    }
    for p in field.particles() {
        if p.kind == ParticleKind::Node {
            draw_node_marker(ctx, p.pos.x as f64, p.pos.y as f64, p.radius as f64, p.tone);
        }
    }
}

fn draw_field_haze(ctx: &Ctx, vp: Viewport) {
    let (w, h) = (vp.width as f64, vp.height as f64);
    let min = vp.min_side() as f64;
    ctx.save();
    ctx.set_global_alpha(FIELD_HAZE_ALPHA);

    if let Ok(g) =
        ctx.create_radial_gradient(w * 0.35, h * 0.35, 0.0, w * 0.35, h * 0.35, min * 0.7)
    {
        let _ = g.add_color_stop(0.0, &blue(0.12));
        let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
    if let Ok(g) =
        ctx.create_radial_gradient(w * 0.68, h * 0.62, 0.0, w * 0.68, h * 0.62, min * 0.8)
    {
        let _ = g.add_color_stop(0.0, &magenta(0.10));
        let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
    ctx.restore();
}

/// Isometric wireframe cube, the "block" glyph.
fn draw_block(ctx: &Ctx, x: f64, y: f64, s: f64, tone: Tone) {
    let d = s * 0.55;
    let depth = s * 0.62;
    let stroke = match tone {
        Tone::Cyan => cyan(0.40),
        _ => magenta(0.34),
    };
    let shadow = match tone {
        Tone::Cyan => cyan(0.40),
        _ => magenta(0.28),
    };

    ctx.save();
    ctx.set_global_alpha(BLOCK_STROKE_ALPHA);
    ctx.set_shadow_blur(18.0);
    ctx.set_shadow_color(&shadow);
    ctx.set_line_width(1.2);
    ctx.set_stroke_style_str(&stroke);

    // top face
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x + d, y - d);
    ctx.line_to(x + d + s, y - d);
    ctx.line_to(x + s, y);
    ctx.close_path();
    ctx.stroke();

    // front face
    ctx.begin_path();
    ctx.move_to(x, y);
    ctx.line_to(x + s, y);
    ctx.line_to(x + s, y + depth);
    ctx.line_to(x, y + depth);
    ctx.close_path();
    ctx.stroke();

    // side face
    ctx.begin_path();
    ctx.move_to(x + s, y);
    ctx.line_to(x + d + s, y - d);
    ctx.line_to(x + d + s, y - d + depth);
    ctx.line_to(x + s, y + depth);
    ctx.close_path();
    ctx.stroke();

    ctx.restore();
}

fn draw_node_marker(ctx: &Ctx, x: f64, y: f64, r: f64, tone: Tone) {
    let (halo, fill) = match tone {
        Tone::Cyan => (cyan(0.30), cyan(0.85)),
        Tone::Magenta => (magenta(0.22), magenta(0.75)),
        Tone::Blue => (blue(0.22), blue(0.75)),
    };
    ctx.save();
    ctx.set_shadow_blur(16.0);
    ctx.set_shadow_color(&halo);
    ctx.set_global_alpha(NODE_FILL_ALPHA);
    ctx.set_fill_style_str(&fill);
    ctx.begin_path();
    let _ = ctx.arc(x, y, r + 2.2, 0.0, std::f64::consts::TAU);
    ctx.fill();

    ctx.set_shadow_blur(0.0);
    ctx.set_fill_style_str(&white(0.45));
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.fill();
    ctx.restore();
}

// ---------------- coin ring ----------------

pub fn draw_ring(ctx: &Ctx, ring: &StreamRing, symbol: &str) {
    draw_ring_backdrop(ctx, ring.viewport());
    draw_circuit_arms(ctx, ring);
    draw_orbit_rings(ctx, ring);
    draw_stream_glyphs(ctx, ring);
    draw_center_coin(ctx, ring, symbol);
}

fn draw_ring_backdrop(ctx: &Ctx, vp: Viewport) {
    let (w, h) = (vp.width as f64, vp.height as f64);
    let (cx, cy) = (w * 0.5, h * 0.5);
    let max = w.max(h);
    let min = w.min(h);

    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(&black(1.0));
    ctx.fill_rect(0.0, 0.0, w, h);

    if let Ok(g) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, max * 0.75) {
        let _ = g.add_color_stop(0.0, &cyan(0.10));
        let _ = g.add_color_stop(0.45, &magenta(0.06));
        let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    // vignette
    if let Ok(g) = ctx.create_radial_gradient(cx, cy, min * 0.1, cx, cy, max * 0.6) {
        let _ = g.add_color_stop(0.0, "rgba(0,0,0,0)");
        let _ = g.add_color_stop(1.0, &black(0.85));
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }
}

fn draw_circuit_arms(ctx: &Ctx, ring: &StreamRing) {
    let layout = ring.layout();
    let c = layout.center;
    let r = layout.ring_radius as f64;
    let (cx, cy) = (c.x as f64, c.y as f64);
    let left_x = cx - r * 1.55;
    let right_x = cx + r * 1.55;

    // left arm, cyan
    glow_line(ctx, left_x, cy - 60.0, cx - r * 0.95, cy - 30.0, &cyan(0.75), 16.0, 2.0);
    glow_line(ctx, left_x, cy, cx - r * 0.95, cy, &cyan(0.65), 16.0, 2.0);
    glow_line(ctx, left_x, cy + 60.0, cx - r * 0.95, cy + 30.0, &cyan(0.55), 14.0, 2.0);
    glow_node(ctx, left_x, cy - 60.0, &cyan(0.85), 4.0);
    glow_node(ctx, left_x, cy, &cyan(0.85), 5.0);
    glow_node(ctx, left_x, cy + 60.0, &cyan(0.80), 4.0);

    // right arm, amber
    glow_line(ctx, cx + r * 0.95, cy - 30.0, right_x, cy - 60.0, &amber(0.75), 16.0, 2.0);
    glow_line(ctx, cx + r * 0.95, cy, right_x, cy, &amber(0.65), 16.0, 2.0);
    glow_line(ctx, cx + r * 0.95, cy + 30.0, right_x, cy + 60.0, &amber(0.55), 14.0, 2.0);
    glow_node(ctx, right_x, cy - 60.0, &amber(0.85), 4.0);
    glow_node(ctx, right_x, cy, &amber(0.85), 5.0);
    glow_node(ctx, right_x, cy + 60.0, &amber(0.80), 4.0);
}

fn draw_orbit_rings(ctx: &Ctx, ring: &StreamRing) {
    let layout = ring.layout();
    let (cx, cy) = (layout.center.x as f64, layout.center.y as f64);
    let r = layout.ring_radius as f64;

    // primary ring, rotating with a left-to-right gradient stroke
    ctx.save();
    let _ = ctx.translate(cx, cy);
    let _ = ctx.rotate(ring.primary_rotation() as f64);
    let g = ctx.create_linear_gradient(-r, 0.0, r, 0.0);
    let _ = g.add_color_stop(0.0, &cyan(0.95));
    let _ = g.add_color_stop(0.48, &blue(0.85));
    let _ = g.add_color_stop(1.0, &amber(0.95));
    ctx.set_stroke_style_canvas_gradient(&g);
    ctx.set_line_width((r * 0.12).max(10.0));
    ctx.set_shadow_color(&cyan(0.35));
    ctx.set_shadow_blur(20.0);
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r, 0.0, std::f64::consts::TAU);
    ctx.stroke();
    ctx.restore();

    // counter-rotating dashed rings with advancing dash offsets
    ctx.save();
    let _ = ctx.translate(cx, cy);
    let _ = ctx.rotate(ring.dashed_rotation() as f64);
    for i in 0..scene_core::DASHED_RING_COUNT {
        let [on, off] = ring.dash_pattern(i);
        let dash = js_sys::Array::of2(&(on as f64).into(), &(off as f64).into());
        let _ = ctx.set_line_dash(&dash);
        ctx.set_line_dash_offset(ring.dash_offset(i) as f64);
        let tint = if i % 2 == 0 { cyan(0.30) } else { amber(0.26) };
        ctx.set_stroke_style_str(&tint);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, ring.dashed_radius(i) as f64, 0.0, std::f64::consts::TAU);
        ctx.stroke();
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());
    ctx.restore();
}

fn draw_stream_glyphs(ctx: &Ctx, ring: &StreamRing) {
    for p in ring.particles() {
        let alpha = ring.particle_alpha(p);
        if alpha <= 0.0 {
            continue;
        }
        let (x, y) = (p.pos.x as f64, p.pos.y as f64);
        let (tint, shadow) = match p.hue {
            Hue::Cyan => (cyan(alpha * 0.85), cyan(0.85)),
            Hue::Amber => (amber(alpha * 0.85), amber(0.85)),
        };
        let glyph = p.glyph.to_string();

        ctx.save();
        ctx.set_font(&format!("700 {}px {}", p.size.floor(), GLYPH_FONT_STACK));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_shadow_color(&shadow);
        ctx.set_shadow_blur(18.0);
        ctx.set_fill_style_str(&tint);
        let _ = ctx.fill_text(&glyph, x, y);

        // tiny core highlight
        ctx.set_shadow_blur(0.0);
        ctx.set_fill_style_str(&white(alpha * 0.25));
        let _ = ctx.fill_text(&glyph, x + 0.6, y - 0.6);
        ctx.restore();
    }
}

fn draw_center_coin(ctx: &Ctx, ring: &StreamRing, symbol: &str) {
    let layout = ring.layout();
    let (cx, cy) = (layout.center.x as f64, layout.center.y as f64);
    let r = layout.coin_radius as f64;

    ctx.save();

    // glassy base
    if let Ok(g) =
        ctx.create_radial_gradient(cx - r * 0.3, cy - r * 0.35, r * 0.1, cx, cy, r * 1.2)
    {
        let _ = g.add_color_stop(0.0, &white(0.12));
        let _ = g.add_color_stop(0.35, "rgba(4,16,34,0.92)");
        let _ = g.add_color_stop(1.0, &black(0.95));
        ctx.set_fill_style_canvas_gradient(&g);
    }
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, r, 0.0, std::f64::consts::TAU);
    ctx.fill();

    // rim glow, cyan into amber
    let g = ctx.create_linear_gradient(cx - r, cy, cx + r, cy);
    let _ = g.add_color_stop(0.0, &cyan(0.85));
    let _ = g.add_color_stop(1.0, &amber(0.85));
    ctx.set_stroke_style_canvas_gradient(&g);
    ctx.set_line_width(3.0);
    ctx.set_shadow_color(&white(0.14));
    ctx.set_shadow_blur(18.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, r + 1.5, 0.0, std::f64::consts::TAU);
    ctx.stroke();

    // faint inner rings
    ctx.set_global_alpha(0.5);
    ctx.set_stroke_style_str(&white(0.10));
    ctx.set_line_width(1.0);
    for i in 0..4 {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, r * (0.26 + i as f64 * 0.14), 0.0, std::f64::consts::TAU);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);

    // center glyph with a diagonal gradient and pulsing glow
    ctx.save();
    ctx.set_font(&format!("900 {}px {}", (r * 1.05).floor(), SYMBOL_FONT_STACK));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let g = ctx.create_linear_gradient(cx - r, cy - r, cx + r, cy + r);
    let _ = g.add_color_stop(0.0, &cyan(1.0));
    let _ = g.add_color_stop(0.55, &blue(1.0));
    let _ = g.add_color_stop(1.0, &amber(1.0));
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.set_shadow_color(&cyan(0.35));
    ctx.set_shadow_blur(ring.coin_glow_blur() as f64);
    let _ = ctx.fill_text(symbol, cx, cy + 2.0);

    // highlight outline
    ctx.set_line_width(2.0);
    ctx.set_stroke_style_str(&white(0.20));
    let _ = ctx.stroke_text(symbol, cx, cy + 2.0);
    ctx.restore();

    ctx.restore();
}
