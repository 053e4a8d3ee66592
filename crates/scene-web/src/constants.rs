// Palette and web-side drawing constants. The four neon tints come from the
// product style guide; alpha varies per use, so these are format helpers.

pub const FIELD_HAZE_ALPHA: f64 = 0.22;
pub const NODE_FILL_ALPHA: f64 = 0.55;
pub const BLOCK_STROKE_ALPHA: f64 = 0.22;

pub const GLYPH_FONT_STACK: &str =
    "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace";
pub const SYMBOL_FONT_STACK: &str =
    "ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, Arial";

#[inline]
pub fn cyan(alpha: f32) -> String {
    format!("rgba(8,230,254,{alpha})")
}

#[inline]
pub fn magenta(alpha: f32) -> String {
    format!("rgba(217,85,254,{alpha})")
}

#[inline]
pub fn blue(alpha: f32) -> String {
    format!("rgba(9,129,254,{alpha})")
}

#[inline]
pub fn amber(alpha: f32) -> String {
    format!("rgba(255,170,40,{alpha})")
}

#[inline]
pub fn white(alpha: f32) -> String {
    format!("rgba(252,253,253,{alpha})")
}

#[inline]
pub fn black(alpha: f32) -> String {
    format!("rgba(0,0,0,{alpha})")
}
