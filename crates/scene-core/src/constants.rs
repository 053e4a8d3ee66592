// Shared tuning constants for both canvas scenes.

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.033; // clamp for delta-seconds after a backgrounded tab
pub const FRAME_RATE_SCALE: f32 = 60.0; // velocities are tuned against a 60fps step
pub const RING_TIME_STEP: f32 = 1.0 / 60.0; // fixed per-frame advance of the ring clock

// Viewport
pub const DPR_MIN: f32 = 1.0;
pub const DPR_MAX: f32 = 2.0;
pub const RING_MIN_WIDTH: f32 = 320.0; // ring scene floors its logical size
pub const RING_MIN_HEIGHT: f32 = 240.0;

// Ambient field population
pub const NODE_AREA_DIVISOR: f32 = 22_000.0;
pub const NODE_COUNT_MIN: usize = 26;
pub const NODE_COUNT_MAX: usize = 75;
pub const BLOCK_AREA_DIVISOR: f32 = 140_000.0;
pub const BLOCK_COUNT_MIN: usize = 5;
pub const BLOCK_COUNT_MAX: usize = 14;

// Node tone split: single uniform draw, cumulative cuts -> 45/25/30
pub const TONE_CYAN_CUT: f32 = 0.45;
pub const TONE_BLUE_CUT: f32 = 0.70;

// Ambient field motion
pub const WRAP_MARGIN: f32 = 30.0; // toroidal re-entry band around the bounds
pub const POINTER_NUDGE: f32 = 0.06;
pub const BLOCK_NUDGE_FACTOR: f32 = 0.6; // blocks react less than nodes

// Connections between node particles
pub const CONNECT_DIST_DIVISOR: f32 = 7.0;
pub const CONNECT_DIST_MIN: f32 = 110.0;
pub const CONNECT_DIST_MAX: f32 = 150.0;
pub const CONNECT_ALPHA: f32 = 0.28;

// Coin ring geometry (fractions of min(w, h))
pub const RING_RADIUS_FRACTION: f32 = 0.28;
pub const COIN_RADIUS_FRACTION: f32 = 0.16;
pub const FADE_RADIUS_FRACTION: f32 = 0.16; // glyphs dim inside this radius
pub const ABSORB_RADIUS_FRACTION: f32 = 0.11; // glyphs are removed inside this radius

// Ring rotation
pub const PRIMARY_SPIN_RATE: f32 = 0.25;
pub const DASHED_SPIN_RATE: f32 = 0.15;
pub const DASHED_RING_COUNT: usize = 4;

// Lane layout (offsets in logical px, fractions of the ring radius)
pub const LANE_SPAWN_X_FRACTION: f32 = 1.55;
pub const LANE_AIM_X_FRACTION: f32 = 0.55;
pub const LANE_Y_OFFSET: f32 = 60.0;
pub const LANE_AIM_Y_OFFSET: f32 = 22.0;
pub const LANE_COUNT: usize = 6;

// Stream emission
pub const EMIT_PROBABILITY: f32 = 0.55; // per frame, scaled by density
pub const EMIT_BASE_COUNT: f32 = 2.0; // scaled by density, plus uniform[0, 2)
pub const SPAWN_JITTER: f32 = 6.0;
pub const SPAWN_SPEED_MIN: f32 = 1.8;
pub const SPAWN_SPEED_MAX: f32 = 3.6;
pub const STREAM_LIFE_MIN: f32 = 75.0;
pub const STREAM_LIFE_MAX: f32 = 140.0;
pub const STREAM_SIZE_MIN: f32 = 14.0;
pub const STREAM_SIZE_MAX: f32 = 20.0;

// Stream integration
pub const ATTRACTION_GAIN: f32 = 0.0009; // pull toward the coin center, scaled by speed
pub const STREAM_DAMPING: f32 = 0.992;
pub const FADE_INNER_ALPHA: f32 = 0.2; // opacity multiplier inside the fade radius

// Splash overlay
pub const SPLASH_DURATION_MS: f32 = 2100.0;
pub const SPLASH_REDUCED_MS: f32 = 350.0;
