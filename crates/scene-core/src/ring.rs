//! Coin ring scene: orbiting dashed rings around a center coin, fed by two
//! arms of transient glyph particles that curve inward and sink into it.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::config::RingConfig;
use crate::constants::*;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Cyan,
    Amber,
}

#[derive(Clone, Copy, Debug)]
pub struct StreamParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames elapsed since spawn.
    pub age: f32,
    pub max_age: f32,
    pub glyph: char,
    pub size: f32,
    pub hue: Hue,
}

/// One of the six fixed emission lanes. Spawn and aim points are derived
/// from the current viewport; the lane structure itself never changes.
#[derive(Clone, Copy, Debug)]
pub struct Lane {
    pub spawn: Vec2,
    pub aim: Vec2,
    pub hue: Hue,
}

/// Size-derived geometry shared by the renderer and the particle pass.
#[derive(Clone, Copy, Debug)]
pub struct RingLayout {
    pub center: Vec2,
    pub ring_radius: f32,
    pub coin_radius: f32,
    pub fade_radius: f32,
    pub absorb_radius: f32,
}

impl RingLayout {
    pub fn new(viewport: Viewport) -> Self {
        let min_side = viewport.min_side();
        Self {
            center: viewport.center(),
            ring_radius: min_side * RING_RADIUS_FRACTION,
            coin_radius: min_side * COIN_RADIUS_FRACTION,
            fade_radius: min_side * FADE_RADIUS_FRACTION,
            absorb_radius: min_side * ABSORB_RADIUS_FRACTION,
        }
    }

    /// Three cyan lanes on the left, three amber on the right.
    pub fn lanes(&self) -> [Lane; LANE_COUNT] {
        let c = self.center;
        let r = self.ring_radius;
        let spawn_dx = r * LANE_SPAWN_X_FRACTION;
        let aim_dx = r * LANE_AIM_X_FRACTION;
        let make = |side: f32, y_off: f32, aim_y_off: f32, hue: Hue| Lane {
            spawn: Vec2::new(c.x + side * spawn_dx, c.y + y_off),
            aim: Vec2::new(c.x + side * aim_dx, c.y + aim_y_off),
            hue,
        };
        [
            make(-1.0, -LANE_Y_OFFSET, -LANE_AIM_Y_OFFSET, Hue::Cyan),
            make(-1.0, 0.0, 0.0, Hue::Cyan),
            make(-1.0, LANE_Y_OFFSET, LANE_AIM_Y_OFFSET, Hue::Cyan),
            make(1.0, -LANE_Y_OFFSET, -LANE_AIM_Y_OFFSET, Hue::Amber),
            make(1.0, 0.0, 0.0, Hue::Amber),
            make(1.0, LANE_Y_OFFSET, LANE_AIM_Y_OFFSET, Hue::Amber),
        ]
    }
}

pub struct StreamRing {
    glyphs: Vec<char>,
    speed: f32,
    density: f32,
    spin: f32,
    viewport: Viewport,
    particles: Vec<StreamParticle>,
    /// Scene clock, advanced by 1/60 per frame.
    t: f32,
}

impl StreamRing {
    pub fn new(config: &RingConfig, viewport: Viewport) -> Self {
        Self {
            glyphs: config.glyphs(),
            speed: config.speed,
            density: config.density,
            spin: config.spin,
            viewport,
            particles: Vec::new(),
            t: 0.0,
        }
    }

    /// Resize updates the derived geometry only. Live particles keep flying
    /// and the six-lane structure is untouched.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn layout(&self) -> RingLayout {
        RingLayout::new(self.viewport)
    }

    /// Advance the scene by one frame: clock, stochastic emission, particle
    /// integration and culling.
    pub fn step(&mut self, rng: &mut impl Rng) {
        self.t += RING_TIME_STEP;
        let layout = self.layout();

        if rng.gen::<f32>() < EMIT_PROBABILITY * self.density {
            let batch = self.spawn_batch(&layout, rng);
            self.particles.extend(batch);
        }

        let center = layout.center;
        let speed = self.speed;
        for p in &mut self.particles {
            integrate_stream(p, center, speed);
        }
        self.particles
            .retain(|p| !stream_expired(p, center, layout.absorb_radius));
    }

    fn spawn_batch(
        &self,
        layout: &RingLayout,
        rng: &mut impl Rng,
    ) -> SmallVec<[StreamParticle; 4]> {
        let lanes = layout.lanes();
        let count = (EMIT_BASE_COUNT * self.density + rng.gen_range(0.0..2.0)).floor() as usize;
        let mut batch = SmallVec::new();
        for _ in 0..count {
            let lane = lanes[rng.gen_range(0..lanes.len())];
            let glyph = self.glyphs[rng.gen_range(0..self.glyphs.len())];
            let dir = (lane.aim - lane.spawn).normalize_or_zero();
            let jitter = Vec2::new(
                rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
                rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER),
            );
            batch.push(StreamParticle {
                pos: lane.spawn + jitter,
                vel: dir * rng.gen_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MAX) * self.speed,
                age: 0.0,
                max_age: rng.gen_range(STREAM_LIFE_MIN..STREAM_LIFE_MAX),
                glyph,
                size: rng.gen_range(STREAM_SIZE_MIN..STREAM_SIZE_MAX),
                hue: lane.hue,
            });
        }
        batch
    }

    /// Opacity for a live particle: linear lifetime fade, dimmed sharply
    /// once inside the fade radius so the glyph sinks into the coin.
    pub fn particle_alpha(&self, p: &StreamParticle) -> f32 {
        let layout = self.layout();
        stream_alpha(p, layout.center, layout.fade_radius)
    }

    // --- decor values the renderer reads each frame ---

    pub fn time(&self) -> f32 {
        self.t
    }

    pub fn primary_rotation(&self) -> f32 {
        self.t * PRIMARY_SPIN_RATE * self.spin
    }

    pub fn dashed_rotation(&self) -> f32 {
        -self.t * DASHED_SPIN_RATE * self.spin
    }

    pub fn dashed_radius(&self, i: usize) -> f32 {
        self.layout().ring_radius * (0.72 - i as f32 * 0.09)
    }

    pub fn dash_pattern(&self, i: usize) -> [f32; 2] {
        [10.0 + i as f32 * 4.0, 14.0 + i as f32 * 6.0]
    }

    pub fn dash_offset(&self, i: usize) -> f32 {
        -self.t * (60.0 + i as f32 * 18.0)
    }

    /// Shadow blur for the center glyph, pulsing gently with the clock.
    pub fn coin_glow_blur(&self) -> f32 {
        22.0 + 8.0 * (self.t * 2.0).sin()
    }

    pub fn particles(&self) -> &[StreamParticle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// One frame of motion for a stream particle: age, pull toward the center
/// sink, damp, integrate.
#[inline]
pub fn integrate_stream(p: &mut StreamParticle, center: Vec2, speed: f32) {
    p.age += 1.0;
    p.vel += (center - p.pos) * ATTRACTION_GAIN * speed;
    p.vel *= STREAM_DAMPING;
    p.pos += p.vel;
}

/// A particle leaves the live set when its lifetime runs out or it crosses
/// the absorption radius, whichever comes first.
#[inline]
pub fn stream_expired(p: &StreamParticle, center: Vec2, absorb_radius: f32) -> bool {
    p.age >= p.max_age || p.pos.distance(center) <= absorb_radius
}

#[inline]
pub fn stream_alpha(p: &StreamParticle, center: Vec2, fade_radius: f32) -> f32 {
    let t = (p.age / p.max_age).clamp(0.0, 1.0);
    let inner = if p.pos.distance(center) < fade_radius {
        FADE_INNER_ALPHA
    } else {
        1.0
    };
    (1.0 - t) * inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> StreamRing {
        let vp = Viewport::from_bounds_ring(800.0, 600.0, 1.0);
        StreamRing::new(&RingConfig::default(), vp)
    }

    #[test]
    fn lanes_split_three_per_side() {
        let lanes = ring().layout().lanes();
        assert_eq!(lanes.len(), 6);
        assert_eq!(lanes.iter().filter(|l| l.hue == Hue::Cyan).count(), 3);
        assert_eq!(lanes.iter().filter(|l| l.hue == Hue::Amber).count(), 3);
        // cyan lanes sit left of center, amber right
        for l in &lanes {
            match l.hue {
                Hue::Cyan => assert!(l.spawn.x < 400.0),
                Hue::Amber => assert!(l.spawn.x > 400.0),
            }
        }
    }

    #[test]
    fn lane_aims_point_inward() {
        for l in ring().layout().lanes() {
            let to_aim = (l.aim - l.spawn).x;
            match l.hue {
                Hue::Cyan => assert!(to_aim > 0.0),
                Hue::Amber => assert!(to_aim < 0.0),
            }
        }
    }

    #[test]
    fn dash_geometry_per_ring() {
        let r = ring();
        assert_eq!(r.dash_pattern(0), [10.0, 14.0]);
        assert_eq!(r.dash_pattern(3), [22.0, 32.0]);
        let ring_r = r.layout().ring_radius;
        assert!((r.dashed_radius(0) - ring_r * 0.72).abs() < 1e-4);
        assert!(r.dashed_radius(3) < r.dashed_radius(0));
    }

    #[test]
    fn rotations_scale_with_spin() {
        let vp = Viewport::from_bounds_ring(800.0, 600.0, 1.0);
        let cfg = RingConfig {
            spin: 2.0,
            ..RingConfig::default()
        };
        let mut r = StreamRing::new(&cfg, vp);
        let mut rng = rand::rngs::mock::StepRng::new(u64::MAX / 2, 0);
        r.step(&mut rng);
        let t = r.time();
        assert!((r.primary_rotation() - t * 0.25 * 2.0).abs() < 1e-6);
        assert!((r.dashed_rotation() + t * 0.15 * 2.0).abs() < 1e-6);
    }
}
