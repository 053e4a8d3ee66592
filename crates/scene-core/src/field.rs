//! Ambient background field: drifting node/block particles with
//! proximity-based connection edges between nodes.

use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Node,
    Block,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Magenta,
    Blue,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub kind: ParticleKind,
    pub tone: Tone,
}

/// An edge between two node particles, ready to stroke.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
    pub tone: Tone,
}

/// Pointer position in canvas-local logical coordinates, when the pointer
/// is over the page. Absence disables the parallax nudge.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub active: bool,
}

pub struct ParticleField {
    viewport: Viewport,
    reduce_motion: bool,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(viewport: Viewport, reduce_motion: bool, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            viewport,
            reduce_motion,
            particles: Vec::new(),
        };
        field.rebuild(rng);
        field
    }

    /// Replace the entire particle set; counts derive from the current area.
    fn rebuild(&mut self, rng: &mut impl Rng) {
        self.particles.clear();

        let area = self.viewport.area();
        let node_count = ((area / NODE_AREA_DIVISOR) as usize).clamp(NODE_COUNT_MIN, NODE_COUNT_MAX);
        let block_count =
            ((area / BLOCK_AREA_DIVISOR) as usize).clamp(BLOCK_COUNT_MIN, BLOCK_COUNT_MAX);
        self.particles.reserve(node_count + block_count);

        let (w, h) = (self.viewport.width, self.viewport.height);
        for _ in 0..node_count {
            self.particles.push(Particle {
                pos: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
                vel: Vec2::new(rng.gen_range(-0.22..0.22), rng.gen_range(-0.18..0.18)),
                radius: rng.gen_range(1.2..2.2),
                kind: ParticleKind::Node,
                tone: node_tone(rng.gen::<f32>()),
            });
        }
        for _ in 0..block_count {
            self.particles.push(Particle {
                pos: Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
                vel: Vec2::new(rng.gen_range(-0.12..0.12), rng.gen_range(-0.1..0.1)),
                radius: rng.gen_range(5.5..10.0),
                kind: ParticleKind::Block,
                tone: if rng.gen::<f32>() < 0.5 {
                    Tone::Cyan
                } else {
                    Tone::Magenta
                },
            });
        }
        log::debug!(
            "field rebuilt: {} nodes, {} blocks for {}x{}",
            node_count,
            block_count,
            w,
            h
        );
    }

    /// Resize regenerates the whole population; no particle survives.
    pub fn resize(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.viewport = viewport;
        self.rebuild(rng);
    }

    /// Advance every particle by one frame.
    ///
    /// Velocities are tuned against a 60fps step, so integration scales by
    /// `60 * dt`. With reduced motion both the drift and the pointer nudge
    /// are suppressed; the layout stays static.
    pub fn step(&mut self, dt: f32, pointer: PointerState) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let nudge = if pointer.active && !self.reduce_motion {
            let half = Vec2::new(w * 0.5, h * 0.5);
            Some((pointer.pos - half) / half * POINTER_NUDGE)
        } else {
            None
        };

        for p in &mut self.particles {
            if !self.reduce_motion {
                p.pos += p.vel * FRAME_RATE_SCALE * dt;
            }
            if let Some(n) = nudge {
                let factor = match p.kind {
                    ParticleKind::Block => BLOCK_NUDGE_FACTOR,
                    ParticleKind::Node => 1.0,
                };
                p.pos += n * factor;
            }
            wrap_position(&mut p.pos, w, h);
        }
    }

    /// Distance under which two nodes get a connecting edge.
    pub fn connect_threshold(&self) -> f32 {
        (self.viewport.area().sqrt() / CONNECT_DIST_DIVISOR)
            .clamp(CONNECT_DIST_MIN, CONNECT_DIST_MAX)
    }

    /// Edges for the current frame. Pairs are unordered; the result is
    /// independent of iteration direction.
    pub fn connections(&self) -> Vec<Connection> {
        let threshold = self.connect_threshold();
        let mut edges = Vec::new();
        for i in 0..self.particles.len() {
            let a = &self.particles[i];
            if a.kind != ParticleKind::Node {
                continue;
            }
            for b in &self.particles[i + 1..] {
                if let Some(edge) = connection_between(a, b, threshold) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn reduce_motion(&self) -> bool {
        self.reduce_motion
    }
}

/// Toroidal wrap: a particle leaving the margin band on one side re-enters
/// from the opposite side.
#[inline]
pub fn wrap_position(pos: &mut Vec2, width: f32, height: f32) {
    if pos.x < -WRAP_MARGIN {
        pos.x = width + WRAP_MARGIN;
    }
    if pos.x > width + WRAP_MARGIN {
        pos.x = -WRAP_MARGIN;
    }
    if pos.y < -WRAP_MARGIN {
        pos.y = height + WRAP_MARGIN;
    }
    if pos.y > height + WRAP_MARGIN {
        pos.y = -WRAP_MARGIN;
    }
}

/// Edge decision for one unordered node pair. Symmetric in its arguments:
/// distance and tint do not depend on which endpoint comes first.
#[inline]
pub fn connection_between(a: &Particle, b: &Particle, threshold: f32) -> Option<Connection> {
    if a.kind != ParticleKind::Node || b.kind != ParticleKind::Node {
        return None;
    }
    let d = a.pos.distance(b.pos);
    if d > threshold {
        return None;
    }
    Some(Connection {
        a: a.pos,
        b: b.pos,
        alpha: (1.0 - d / threshold) * CONNECT_ALPHA,
        tone: edge_tone(a.tone, b.tone),
    })
}

/// Node tone from one uniform draw: cyan below 0.45, blue below 0.70,
/// magenta otherwise. The cumulative cuts give exactly 45/25/30.
#[inline]
pub fn node_tone(u: f32) -> Tone {
    if u < TONE_CYAN_CUT {
        Tone::Cyan
    } else if u < TONE_BLUE_CUT {
        Tone::Blue
    } else {
        Tone::Magenta
    }
}

/// Edge tint: magenta dominates, then cyan, blue as the quiet default.
#[inline]
pub fn edge_tone(a: Tone, b: Tone) -> Tone {
    if a == Tone::Magenta || b == Tone::Magenta {
        Tone::Magenta
    } else if a == Tone::Cyan || b == Tone::Cyan {
        Tone::Cyan
    } else {
        Tone::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_cuts_are_exact() {
        assert_eq!(node_tone(0.0), Tone::Cyan);
        assert_eq!(node_tone(0.4499), Tone::Cyan);
        assert_eq!(node_tone(0.45), Tone::Blue);
        assert_eq!(node_tone(0.6999), Tone::Blue);
        assert_eq!(node_tone(0.70), Tone::Magenta);
        assert_eq!(node_tone(0.9999), Tone::Magenta);
    }

    #[test]
    fn edge_tone_priority() {
        assert_eq!(edge_tone(Tone::Blue, Tone::Magenta), Tone::Magenta);
        assert_eq!(edge_tone(Tone::Cyan, Tone::Magenta), Tone::Magenta);
        assert_eq!(edge_tone(Tone::Blue, Tone::Cyan), Tone::Cyan);
        assert_eq!(edge_tone(Tone::Blue, Tone::Blue), Tone::Blue);
        // symmetric in argument order
        assert_eq!(
            edge_tone(Tone::Cyan, Tone::Blue),
            edge_tone(Tone::Blue, Tone::Cyan)
        );
    }
}
