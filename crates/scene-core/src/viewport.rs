use glam::Vec2;

use crate::constants::{DPR_MAX, DPR_MIN, RING_MIN_HEIGHT, RING_MIN_WIDTH};

/// Logical drawing dimensions plus the clamped device-pixel-ratio.
///
/// Drawing happens in logical units; the backing store is logical * dpr with
/// a matching transform applied by the web driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    /// Viewport for the ambient field: observed size floored at 1.
    pub fn from_bounds(width: f32, height: f32, raw_dpr: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            dpr: raw_dpr.clamp(DPR_MIN, DPR_MAX),
        }
    }

    /// Viewport for the coin ring: the scene needs room for its lane arms,
    /// so the logical size is floored at 320x240.
    pub fn from_bounds_ring(width: f32, height: f32, raw_dpr: f32) -> Self {
        Self {
            width: width.floor().max(RING_MIN_WIDTH),
            height: height.floor().max(RING_MIN_HEIGHT),
            dpr: raw_dpr.clamp(DPR_MIN, DPR_MAX),
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Backing-store pixel dimensions.
    #[inline]
    pub fn physical(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor().max(1.0) as u32,
            (self.height * self.dpr).floor().max(1.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpr_is_clamped_to_one_two() {
        assert_eq!(Viewport::from_bounds(800.0, 600.0, 0.5).dpr, 1.0);
        assert_eq!(Viewport::from_bounds(800.0, 600.0, 3.0).dpr, 2.0);
        assert_eq!(Viewport::from_bounds(800.0, 600.0, 1.5).dpr, 1.5);
    }

    #[test]
    fn degenerate_bounds_are_floored() {
        let vp = Viewport::from_bounds(0.0, -5.0, 1.0);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 1.0);
        assert_eq!(vp.physical(), (1, 1));
    }

    #[test]
    fn ring_viewport_has_minimum_size() {
        let vp = Viewport::from_bounds_ring(100.0, 50.0, 1.0);
        assert_eq!(vp.width, 320.0);
        assert_eq!(vp.height, 240.0);
        assert_eq!(vp.min_side(), 240.0);
    }

    #[test]
    fn physical_scales_by_dpr() {
        let vp = Viewport::from_bounds(800.0, 600.0, 2.0);
        assert_eq!(vp.physical(), (1600, 1200));
        assert_eq!(vp.center(), Vec2::new(400.0, 300.0));
    }
}
