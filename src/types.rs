// Core types shared by the generator and the renderer.

use crate::heart::FramePulse;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A canvas filled with one color.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// A position in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A drawable particle. Visual: a filled square of side `size` at (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizedPoint {
    pub x: f32,
    pub y: f32,
    pub size: u8,
}

/// One precomputed step of the animation.
/// Points are ordered halo first, then outline, edge diffusion, center diffusion.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    points: Vec<SizedPoint>,
    halo_len: usize,
    pulse: FramePulse,
}

impl Frame {
    pub(crate) fn new(points: Vec<SizedPoint>, halo_len: usize, pulse: FramePulse) -> Self {
        debug_assert!(halo_len <= points.len());
        Self { points, halo_len, pulse }
    }

    pub fn points(&self) -> &[SizedPoint] {
        &self.points
    }

    /// Number of leading points that are halo particles.
    pub fn halo_len(&self) -> usize {
        self.halo_len
    }

    pub fn pulse(&self) -> &FramePulse {
        &self.pulse
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
}
