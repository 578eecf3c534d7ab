// FX: twinkling starfield behind the heart, software-drawn with additive blending.
// Visual outcomes:
// - Dim dots scattered over the canvas slowly brighten and fade, each at its own pace.
// - The brightest stars get a tiny soft glow so they read as "near".

use crate::types::FrameBuffer;
use rand::Rng;
use std::f32::consts::TAU;

// ----------------------------- additive drawing helpers --------------------------------

/// Additive blend one RGB triplet at (x,y) with saturation to 255.
/// Visual: the pixel gets brighter/colored; repeated draws stack until white.
#[inline]
pub fn add_rgb_saturating(fb: &mut FrameBuffer, x: i32, y: i32, r: u8, g: u8, b: u8) {
    if x < 0 || y < 0 { return; }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height { return; }

    let idx = y * fb.width + x;
    let old = fb.pixels[idx];

    let or = ((old >> 16) & 0xFF) as u16;
    let og = ((old >> 8)  & 0xFF) as u16;
    let ob = ( old        & 0xFF) as u16;

    // Add with clamp (saturating)
    let nr = (or + r as u16).min(255) as u32;
    let ng = (og + g as u16).min(255) as u32;
    let nb = (ob + b as u16).min(255) as u32;

    fb.pixels[idx] = (nr << 16) | (ng << 8) | nb;
}

/// Draw a soft round glow centered at (cx,cy) with additive blending.
/// `strength` in [0,1] scales brightness; `base` is the color.
/// Visual: a fuzzy dot of light, brightest in the middle.
fn draw_additive_disc(
    fb: &mut FrameBuffer,
    cx: i32, cy: i32,
    radius: i32,
    base: (u8, u8, u8),
    strength: f32
) {
    if radius <= 0 { return; }
    let r2 = (radius * radius) as f32;
    let sigma = radius as f32 * 0.5;
    let denom = 2.0 * sigma * sigma;

    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d2 = dx*dx + dy*dy;
            if d2 > r2 { continue; }

            // Gaussian falloff: 1.0 at center → ~0 at edge
            let w = (-d2 / denom).exp() * strength;
            let scale = |c: u8| (c as f32 * w).round().clamp(0.0, 255.0) as u8;
            add_rgb_saturating(fb, x, y, scale(base.0), scale(base.1), scale(base.2));
        }
    }
}

// ----------------------------- stars ---------------------------------------------------

/// One star. Visual: a single pixel whose brightness breathes over time.
pub struct Star {
    pub x: i32, pub y: i32,        // position in pixels
    pub brightness: f32,           // peak brightness (0..1)
    pub speed: f32,                // twinkle rate in radians/sec
    pub phase: f32,                // offset so stars don't blink in sync
}

impl Star {
    /// Current brightness at `time` seconds, always within [0.1, 1] of the peak.
    #[inline]
    pub fn twinkle(&self, time: f32) -> f32 {
        self.brightness * (0.55 + 0.45 * (self.speed * time + self.phase).sin())
    }
}

/// Starfield container. Visual: keeps every star; placement never changes.
pub struct Starfield {
    stars: Vec<Star>,
}

const STAR_TINT: (u8, u8, u8) = (200, 210, 255);
const GLOW_THRESHOLD: f32 = 0.85;

impl Starfield {
    /// Scatter `count` stars over a `width`×`height` canvas.
    /// Visual: no immediate effect; stars appear once rendered.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize, width: usize, height: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random_range(0..width.max(1)) as i32,
                y: rng.random_range(0..height.max(1)) as i32,
                brightness: rng.random_range(0.25..1.0),
                speed: rng.random_range(0.6..2.4),
                phase: rng.random_range(0.0..TAU),
            })
            .collect();
        Self { stars }
    }

    pub(crate) fn len(&self) -> usize {
        self.stars.len()
    }

    /// Draw every star at `time` seconds on top of `fb` (additive).
    /// Visual: the field shimmers; bright stars carry a small halo.
    pub fn render(&self, fb: &mut FrameBuffer, time: f32) {
        for s in &self.stars {
            let w = s.twinkle(time);
            let c = |v: u8| (v as f32 * w).round().clamp(0.0, 255.0) as u8;
            add_rgb_saturating(fb, s.x, s.y, c(STAR_TINT.0), c(STAR_TINT.1), c(STAR_TINT.2));

            if w > GLOW_THRESHOLD {
                draw_additive_disc(fb, s.x, s.y, 2, STAR_TINT, 0.35 * w);
            }
        }
    }
}
