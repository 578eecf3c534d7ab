// The particle heart: base point sets built once, then every animation frame
// precomputed up front. After construction nothing here touches randomness, so
// playing the frames back is fully repeatable.

use crate::config::HALO_ENLARGE;
use crate::geometry::{
    CENTER_SPREAD, EDGE_SPREAD, heart_curve_point, heart_curve_point_scaled, periodic_pulse,
    radial_contract, radial_pulse_displace, scatter_toward,
};
use crate::types::{Frame, Point2D, SizedPoint};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::f32::consts::{PI, TAU};
use std::num::NonZeroUsize;
use std::time::Instant;

pub const OUTLINE_COUNT: usize = 1000;
pub const EDGE_PER_OUTLINE: usize = 3;
pub const CENTER_COUNT: usize = 5000;

const HALO_JITTER: f32 = 60.0;

/// Points computed once and shared (read-only) by every frame.
struct BasePointSet {
    outline: Vec<Point2D>,
    edge_diffusion: Vec<Point2D>,
    center_diffusion: Vec<Point2D>,
}

impl BasePointSet {
    /// Visual: a crisp outline, a thin fuzzy band just inside it, and a soft
    /// filled body. Duplicates are kept on purpose; they add density.
    fn build<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let outline: Vec<Point2D> = (0..count)
            .map(|_| heart_curve_point(rng.random_range(0.0..TAU)))
            .collect();

        let mut edge_diffusion = Vec::with_capacity(count * EDGE_PER_OUTLINE);
        for p in &outline {
            for _ in 0..EDGE_PER_OUTLINE {
                edge_diffusion.push(scatter_toward(rng, p.x, p.y, EDGE_SPREAD));
            }
        }

        let center_diffusion = (0..CENTER_COUNT)
            .map(|_| {
                let p = outline[rng.random_range(0..outline.len())];
                scatter_toward(rng, p.x, p.y, CENTER_SPREAD)
            })
            .collect();

        Self { outline, edge_diffusion, center_diffusion }
    }

    fn len(&self) -> usize {
        self.outline.len() + self.edge_diffusion.len() + self.center_diffusion.len()
    }
}

/// Beat parameters for one frame index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePulse {
    pub phase: f32,
    pub pulse: f32,
    /// Signed breathing strength for the base points.
    pub ratio: f32,
    /// Contraction applied to the halo ring, never below 4.
    pub halo_radius: u32,
    /// Halo candidates sampled before deduplication.
    pub halo_count: usize,
}

impl FramePulse {
    pub fn at(frame: usize, frame_count: NonZeroUsize) -> Self {
        let phase = frame as f32 / frame_count.get() as f32 * PI;
        let pulse = periodic_pulse(phase);
        Self {
            phase,
            pulse,
            ratio: 15.0 * pulse,
            halo_radius: ((4.0 + 6.0 * (1.0 + pulse)).floor() as u32).max(4),
            halo_count: (1500.0 + 2000.0 * pulse * pulse).floor() as usize,
        }
    }
}

/// Precomputed, looping animation of the particle heart.
pub struct HeartField {
    frames: Vec<Frame>,
}

impl HeartField {
    /// Build every frame with a freshly seeded RNG.
    pub fn new(frame_count: NonZeroUsize) -> Self {
        let mut rng = StdRng::from_os_rng();
        Self::with_rng(frame_count, &mut rng)
    }

    /// Build every frame drawing all randomness from `rng`.
    /// Visual: nothing on screen yet; this is the (one-off) expensive part.
    pub fn with_rng<R: Rng + ?Sized>(frame_count: NonZeroUsize, rng: &mut R) -> Self {
        let started = Instant::now();
        let base = BasePointSet::build(rng, OUTLINE_COUNT);
        debug!(
            "base set: {} outline, {} edge, {} center",
            base.outline.len(),
            base.edge_diffusion.len(),
            base.center_diffusion.len()
        );

        let frames: Vec<Frame> = (0..frame_count.get())
            .map(|f| calc(rng, &base, FramePulse::at(f, frame_count)))
            .collect();

        let total: usize = frames.iter().map(Frame::len).sum();
        info!(
            "heart field ready: {} frames, ~{} points/frame, built in {:.2?}",
            frames.len(),
            total / frames.len(),
            started.elapsed()
        );
        Self { frames }
    }

    /// Frame for any index; wraps both ways so playback loops.
    pub fn frame(&self, index: i64) -> &Frame {
        let n = self.frames.len() as i64;
        &self.frames[index.rem_euclid(n) as usize]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Generate one frame: halo particles first, then the deformed base sets.
fn calc<R: Rng + ?Sized>(rng: &mut R, base: &BasePointSet, pulse: FramePulse) -> Frame {
    let mut points = Vec::with_capacity(pulse.halo_count + base.len());

    // Halo: ring samples pulled in by `halo_radius`, one particle per integer pixel.
    let mut seen: HashSet<(i32, i32)> = HashSet::with_capacity(pulse.halo_count);
    for _ in 0..pulse.halo_count {
        let t = rng.random_range(0.0..TAU);
        let p = heart_curve_point_scaled(t, HALO_ENLARGE);
        let p = radial_contract(p.x, p.y, pulse.halo_radius as f32);
        if !seen.insert((p.x.floor() as i32, p.y.floor() as i32)) {
            continue;
        }
        let x = p.x + rng.random_range(-HALO_JITTER..=HALO_JITTER);
        let y = p.y + rng.random_range(-HALO_JITTER..=HALO_JITTER);
        let size = if rng.random_bool(2.0 / 3.0) { 1 } else { 2 };
        points.push(SizedPoint { x, y, size });
    }
    let halo_len = points.len();

    let sets: [(&[Point2D], u8); 3] = [
        (base.outline.as_slice(), 3),
        (base.edge_diffusion.as_slice(), 2),
        (base.center_diffusion.as_slice(), 2),
    ];
    for (set, max_size) in sets {
        for p in set {
            let q = radial_pulse_displace(rng, p.x, p.y, pulse.ratio);
            let size = rng.random_range(1..=max_size);
            points.push(SizedPoint { x: q.x, y: q.y, size });
        }
    }

    debug!(
        "frame phase {:.3}: pulse {:+.3}, ratio {:+.2}, halo {}/{} (radius {})",
        pulse.phase, pulse.pulse, pulse.ratio, halo_len, pulse.halo_count, pulse.halo_radius
    );
    Frame::new(points, halo_len, pulse)
}
