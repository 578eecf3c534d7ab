// Heart curve sampling and the radial forces that shape the particle field.
// Every force is measured from the canvas center. The exponent of a force is
// applied to the squared distance, and a point sitting on the center feels no
// force at all (the 1/d term would otherwise be undefined).

use crate::config::{CENTER_X, CENTER_Y, HEART_ENLARGE};
use crate::types::Point2D;
use rand::Rng;
use rand::distr::OpenClosed01;
use std::f32::consts::PI;

/// Below this squared distance from the center, forces are zero.
const MIN_DIST_SQ: f32 = 1e-6;

/// Inward scatter used for the thin band hugging the outline.
pub const EDGE_SPREAD: f32 = 0.05;
/// Inward scatter used for the heart's filled body.
pub const CENTER_SPREAD: f32 = 0.27;

/// Point on the heart boundary at parameter `t` in [0, 2π).
/// Visual: t = 0 is the dip between the lobes, t = π the bottom tip.
pub fn heart_curve_point(t: f32) -> Point2D {
    heart_curve_point_scaled(t, HEART_ENLARGE)
}

/// Same curve with an explicit enlargement factor.
pub fn heart_curve_point_scaled(t: f32, scale: f32) -> Point2D {
    let x = 17.0 * t.sin().powi(3);
    let y = -(16.0 * t.cos() - 5.0 * (2.0 * t).cos() - 3.0 * (3.0 * t).cos());
    Point2D::new(
        (x * scale + CENTER_X).floor(),
        (y * scale + CENTER_Y).floor(),
    )
}

/// Offset from the center plus the radial force magnitude `1 / (d²)^exponent`.
/// Force is 0 when the point is (almost) on the center.
#[inline]
fn center_force(x: f32, y: f32, exponent: f32) -> (f32, f32, f32) {
    let dx = x - CENTER_X;
    let dy = y - CENTER_Y;
    let dist_sq = dx * dx + dy * dy;
    let force = if dist_sq < MIN_DIST_SQ { 0.0 } else { 1.0 / dist_sq.powf(exponent) };
    (dx, dy, force)
}

/// Pull (x, y) toward the center by an exponentially distributed fraction, per axis.
/// Larger `spread` = points land deeper inside the heart.
pub fn scatter_toward<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32, spread: f32) -> Point2D {
    // U in (0, 1], so ln(U) is finite
    let ux: f32 = rng.sample(OpenClosed01);
    let uy: f32 = rng.sample(OpenClosed01);
    let fx = -spread * ux.ln();
    let fy = -spread * uy.ln();
    Point2D::new(x - fx * (x - CENTER_X), y - fy * (y - CENTER_Y))
}

/// Contract (x, y) toward the center with an inverse power-law force.
/// Visual: pulls the halo ring inward by an amount that grows with `ratio`.
pub fn radial_contract(x: f32, y: f32, ratio: f32) -> Point2D {
    let (dx, dy, force) = center_force(x, y, 0.6);
    let force = -force;
    Point2D::new(x + ratio * force * dx, y + ratio * force * dy)
}

/// Beat waveform: period π/2 in `p`, amplitude 2/π.
#[inline]
pub fn periodic_pulse(p: f32) -> f32 {
    2.0 * (2.0 * (4.0 * p).sin()) / (2.0 * PI)
}

/// Per-frame deformation of a base point: radial breathing by `ratio`
/// plus independent uniform jitter in [-1, 1] on each axis.
pub fn radial_pulse_displace<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32, ratio: f32) -> Point2D {
    let (dx, dy, force) = center_force(x, y, 0.42);
    let jx: f32 = rng.random_range(-1.0..=1.0);
    let jy: f32 = rng.random_range(-1.0..=1.0);
    Point2D::new(
        x - (ratio * force * dx + jx),
        y - (ratio * force * dy + jy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::{fixture, rstest};
    use std::f32::consts::TAU;

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x4EA27)
    }

    fn dist(p: Point2D) -> f32 {
        ((p.x - CENTER_X).powi(2) + (p.y - CENTER_Y).powi(2)).sqrt()
    }

    #[test]
    fn curve_bottom_tip_is_centered_and_lowest() {
        let tip = heart_curve_point(PI);
        assert_eq!(tip.x, CENTER_X);
        assert_eq!(tip.y, (18.0 * HEART_ENLARGE + CENTER_Y).floor());

        for i in 0..2000 {
            let p = heart_curve_point(i as f32 * TAU / 2000.0);
            assert!(p.y <= tip.y, "{p:?} is below the tip {tip:?}");
        }
    }

    #[rstest]
    #[case::right(PI / 2.0, 1.0)]
    #[case::left(3.0 * PI / 2.0, -1.0)]
    fn curve_side_extremes(#[case] t: f32, #[case] side: f32) {
        // sin/cos at these angles are only exact up to f32 rounding
        let p = heart_curve_point(t);
        assert!((p.x - (side * 17.0 * HEART_ENLARGE + CENTER_X)).abs() <= 1.0, "{p:?}");
        assert!((p.y - (-5.0 * HEART_ENLARGE + CENTER_Y)).abs() <= 1.0, "{p:?}");
    }

    #[test]
    fn curve_stays_in_bounding_box() {
        let half_w = 17.0 * HEART_ENLARGE + 1.0;
        let half_h = 24.0 * HEART_ENLARGE + 1.0;
        for i in 0..5000 {
            let p = heart_curve_point(i as f32 * TAU / 5000.0);
            assert!(p.x.is_finite() && p.y.is_finite());
            assert_eq!(p.x, p.x.floor());
            assert_eq!(p.y, p.y.floor());
            assert!((p.x - CENTER_X).abs() <= half_w);
            assert!((p.y - CENTER_Y).abs() <= half_h);
        }
    }

    #[test]
    fn scaled_curve_is_larger() {
        let small = heart_curve_point_scaled(PI, 5.0);
        let big = heart_curve_point_scaled(PI, 12.0);
        assert!(dist(big) > dist(small));
    }

    #[rstest]
    fn scatter_never_crosses_to_the_far_side(mut rng: StdRng) {
        let (x, y) = (CENTER_X + 150.0, CENTER_Y - 80.0);
        for _ in 0..1000 {
            let p = scatter_toward(&mut rng, x, y, EDGE_SPREAD);
            assert!(p.x <= x && p.y >= y, "moved away from center: {p:?}");
        }
    }

    #[rstest]
    fn loose_scatter_goes_deeper(mut rng: StdRng) {
        let (x, y) = (CENTER_X + 150.0, CENTER_Y + 100.0);
        let n = 4000;
        let mean = |rng: &mut StdRng, spread| {
            (0..n).map(|_| dist(scatter_toward(rng, x, y, spread))).sum::<f32>() / n as f32
        };
        let tight = mean(&mut rng, EDGE_SPREAD);
        let loose = mean(&mut rng, CENTER_SPREAD);
        assert!(loose < tight, "loose {loose} vs tight {tight}");
    }

    #[test]
    fn contract_moves_inward() {
        let p = radial_contract(CENTER_X + 120.0, CENTER_Y - 50.0, 8.0);
        assert!(dist(p) < 130.0);
        assert!(p.x > CENTER_X && p.y < CENTER_Y);
    }

    #[test]
    fn pulse_shape() {
        assert_eq!(periodic_pulse(0.0), 0.0);
        let peak = periodic_pulse(PI / 8.0);
        assert!((peak - 2.0 / PI).abs() < 1e-6);
        assert!((periodic_pulse(1.3) - periodic_pulse(1.3 + PI / 2.0)).abs() < 1e-5);
        assert!(periodic_pulse(3.0 * PI / 8.0) < 0.0);
    }

    #[rstest]
    fn displace_breathes_with_ratio_sign(mut rng: StdRng) {
        let (x, y) = (CENTER_X + 150.0, CENTER_Y);
        // positive ratio pulls in, negative pushes out (jitter is at most 1px)
        let inward = radial_pulse_displace(&mut rng, x, y, 9.0);
        let outward = radial_pulse_displace(&mut rng, x, y, -9.0);
        assert!(inward.x < x - 1.0);
        assert!(outward.x > x + 1.0);
    }

    #[rstest]
    fn displace_jitter_is_bounded(mut rng: StdRng) {
        let (x, y) = (CENTER_X - 90.0, CENTER_Y + 40.0);
        for _ in 0..500 {
            let p = radial_pulse_displace(&mut rng, x, y, 0.0);
            assert!((p.x - x).abs() <= 1.0 && (p.y - y).abs() <= 1.0);
        }
    }

    #[rstest]
    fn forces_are_finite_at_the_center(mut rng: StdRng) {
        let c = radial_contract(CENTER_X, CENTER_Y, 10.0);
        assert_eq!(c, Point2D::new(CENTER_X, CENTER_Y));

        for ratio in [-15.0, 0.0, 15.0] {
            let p = radial_pulse_displace(&mut rng, CENTER_X, CENTER_Y, ratio);
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!((p.x - CENTER_X).abs() <= 1.0 && (p.y - CENTER_Y).abs() <= 1.0);
        }

        let s = scatter_toward(&mut rng, CENTER_X, CENTER_Y, CENTER_SPREAD);
        assert_eq!(s, Point2D::new(CENTER_X, CENTER_Y));
    }
}
